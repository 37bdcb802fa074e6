//! Todo Context - Value Objects

use serde::{Deserialize, Serialize};

/// Todo 唯一标识，由存储在创建时分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Location 头使用的相对资源路径
    pub fn location(&self) -> String {
        format!("todo/{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location() {
        assert_eq!(TodoId::new(42).location(), "todo/42");
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&TodoId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
