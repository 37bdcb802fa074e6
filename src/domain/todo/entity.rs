//! Todo Context - Entity

use serde::{Deserialize, Serialize};

use super::TodoId;

/// Todo 实体
///
/// 不变量:
/// - id 创建后不可变
/// - 更新是整体替换，不做字段合并
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// 尚未持久化的 Todo（没有 id）
///
/// 请求体绑定成功后得到它；创建时由存储分配 id，更新时使用路径中的 id。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub completed: bool,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }

    /// 绑定标识，得到完整实体
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
        }
    }
}
