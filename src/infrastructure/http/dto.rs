//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Todo, TodoDraft};

// ============================================================================
// Todo DTOs
// ============================================================================

/// 创建 / 更新请求体
///
/// 缺失字段取默认值；请求体中的 `id` 会被忽略（创建时由存储分配，更新时以路径为准）。
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoRequest {
    /// 从 JSON 绑定，只接受对象
    ///
    /// 派生的 Deserialize 也接受数组形式（按字段顺序），这里显式拒绝。
    pub fn bind(value: Value) -> Result<Self, String> {
        if !value.is_object() {
            return Err("Todo body must be a JSON object".to_string());
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }
}

impl From<TodoRequest> for TodoDraft {
    fn from(req: TodoRequest) -> Self {
        TodoDraft::new(req.title, req.completed)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.get(),
            title: todo.title,
            completed: todo.completed,
        }
    }
}
