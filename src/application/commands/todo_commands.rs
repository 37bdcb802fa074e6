//! Todo Commands

use crate::domain::{TodoDraft, TodoId};

/// 创建 Todo 命令
///
/// 携带请求体的绑定结果：绑定失败要在取得句柄之后才报告，
/// 存储不可用时优先返回 500。
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub draft: Result<TodoDraft, String>,
}

/// 整体更新 Todo 命令，`id` 来自请求路径
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub id: TodoId,
    pub draft: TodoDraft,
}

/// 删除 Todo 命令
#[derive(Debug, Clone)]
pub struct DeleteTodo {
    pub id: TodoId,
}
