//! Todo Queries

use crate::domain::TodoId;

/// 获取 Todo 详情查询
#[derive(Debug, Clone)]
pub struct GetTodo {
    pub id: TodoId,
}

/// 列出所有 Todo 查询
#[derive(Debug, Clone)]
pub struct ListTodos;
