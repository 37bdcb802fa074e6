//! Repository Ports - 出站端口
//!
//! 定义 Todo 存储句柄的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Todo, TodoDraft, TodoId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// 按 id 查找的结果
///
/// 与 `Result` 组合后区分三种情况：找到、不存在、查询出错。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

/// 存储句柄
///
/// 由 [`DbProviderPort::get`](super::DbProviderPort::get) 取得，仅在单个请求内使用，
/// 请求结束时随 drop 释放。
#[async_trait]
pub trait TodoHandle: Send {
    /// 获取所有 Todo
    async fn find_all(&mut self) -> Result<Vec<Todo>, RepositoryError>;

    /// 根据 ID 查找 Todo
    async fn first(&mut self, id: TodoId) -> Result<Lookup<Todo>, RepositoryError>;

    /// 新建 Todo，id 由存储分配
    async fn create(&mut self, draft: &TodoDraft) -> Result<Todo, RepositoryError>;

    /// 以 `todo.id` 为键整体覆盖
    async fn save(&mut self, todo: &Todo) -> Result<(), RepositoryError>;

    /// 删除 Todo
    async fn delete(&mut self, id: TodoId) -> Result<(), RepositoryError>;
}
