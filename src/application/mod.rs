//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 存储句柄与数据库 Provider 端口
//! - commands: CQRS 命令及处理器（创建、更新、删除）
//! - queries: CQRS 查询及处理器（单条、列表、健康检查）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CreateTodoHandler, DeleteTodoHandler, UpdateTodoHandler},
    CreateTodo, DeleteTodo, UpdateTodo,
};

pub use error::ApplicationError;

pub use ports::{DbProviderPort, Lookup, ProviderError, RepositoryError, TodoHandle};

pub use queries::{
    handlers::{CheckHealthHandler, GetTodoHandler, ListTodosHandler},
    CheckHealth, GetTodo, ListTodos,
};
