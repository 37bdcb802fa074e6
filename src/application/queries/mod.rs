//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：单条、列表、健康检查

mod health_queries;
mod todo_queries;

pub mod handlers;

pub use health_queries::*;
pub use todo_queries::*;
