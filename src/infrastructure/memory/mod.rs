//! Memory Layer - In-Memory Storage
//!
//! 基于 DashMap 的 DbProvider 实现，用于测试和无数据库运行

mod todo_store;

pub use todo_store::{InMemoryDbProvider, InMemoryTodoHandle};
