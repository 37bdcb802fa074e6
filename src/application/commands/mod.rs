//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：创建、整体更新、删除

mod todo_commands;

pub mod handlers;

pub use todo_commands::*;
