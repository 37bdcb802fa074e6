//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod provider;
mod todo_repo;

pub use database::*;
pub use provider::*;
pub use todo_repo::*;
