//! Persistence Layer - 数据持久化
//!
//! SQLite 存储实现

pub mod sqlite;

pub use self::sqlite::SqliteDbProvider;
