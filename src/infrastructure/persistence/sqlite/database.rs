//! SQLite Database - 数据库连接和迁移

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    Pool, Sqlite,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
    /// 遇到锁时的等待时间（毫秒）
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./data/todo.db?mode=rwc".to_string(),
            max_connections: 5,
            busy_timeout_ms: 5000,
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            ..Self::default()
        }
    }

    /// 内存数据库：每个连接各自一份数据，因此只允许一个连接
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            busy_timeout_ms: 5000,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// PRAGMA 通过连接选项下发，池中每个新连接都会生效。
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
    if config.is_in_memory() {
        // 数据只活在这一个连接里，不能被回收
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        max_connections = config.max_connections,
        busy_timeout_ms = config.busy_timeout_ms,
        in_memory = config.is_in_memory(),
        "SQLite pool created with WAL mode"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        // 迁移可重复执行
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_file_db() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("todo.db"));
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        assert!(dir.path().join("todo.db").exists());
    }

    #[tokio::test]
    async fn test_pragmas_apply_to_every_connection() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            max_connections: 3,
            busy_timeout_ms: 1234,
            ..DatabaseConfig::new(dir.path().join("todo.db"))
        };
        let pool = create_pool(&config).await.unwrap();

        // 同时持有三个连接，迫使池建立三个不同的连接
        let mut conns = Vec::new();
        for _ in 0..3 {
            conns.push(pool.acquire().await.unwrap());
        }

        for conn in conns.iter_mut() {
            let busy: i64 = sqlx::query_scalar("PRAGMA busy_timeout")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert_eq!(busy, 1234);

            let journal: String = sqlx::query_scalar("PRAGMA journal_mode")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert_eq!(journal.to_lowercase(), "wal");

            // NORMAL = 1
            let synchronous: i64 = sqlx::query_scalar("PRAGMA synchronous")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert_eq!(synchronous, 1);
        }
    }

    #[tokio::test]
    async fn test_in_memory_pool_keeps_its_connection() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_in_memory());
        assert!(!DatabaseConfig::new("todo.db").is_in_memory());

        let pool = create_pool(&config).await.unwrap();
        assert_eq!(pool.options().get_idle_timeout(), None);
        assert_eq!(pool.options().get_max_lifetime(), None);

        run_migrations(&pool).await.unwrap();
        sqlx::query("INSERT INTO todos (title) VALUES ('kept')")
            .execute(&pool)
            .await
            .unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
