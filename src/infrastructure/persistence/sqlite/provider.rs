//! SQLite Database Provider

use async_trait::async_trait;

use super::{DbPool, SqliteTodoHandle};
use crate::application::ports::{DbProviderPort, ProviderError, TodoHandle};

/// SQLite Provider：每次 `get` 从连接池取出一个连接
#[derive(Clone)]
pub struct SqliteDbProvider {
    pool: DbPool,
}

impl SqliteDbProvider {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DbProviderPort for SqliteDbProvider {
    async fn get(&self) -> Result<Box<dyn TodoHandle>, ProviderError> {
        if self.pool.is_closed() {
            return Err(ProviderError::Unavailable("connection pool is closed".to_string()));
        }

        let conn = self.pool.acquire().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to acquire database connection");
            ProviderError::Unavailable(e.to_string())
        })?;

        Ok(Box::new(SqliteTodoHandle::new(conn)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    #[tokio::test]
    async fn test_get_returns_usable_handle() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let provider = SqliteDbProvider::new(pool);

        let mut db = provider.get().await.unwrap();
        assert!(db.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_pool_is_unavailable() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        pool.close().await;

        let provider = SqliteDbProvider::new(pool);
        assert!(matches!(
            provider.get().await,
            Err(ProviderError::Unavailable(_))
        ));
    }
}
