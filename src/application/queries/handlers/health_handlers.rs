//! Health Query Handler

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::DbProviderPort;
use crate::application::queries::CheckHealth;

/// CheckHealth Handler
///
/// 只区分健康 / 严重两档：取不到句柄或查询失败都返回错误。
pub struct CheckHealthHandler {
    db: Arc<dyn DbProviderPort>,
}

impl CheckHealthHandler {
    pub fn new(db: Arc<dyn DbProviderPort>) -> Self {
        Self { db }
    }

    pub async fn handle(&self, _query: CheckHealth) -> Result<(), ApplicationError> {
        let mut db = self.db.get().await?;

        let todos = db.find_all().await?;
        tracing::debug!(count = todos.len(), "Health probe succeeded");

        Ok(())
    }
}
