//! Database Provider Port

use async_trait::async_trait;
use thiserror::Error;

use super::TodoHandle;

/// 获取存储句柄失败
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Database Provider Port
///
/// 多个请求会并发调用 `get`，实现必须是 `Send + Sync`。
#[async_trait]
pub trait DbProviderPort: Send + Sync {
    /// 获取一个请求级别的存储句柄
    async fn get(&self) -> Result<Box<dyn TodoHandle>, ProviderError>;
}
