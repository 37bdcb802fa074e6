//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{ProviderError, RepositoryError};
use crate::domain::TodoId;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: TodoId,
    },

    /// 请求体无法绑定
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 存储不可用（无法取得句柄）
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: TodoId) -> Self {
        Self::NotFound { resource_type, id }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<ProviderError> for ApplicationError {
    fn from(err: ProviderError) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}
