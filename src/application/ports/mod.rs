//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod db_provider;
mod repositories;

pub use db_provider::{DbProviderPort, ProviderError};
pub use repositories::{Lookup, RepositoryError, TodoHandle};
