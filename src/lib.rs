//! todod - Todo 资源 HTTP 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Todo Context: Todo 实体与标识
//!
//! 应用层 (application/):
//! - Ports: DbProviderPort（按请求取句柄）、TodoHandle（存储句柄）
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 获取 / 列表 / 健康检查
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API (axum)
//! - Persistence: SQLite (sqlx)
//! - Memory: 内存 Provider（测试用）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
