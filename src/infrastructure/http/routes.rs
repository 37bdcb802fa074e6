//! HTTP Routes
//!
//! API Endpoints:
//! - /health        GET     健康检查
//! - /todo          POST    创建 Todo
//! - /todo          GET     列出所有 Todo
//! - /todo/:id      GET     获取 Todo
//! - /todo/:id      PUT     整体更新 Todo
//! - /todo/:id      DELETE  删除 Todo

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(todo_routes())
}

/// Todo 路由
fn todo_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todo", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todo/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
}
