//! Health Handler
//!
//! 2xx 表示健康，其余（500）表示严重；没有降级档位。

use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::application::CheckHealth;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 健康检查：取得句柄并查询一次，成功返回 200 空响应体
pub async fn health(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.check_health_handler.handle(CheckHealth).await?;
    Ok(StatusCode::OK)
}
