//! Todo HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{CreateTodo, DeleteTodo, GetTodo, ListTodos, UpdateTodo};
use crate::domain::{TodoDraft, TodoId};
use crate::infrastructure::http::dto::{TodoRequest, TodoResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 路径 id 必须是整数
fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<TodoId, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(format!("Invalid todo id: {}", e)))?;
    Ok(TodoId::new(id))
}

/// 请求体必须能绑定到 Todo 结构
fn bind(payload: Result<Json<Value>, JsonRejection>) -> Result<TodoRequest, String> {
    let Json(value) = payload.map_err(|e| format!("Invalid todo body: {}", e))?;
    TodoRequest::bind(value).map_err(|e| format!("Invalid todo body: {}", e))
}

/// 创建 Todo
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // 绑定结果交给用例，先取句柄再报告绑定失败
    let draft = bind(payload).map(TodoDraft::from);

    let todo = state
        .create_todo_handler
        .handle(CreateTodo { draft })
        .await?;

    let location = todo.id.location();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoResponse::from(todo)),
    ))
}

/// 获取 Todo 详情
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = path_id(id)?;

    let todo = state.get_todo_handler.handle(GetTodo { id }).await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// 获取 Todo 列表
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = state.list_todos_handler.handle(ListTodos).await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// 整体更新 Todo，id 以路径为准
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = path_id(id)?;
    let req = bind(payload).map_err(ApiError::BadRequest)?;

    let todo = state
        .update_todo_handler
        .handle(UpdateTodo {
            id,
            draft: req.into(),
        })
        .await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// 删除 Todo
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(id)?;

    state.delete_todo_handler.handle(DeleteTodo { id }).await?;

    Ok(StatusCode::NO_CONTENT)
}
