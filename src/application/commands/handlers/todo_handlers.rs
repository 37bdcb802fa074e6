//! Todo Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateTodo, DeleteTodo, UpdateTodo};
use crate::application::error::ApplicationError;
use crate::application::ports::{DbProviderPort, Lookup};
use crate::domain::Todo;

// ============================================================================
// CreateTodo
// ============================================================================

/// CreateTodo Handler
pub struct CreateTodoHandler {
    db: Arc<dyn DbProviderPort>,
}

impl CreateTodoHandler {
    pub fn new(db: Arc<dyn DbProviderPort>) -> Self {
        Self { db }
    }

    pub async fn handle(&self, command: CreateTodo) -> Result<Todo, ApplicationError> {
        let mut db = self.db.get().await?;

        let draft = command.draft.map_err(ApplicationError::ValidationError)?;
        let todo = db.create(&draft).await?;

        tracing::info!(todo_id = %todo.id, title = %todo.title, "Todo created");

        Ok(todo)
    }
}

// ============================================================================
// UpdateTodo
// ============================================================================

/// UpdateTodo Handler
///
/// 先单独查一次存在性，不存在时不写入；存在时用请求体整体覆盖。
pub struct UpdateTodoHandler {
    db: Arc<dyn DbProviderPort>,
}

impl UpdateTodoHandler {
    pub fn new(db: Arc<dyn DbProviderPort>) -> Self {
        Self { db }
    }

    pub async fn handle(&self, command: UpdateTodo) -> Result<Todo, ApplicationError> {
        let todo = command.draft.into_todo(command.id);

        let mut db = self.db.get().await?;

        if let Lookup::NotFound = db.first(todo.id).await? {
            return Err(ApplicationError::not_found("Todo", todo.id));
        }

        db.save(&todo).await?;

        tracing::info!(todo_id = %todo.id, "Todo updated");

        Ok(todo)
    }
}

// ============================================================================
// DeleteTodo
// ============================================================================

/// DeleteTodo Handler
pub struct DeleteTodoHandler {
    db: Arc<dyn DbProviderPort>,
}

impl DeleteTodoHandler {
    pub fn new(db: Arc<dyn DbProviderPort>) -> Self {
        Self { db }
    }

    pub async fn handle(&self, command: DeleteTodo) -> Result<(), ApplicationError> {
        let id = command.id;

        let mut db = self.db.get().await?;

        // 检查是否存在
        let todo = db
            .first(id)
            .await?
            .into_option()
            .ok_or_else(|| ApplicationError::not_found("Todo", id))?;

        db.delete(id).await?;

        tracing::info!(todo_id = %id, title = %todo.title, "Todo deleted");

        Ok(())
    }
}
