//! Todo Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::DbProviderPort;
use crate::application::queries::{GetTodo, ListTodos};
use crate::domain::Todo;

/// GetTodo Handler
pub struct GetTodoHandler {
    db: Arc<dyn DbProviderPort>,
}

impl GetTodoHandler {
    pub fn new(db: Arc<dyn DbProviderPort>) -> Self {
        Self { db }
    }

    pub async fn handle(&self, query: GetTodo) -> Result<Todo, ApplicationError> {
        let mut db = self.db.get().await?;

        db.first(query.id)
            .await?
            .into_option()
            .ok_or_else(|| ApplicationError::not_found("Todo", query.id))
    }
}

/// ListTodos Handler
pub struct ListTodosHandler {
    db: Arc<dyn DbProviderPort>,
}

impl ListTodosHandler {
    pub fn new(db: Arc<dyn DbProviderPort>) -> Self {
        Self { db }
    }

    pub async fn handle(&self, _query: ListTodos) -> Result<Vec<Todo>, ApplicationError> {
        let mut db = self.db.get().await?;
        Ok(db.find_all().await?)
    }
}
