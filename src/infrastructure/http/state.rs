//! Application State
//!
//! 持有注入的数据库 Provider 以及所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateTodoHandler, DeleteTodoHandler, UpdateTodoHandler,
    // Query handlers
    CheckHealthHandler, GetTodoHandler, ListTodosHandler,
    // Ports
    DbProviderPort,
};

/// 应用状态
///
/// 所有 handler 共享注入的同一个 Provider，每个请求各自取句柄。
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_todo_handler: CreateTodoHandler,
    pub update_todo_handler: UpdateTodoHandler,
    pub delete_todo_handler: DeleteTodoHandler,

    // ========== Query Handlers ==========
    pub check_health_handler: CheckHealthHandler,
    pub get_todo_handler: GetTodoHandler,
    pub list_todos_handler: ListTodosHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(db: Arc<dyn DbProviderPort>) -> Self {
        Self {
            // Command handlers
            create_todo_handler: CreateTodoHandler::new(db.clone()),
            update_todo_handler: UpdateTodoHandler::new(db.clone()),
            delete_todo_handler: DeleteTodoHandler::new(db.clone()),

            // Query handlers
            check_health_handler: CheckHealthHandler::new(db.clone()),
            get_todo_handler: GetTodoHandler::new(db.clone()),
            list_todos_handler: ListTodosHandler::new(db),
        }
    }
}
