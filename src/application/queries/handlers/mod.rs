//! Query Handlers 实现

mod health_handlers;
mod todo_handlers;

pub use health_handlers::*;
pub use todo_handlers::*;
