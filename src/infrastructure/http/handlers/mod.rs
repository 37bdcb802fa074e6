//! HTTP Handlers

mod health;
mod todo;

pub use health::*;
pub use todo::*;
