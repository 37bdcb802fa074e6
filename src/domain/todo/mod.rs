//! Todo Context - 待办事项限界上下文
//!
//! 职责:
//! - Todo 实体与标识
//! - 创建 / 整体替换的规则（id 由存储分配，更新时 id 以路径为准）

mod entity;
mod value_objects;

pub use entity::{Todo, TodoDraft};
pub use value_objects::TodoId;
