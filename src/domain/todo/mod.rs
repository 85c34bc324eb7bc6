//! Todo Context - 待办清单限界上下文
//!
//! 职责:
//! - TodoList 聚合（清单及其有序条目）
//! - TodoItem 实体（只存在于所属清单内）
//! - ListSummary 投影（读取时计算，不持久化）

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{ListSummary, TodoList};
pub use entities::TodoItem;
pub use errors::TodoError;
pub use value_objects::{ItemId, ItemLabel, ListId, ListName};
