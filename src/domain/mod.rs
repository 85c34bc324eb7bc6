//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Todo Context: 待办清单与清单条目

pub mod todo;

pub use todo::{ItemId, ItemLabel, ListId, ListName, ListSummary, TodoError, TodoItem, TodoList};
