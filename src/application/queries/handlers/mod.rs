//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod todo_list_handlers;

pub use todo_list_handlers::*;
