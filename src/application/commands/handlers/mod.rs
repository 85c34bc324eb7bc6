//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod item_handlers;
mod list_handlers;

pub use item_handlers::*;
pub use list_handlers::*;
