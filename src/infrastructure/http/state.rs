//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateItemHandler, CreateListHandler, DeleteItemHandler, DeleteListHandler,
    SetCheckedStateHandler,
    // Query handlers
    GetListHandler, ListListsHandler,
    // Ports
    TodoListRepositoryPort,
};

/// 应用状态
///
/// 仓储在启动时创建一次，由所有请求共享
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_list_handler: CreateListHandler,
    pub delete_list_handler: DeleteListHandler,
    pub create_item_handler: CreateItemHandler,
    pub delete_item_handler: DeleteItemHandler,
    pub set_checked_state_handler: SetCheckedStateHandler,

    // ========== Query Handlers ==========
    pub get_list_handler: GetListHandler,
    pub list_lists_handler: ListListsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(todo_repo: Arc<dyn TodoListRepositoryPort>) -> Self {
        Self {
            // Command handlers
            create_list_handler: CreateListHandler::new(todo_repo.clone()),
            delete_list_handler: DeleteListHandler::new(todo_repo.clone()),
            create_item_handler: CreateItemHandler::new(todo_repo.clone()),
            delete_item_handler: DeleteItemHandler::new(todo_repo.clone()),
            set_checked_state_handler: SetCheckedStateHandler::new(todo_repo.clone()),

            // Query handlers
            get_list_handler: GetListHandler::new(todo_repo.clone()),
            list_lists_handler: ListListsHandler::new(todo_repo),
        }
    }
}
