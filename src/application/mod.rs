//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TodoListRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CreateItem,
    CreateList,
    DeleteItem,
    DeleteList,
    SetCheckedState,
    // Handlers
    handlers::{
        CreateItemHandler, CreateListHandler, CreateListResponse, DeleteItemHandler,
        DeleteListHandler, SetCheckedStateHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{RepositoryError, TodoListRepositoryPort};

pub use queries::{
    GetList,
    ListLists,
    // Handlers
    handlers::{GetListHandler, ListListsHandler},
};
