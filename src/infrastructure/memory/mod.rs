//! Memory Layer - In-Memory State Management
//!
//! 内存版 TodoListRepository，供测试使用

mod todo_list_repo;

pub use todo_list_repo::InMemoryTodoListRepository;
