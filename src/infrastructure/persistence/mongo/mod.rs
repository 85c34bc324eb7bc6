//! MongoDB Persistence - 文档数据库持久化实现

mod database;
mod todo_list_repo;

pub use database::*;
pub use todo_list_repo::*;
