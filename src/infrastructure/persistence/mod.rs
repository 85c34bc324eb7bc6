//! Persistence Layer - 数据持久化
//!
//! MongoDB 文档存储实现

pub mod mongo;

pub use self::mongo::MongoTodoListRepository;
