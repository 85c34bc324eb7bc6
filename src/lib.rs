//! Farm Todo - 待办清单服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Todo Context: 清单、条目、清单摘要
//!
//! 应用层 (application/):
//! - Ports: TodoListRepositoryPort
//! - Commands: 创建/删除清单，添加/删除/勾选条目
//! - Queries: 清单详情、清单摘要列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: MongoDB 文档存储
//! - Memory: 内存仓储（测试与本地运行）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
