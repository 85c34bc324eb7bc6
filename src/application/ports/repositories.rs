//! Repository Ports - 出站端口
//!
//! 定义待办清单持久化的抽象接口
//! 具体实现在 infrastructure 层（MongoDB、内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ItemId, ListId, ListName, ListSummary, TodoItem, TodoList};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// TodoList Repository Port
///
/// 每个方法对应一次存储往返。条目修改必须是针对单个文档的原子更新
/// （按清单 ID 和条目 ID 匹配），不能先读后写。
///
/// 清单或条目不存在时返回 `Ok(None)` / `Ok(false)`，而不是错误。
#[async_trait]
pub trait TodoListRepositoryPort: Send + Sync {
    /// 获取所有清单的摘要，按名称排序
    async fn list_summaries(&self) -> Result<Vec<ListSummary>, RepositoryError>;

    /// 创建空清单，返回存储分配的 ID
    async fn create_list(&self, name: &ListName) -> Result<ListId, RepositoryError>;

    /// 根据 ID 查找清单
    async fn find_by_id(&self, id: &ListId) -> Result<Option<TodoList>, RepositoryError>;

    /// 删除清单，返回是否确实删除了文档
    async fn delete_list(&self, id: &ListId) -> Result<bool, RepositoryError>;

    /// 向清单追加条目，返回更新后的清单
    async fn push_item(
        &self,
        list_id: &ListId,
        item: &TodoItem,
    ) -> Result<Option<TodoList>, RepositoryError>;

    /// 从清单移除条目，清单或条目不存在时返回 None
    async fn pull_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
    ) -> Result<Option<TodoList>, RepositoryError>;

    /// 设置条目勾选状态，清单或条目不存在时返回 None
    async fn set_checked(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        checked: bool,
    ) -> Result<Option<TodoList>, RepositoryError>;
}
