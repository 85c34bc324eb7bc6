//! In-Memory TodoList Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, TodoListRepositoryPort};
use crate::domain::{ItemId, ListId, ListName, ListSummary, TodoItem, TodoList};

/// 内存清单仓储
///
/// 每个修改都在 DashMap 的单条目写锁内完成，等价于单文档原子更新
pub struct InMemoryTodoListRepository {
    lists: DashMap<String, TodoList>,
}

impl InMemoryTodoListRepository {
    pub fn new() -> Self {
        Self {
            lists: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl Default for InMemoryTodoListRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoListRepositoryPort for InMemoryTodoListRepository {
    async fn list_summaries(&self) -> Result<Vec<ListSummary>, RepositoryError> {
        let mut summaries: Vec<ListSummary> =
            self.lists.iter().map(|entry| entry.summary()).collect();
        summaries.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        Ok(summaries)
    }

    async fn create_list(&self, name: &ListName) -> Result<ListId, RepositoryError> {
        let id = ListId::new(Uuid::new_v4().simple().to_string());
        self.lists
            .insert(id.as_str().to_string(), TodoList::new(id.clone(), name.clone()));
        tracing::debug!(list_id = %id, "List inserted (memory)");
        Ok(id)
    }

    async fn find_by_id(&self, id: &ListId) -> Result<Option<TodoList>, RepositoryError> {
        Ok(self.lists.get(id.as_str()).map(|entry| entry.clone()))
    }

    async fn delete_list(&self, id: &ListId) -> Result<bool, RepositoryError> {
        Ok(self.lists.remove(id.as_str()).is_some())
    }

    async fn push_item(
        &self,
        list_id: &ListId,
        item: &TodoItem,
    ) -> Result<Option<TodoList>, RepositoryError> {
        Ok(self.lists.get_mut(list_id.as_str()).map(|mut list| {
            list.add_item(item.clone());
            list.clone()
        }))
    }

    async fn pull_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
    ) -> Result<Option<TodoList>, RepositoryError> {
        let Some(mut list) = self.lists.get_mut(list_id.as_str()) else {
            return Ok(None);
        };
        Ok(list.remove_item(item_id).ok().map(|_| list.clone()))
    }

    async fn set_checked(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        checked: bool,
    ) -> Result<Option<TodoList>, RepositoryError> {
        let Some(mut list) = self.lists.get_mut(list_id.as_str()) else {
            return Ok(None);
        };
        Ok(list.set_checked(item_id, checked).ok().map(|_| list.clone()))
    }
}
