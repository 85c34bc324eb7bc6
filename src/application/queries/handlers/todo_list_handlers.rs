//! TodoList Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::TodoListRepositoryPort;
use crate::application::queries::{GetList, ListLists};
use crate::domain::{ListSummary, TodoList};

/// GetList Handler
pub struct GetListHandler {
    todo_repo: Arc<dyn TodoListRepositoryPort>,
}

impl GetListHandler {
    pub fn new(todo_repo: Arc<dyn TodoListRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, query: GetList) -> Result<TodoList, ApplicationError> {
        self.todo_repo
            .find_by_id(&query.list_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("List", &query.list_id))
    }
}

/// ListLists Handler
pub struct ListListsHandler {
    todo_repo: Arc<dyn TodoListRepositoryPort>,
}

impl ListListsHandler {
    pub fn new(todo_repo: Arc<dyn TodoListRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, _query: ListLists) -> Result<Vec<ListSummary>, ApplicationError> {
        Ok(self.todo_repo.list_summaries().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemLabel, ListId, ListName, TodoItem};
    use crate::infrastructure::memory::InMemoryTodoListRepository;

    #[tokio::test]
    async fn test_get_missing_list_is_not_found() {
        let handler = GetListHandler::new(Arc::new(InMemoryTodoListRepository::new()));

        let result = handler
            .handle(GetList {
                list_id: ListId::new("nope"),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_summaries_match_items() {
        let repo: Arc<dyn TodoListRepositoryPort> = Arc::new(InMemoryTodoListRepository::new());
        let mut expected = Vec::new();
        for (name, items, checked) in [("a", 3usize, 1usize), ("b", 0, 0), ("c", 2, 2)] {
            let id = repo.create_list(&ListName::new(name).unwrap()).await.unwrap();
            for n in 0..items {
                let item = TodoItem::new(ItemLabel::new(format!("item {}", n)).unwrap());
                repo.push_item(&id, &item).await.unwrap();
                if n < checked {
                    repo.set_checked(&id, item.id(), true).await.unwrap();
                }
            }
            expected.push((name.to_string(), items, checked));
        }

        let summaries = ListListsHandler::new(repo).handle(ListLists).await.unwrap();

        let actual: Vec<(String, usize, usize)> = summaries
            .into_iter()
            .map(|s| (s.name, s.item_count, s.checked_count))
            .collect();
        assert_eq!(actual, expected);
    }
}
