//! Item Command Handlers
//!
//! 条目只能作为清单的子元素修改，每个命令对应一次原子的单文档更新

use std::sync::Arc;

use crate::application::commands::{CreateItem, DeleteItem, SetCheckedState};
use crate::application::error::ApplicationError;
use crate::application::ports::TodoListRepositoryPort;
use crate::domain::{ItemId, ItemLabel, ListId, TodoItem, TodoList};

fn item_not_found(list_id: &ListId, item_id: &ItemId) -> ApplicationError {
    ApplicationError::not_found("Item", format!("{}/{}", list_id, item_id))
}

// ============================================================================
// CreateItem
// ============================================================================

/// CreateItem Handler
pub struct CreateItemHandler {
    todo_repo: Arc<dyn TodoListRepositoryPort>,
}

impl CreateItemHandler {
    pub fn new(todo_repo: Arc<dyn TodoListRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: CreateItem) -> Result<TodoList, ApplicationError> {
        let label = ItemLabel::new(command.label)?;
        let item = TodoItem::new(label);

        let list = self
            .todo_repo
            .push_item(&command.list_id, &item)
            .await?
            .ok_or_else(|| ApplicationError::not_found("List", &command.list_id))?;

        tracing::info!(
            list_id = %command.list_id,
            item_id = %item.id(),
            "Item created"
        );

        Ok(list)
    }
}

// ============================================================================
// DeleteItem
// ============================================================================

/// DeleteItem Handler
pub struct DeleteItemHandler {
    todo_repo: Arc<dyn TodoListRepositoryPort>,
}

impl DeleteItemHandler {
    pub fn new(todo_repo: Arc<dyn TodoListRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: DeleteItem) -> Result<TodoList, ApplicationError> {
        let list = self
            .todo_repo
            .pull_item(&command.list_id, &command.item_id)
            .await?
            .ok_or_else(|| item_not_found(&command.list_id, &command.item_id))?;

        tracing::info!(
            list_id = %command.list_id,
            item_id = %command.item_id,
            "Item deleted"
        );

        Ok(list)
    }
}

// ============================================================================
// SetCheckedState
// ============================================================================

/// SetCheckedState Handler
pub struct SetCheckedStateHandler {
    todo_repo: Arc<dyn TodoListRepositoryPort>,
}

impl SetCheckedStateHandler {
    pub fn new(todo_repo: Arc<dyn TodoListRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: SetCheckedState) -> Result<TodoList, ApplicationError> {
        let list = self
            .todo_repo
            .set_checked(&command.list_id, &command.item_id, command.checked)
            .await?
            .ok_or_else(|| item_not_found(&command.list_id, &command.item_id))?;

        tracing::debug!(
            list_id = %command.list_id,
            item_id = %command.item_id,
            checked = command.checked,
            "Item checked state set"
        );

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListName;
    use crate::infrastructure::memory::InMemoryTodoListRepository;

    async fn repo_with_list() -> (Arc<dyn TodoListRepositoryPort>, ListId) {
        let repo: Arc<dyn TodoListRepositoryPort> = Arc::new(InMemoryTodoListRepository::new());
        let id = repo
            .create_list(&ListName::new("Chores").unwrap())
            .await
            .unwrap();
        (repo, id)
    }

    #[tokio::test]
    async fn test_create_item_appends_unchecked() {
        let (repo, list_id) = repo_with_list().await;

        let list = CreateItemHandler::new(repo)
            .handle(CreateItem {
                list_id,
                label: "Sweep".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].label(), "Sweep");
        assert!(!list.items()[0].is_checked());
    }

    #[tokio::test]
    async fn test_create_item_on_missing_list_is_not_found() {
        let (repo, _) = repo_with_list().await;

        let result = CreateItemHandler::new(repo)
            .handle(CreateItem {
                list_id: ListId::new("missing"),
                label: "Sweep".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::NotFound {
                resource_type: "List",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_create_item_rejects_blank_label() {
        let (repo, list_id) = repo_with_list().await;

        let result = CreateItemHandler::new(repo.clone())
            .handle(CreateItem {
                list_id: list_id.clone(),
                label: "  ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        let list = repo.find_by_id(&list_id).await.unwrap().unwrap();
        assert!(list.items().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_item_leaves_list_unchanged() {
        let (repo, list_id) = repo_with_list().await;
        let before = CreateItemHandler::new(repo.clone())
            .handle(CreateItem {
                list_id: list_id.clone(),
                label: "Sweep".to_string(),
            })
            .await
            .unwrap();

        let result = DeleteItemHandler::new(repo.clone())
            .handle(DeleteItem {
                list_id: list_id.clone(),
                item_id: ItemId::new("does-not-exist"),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
        let after = repo.find_by_id(&list_id).await.unwrap().unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_set_checked_twice_is_idempotent() {
        let (repo, list_id) = repo_with_list().await;
        let list = CreateItemHandler::new(repo.clone())
            .handle(CreateItem {
                list_id: list_id.clone(),
                label: "Sweep".to_string(),
            })
            .await
            .unwrap();
        let item_id = list.items()[0].id().clone();
        let handler = SetCheckedStateHandler::new(repo);

        let command = SetCheckedState {
            list_id,
            item_id: item_id.clone(),
            checked: true,
        };
        let once = handler.handle(command.clone()).await.unwrap();
        let twice = handler.handle(command).await.unwrap();

        assert_eq!(once, twice);
        assert!(twice.get_item(&item_id).unwrap().is_checked());
    }
}
