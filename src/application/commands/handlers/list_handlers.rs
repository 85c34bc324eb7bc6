//! TodoList Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateList, DeleteList};
use crate::application::error::ApplicationError;
use crate::application::ports::TodoListRepositoryPort;
use crate::domain::{ListId, ListName};

// ============================================================================
// CreateList
// ============================================================================

/// 创建清单响应
#[derive(Debug, Clone)]
pub struct CreateListResponse {
    pub id: ListId,
    pub name: String,
}

/// CreateList Handler
pub struct CreateListHandler {
    todo_repo: Arc<dyn TodoListRepositoryPort>,
}

impl CreateListHandler {
    pub fn new(todo_repo: Arc<dyn TodoListRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: CreateList) -> Result<CreateListResponse, ApplicationError> {
        let name = ListName::new(command.name)?;

        let id = self.todo_repo.create_list(&name).await?;

        tracing::info!(list_id = %id, name = %name, "List created");

        Ok(CreateListResponse {
            id,
            name: name.into_inner(),
        })
    }
}

// ============================================================================
// DeleteList
// ============================================================================

/// DeleteList Handler
///
/// 删除不存在的清单不是错误，返回 false
pub struct DeleteListHandler {
    todo_repo: Arc<dyn TodoListRepositoryPort>,
}

impl DeleteListHandler {
    pub fn new(todo_repo: Arc<dyn TodoListRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: DeleteList) -> Result<bool, ApplicationError> {
        let deleted = self.todo_repo.delete_list(&command.list_id).await?;

        if deleted {
            tracing::info!(list_id = %command.list_id, "List deleted");
        } else {
            tracing::debug!(list_id = %command.list_id, "List delete matched nothing");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryTodoListRepository;

    fn repo() -> Arc<dyn TodoListRepositoryPort> {
        Arc::new(InMemoryTodoListRepository::new())
    }

    #[tokio::test]
    async fn test_create_list_rejects_empty_name() {
        let handler = CreateListHandler::new(repo());

        let result = handler
            .handle(CreateList {
                name: String::new(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_then_delete_list() {
        let repo = repo();
        let created = CreateListHandler::new(repo.clone())
            .handle(CreateList {
                name: "Groceries".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Groceries");

        let delete = DeleteListHandler::new(repo.clone());
        let first = delete
            .handle(DeleteList {
                list_id: created.id.clone(),
            })
            .await
            .unwrap();
        let second = delete
            .handle(DeleteList {
                list_id: created.id.clone(),
            })
            .await
            .unwrap();

        assert!(first);
        assert!(!second);
        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
    }
}
