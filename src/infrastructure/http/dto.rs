//! Data Transfer Objects
//!
//! 请求/响应的 JSON 结构，字段名即对外接口

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ListSummary, TodoItem, TodoList};

// ============================================================================
// List DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NewListRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewListResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListSummaryResponse {
    pub id: String,
    pub name: String,
    pub item_count: usize,
    pub checked_count: usize,
}

impl From<ListSummary> for ListSummaryResponse {
    fn from(summary: ListSummary) -> Self {
        Self {
            id: summary.id.as_str().to_string(),
            name: summary.name,
            item_count: summary.item_count,
            checked_count: summary.checked_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub id: String,
    pub name: String,
    pub items: Vec<TodoItemResponse>,
}

impl From<TodoList> for TodoListResponse {
    fn from(list: TodoList) -> Self {
        let (id, name, items) = list.into_parts();
        Self {
            id: id.as_str().to_string(),
            name,
            items: items.iter().map(TodoItemResponse::from).collect(),
        }
    }
}

// ============================================================================
// Item DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NewItemRequest {
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckedStateRequest {
    pub item_id: String,
    pub checked_state: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoItemResponse {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

impl From<&TodoItem> for TodoItemResponse {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id().as_str().to_string(),
            label: item.label().to_string(),
            checked: item.is_checked(),
        }
    }
}

// ============================================================================
// Misc DTOs
// ============================================================================

/// 连通性检查响应：新生成的 ObjectId 和当前时间
#[derive(Debug, Serialize, Deserialize)]
pub struct DummyResponse {
    pub id: String,
    pub when: DateTime<Utc>,
}
