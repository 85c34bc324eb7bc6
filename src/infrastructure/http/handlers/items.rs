//! Item HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateItem, DeleteItem, SetCheckedState};
use crate::domain::{ItemId, ListId};
use crate::infrastructure::http::dto::{CheckedStateRequest, NewItemRequest, TodoListResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 向清单添加条目
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<String>,
    Json(req): Json<NewItemRequest>,
) -> Result<(StatusCode, Json<TodoListResponse>), ApiError> {
    let list = state
        .create_item_handler
        .handle(CreateItem {
            list_id: ListId::new(list_id),
            label: req.label,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TodoListResponse::from(list))))
}

/// 删除条目
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(String, String)>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let list = state
        .delete_item_handler
        .handle(DeleteItem {
            list_id: ListId::new(list_id),
            item_id: ItemId::new(item_id),
        })
        .await?;

    Ok(Json(TodoListResponse::from(list)))
}

/// 设置条目勾选状态
pub async fn set_checked_state(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<String>,
    Json(req): Json<CheckedStateRequest>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let list = state
        .set_checked_state_handler
        .handle(SetCheckedState {
            list_id: ListId::new(list_id),
            item_id: ItemId::new(req.item_id),
            checked: req.checked_state,
        })
        .await?;

    Ok(Json(TodoListResponse::from(list)))
}
