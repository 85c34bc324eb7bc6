//! List HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateList, DeleteList, GetList, ListLists};
use crate::domain::ListId;
use crate::infrastructure::http::dto::{
    ListSummaryResponse, NewListRequest, NewListResponse, TodoListResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取所有清单摘要
pub async fn list_lists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ListSummaryResponse>>, ApiError> {
    let summaries = state.list_lists_handler.handle(ListLists).await?;

    Ok(Json(
        summaries
            .into_iter()
            .map(ListSummaryResponse::from)
            .collect(),
    ))
}

/// 创建清单
pub async fn create_list(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewListRequest>,
) -> Result<(StatusCode, Json<NewListResponse>), ApiError> {
    let result = state
        .create_list_handler
        .handle(CreateList { name: req.name })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NewListResponse {
            id: result.id.as_str().to_string(),
            name: result.name,
        }),
    ))
}

/// 获取清单详情
pub async fn get_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<String>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let list = state
        .get_list_handler
        .handle(GetList {
            list_id: ListId::new(list_id),
        })
        .await?;

    Ok(Json(TodoListResponse::from(list)))
}

/// 删除清单，返回是否确实删除
pub async fn delete_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<String>,
) -> Result<Json<bool>, ApiError> {
    let deleted = state
        .delete_list_handler
        .handle(DeleteList {
            list_id: ListId::new(list_id),
        })
        .await?;

    Ok(Json(deleted))
}
