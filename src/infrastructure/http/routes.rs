//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                                  GET     健康检查
//! - /api/dummy                                 GET     返回新 ObjectId 与当前时间
//! - /api/lists                                 GET     列出所有清单摘要
//! - /api/lists                                 POST    创建清单
//! - /api/lists/{list_id}                       GET     获取清单详情
//! - /api/lists/{list_id}                       DELETE  删除清单
//! - /api/lists/{list_id}/items/                POST    添加条目（不带尾部斜杠也可）
//! - /api/lists/{list_id}/items/{item_id}       DELETE  删除条目
//! - /api/lists/{list_id}/checked_state         PATCH   设置条目勾选状态

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/dummy", get(handlers::dummy))
        .merge(list_routes())
}

/// List 路由
fn list_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/lists",
            get(handlers::list_lists).post(handlers::create_list),
        )
        .route(
            "/lists/:list_id",
            get(handlers::get_list).delete(handlers::delete_list),
        )
        .route("/lists/:list_id/items", post(handlers::create_item))
        .route("/lists/:list_id/items/", post(handlers::create_item))
        .route(
            "/lists/:list_id/items/:item_id",
            delete(handlers::delete_item),
        )
        .route(
            "/lists/:list_id/checked_state",
            patch(handlers::set_checked_state),
        )
}
