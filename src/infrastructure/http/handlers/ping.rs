//! Ping Handlers
//!
//! 健康检查与连通性检查

use axum::Json;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::infrastructure::http::dto::DummyResponse;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 返回一个新生成的 ObjectId 和当前时间，不访问存储
pub async fn dummy() -> Json<DummyResponse> {
    Json(DummyResponse {
        id: ObjectId::new().to_hex(),
        when: Utc::now(),
    })
}
