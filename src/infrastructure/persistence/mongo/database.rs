//! MongoDB Database - 客户端连接与集合获取

use std::time::Duration;

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};
use thiserror::Error;

use super::TodoListDocument;

/// 未在连接串和配置中指定数据库时使用的默认库名
pub const DEFAULT_DATABASE: &str = "todo";

/// 默认集合名
pub const DEFAULT_COLLECTION: &str = "todo_lists";

/// 启动阶段的存储错误，任何一种都会导致进程退出
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid MongoDB connection string: {0}")]
    InvalidUri(String),

    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("Document store did not answer ping within {0:?}")]
    Timeout(Duration),
}

/// MongoDB 连接配置
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// 连接串
    pub uri: String,
    /// 数据库名，None 时使用连接串中的默认库
    pub database: Option<String>,
    /// 集合名
    pub collection: String,
    /// 服务器选择超时
    pub server_selection_timeout: Duration,
    /// 建立连接超时
    pub connect_timeout: Duration,
    /// 启动时 ping 的超时
    pub ping_timeout: Duration,
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: None,
            collection: DEFAULT_COLLECTION.to_string(),
            server_selection_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(30),
            ping_timeout: Duration::from_secs(10),
        }
    }
}

/// 创建客户端并 ping 一次，确认存储可用
///
/// 超时只在这里设置一次，之后的请求不再做额外的超时或重试
pub async fn connect(config: &MongoConfig) -> Result<Client, StoreError> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(|e| StoreError::InvalidUri(e.to_string()))?;
    options.server_selection_timeout = Some(config.server_selection_timeout);
    options.connect_timeout = Some(config.connect_timeout);
    if options.app_name.is_none() {
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    }

    let client =
        Client::with_options(options).map_err(|e| StoreError::Unavailable(e.to_string()))?;

    tokio::time::timeout(config.ping_timeout, async {
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
    })
    .await
    .map_err(|_| StoreError::Timeout(config.ping_timeout))?
    .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    tracing::info!("MongoDB connection established");

    Ok(client)
}

/// 获取清单集合
///
/// 库名优先级：配置 > 连接串默认库 > `DEFAULT_DATABASE`
pub fn todo_lists_collection(client: &Client, config: &MongoConfig) -> Collection<TodoListDocument> {
    let database = config
        .database
        .as_deref()
        .map(|name| client.database(name))
        .or_else(|| client.default_database())
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    tracing::info!(
        database = %database.name(),
        collection = %config.collection,
        "Using todo list collection"
    );

    database.collection(&config.collection)
}

/// 隐藏连接串中的凭据，用于日志
pub fn redact_uri(uri: &str) -> String {
    let Some(at) = uri.rfind('@') else {
        return uri.to_string();
    };
    match uri.find("://") {
        Some(scheme_end) if scheme_end + 3 <= at => {
            format!("{}://***@{}", &uri[..scheme_end], &uri[at + 1..])
        }
        _ => uri.to_string(),
    }
}
