//! Farm Todo - 待办清单服务
//!
//! 启动流程：加载配置 → 初始化日志 → 连接 MongoDB → 启动 HTTP 服务
//! 关闭流程：停止接收请求 → 关闭 MongoDB 客户端

use std::sync::Arc;

use farm_todo::config::{load_config, print_config};
use farm_todo::infrastructure::http::{AppState, HttpServer, ServerConfig};
use farm_todo::infrastructure::persistence::mongo::{
    connect, redact_uri, todo_lists_collection, MongoTodoListRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：MONGODB_URI/DEBUG > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let level = config.effective_log_level();
    let log_filter = format!("{},farm_todo={},tower_http=debug", level, level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Farm Todo - 待办清单服务");
    print_config(&config);

    // 连接 MongoDB，失败则直接退出
    let mongo_config = config.database.mongo_config();
    tracing::info!(uri = %redact_uri(&mongo_config.uri), "Connecting to MongoDB");
    let client = connect(&mongo_config).await.map_err(|e| {
        tracing::error!(error = %e, "MongoDB connection failed");
        anyhow::anyhow!(e)
    })?;

    // 创建 Repository 适配器
    let collection = todo_lists_collection(&client, &mongo_config);
    let todo_repo = Arc::new(MongoTodoListRepository::new(collection));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(todo_repo));

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    client.shutdown().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
