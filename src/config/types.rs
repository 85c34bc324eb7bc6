//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::persistence::mongo::{MongoConfig, DEFAULT_COLLECTION};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,

    /// 调试模式，开启后日志级别提升为 debug
    #[serde(default)]
    pub debug: bool,
}

impl AppConfig {
    /// 实际生效的日志级别
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log.level
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB 连接串（来自 MONGODB_URI）
    #[serde(default)]
    pub uri: String,

    /// 数据库名，未设置时使用连接串中的默认库
    #[serde(default)]
    pub name: Option<String>,

    /// 集合名
    #[serde(default = "default_collection")]
    pub collection: String,

    /// 服务器选择超时（秒）
    #[serde(default = "default_server_selection_timeout")]
    pub server_selection_timeout_secs: u64,

    /// 连接超时（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// 启动 ping 超时（秒）
    #[serde(default = "default_ping_timeout")]
    pub ping_timeout_secs: u64,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_server_selection_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_ping_timeout() -> u64 {
    10
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            name: None,
            collection: default_collection(),
            server_selection_timeout_secs: default_server_selection_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            ping_timeout_secs: default_ping_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// 转换为 MongoDB 适配器配置
    pub fn mongo_config(&self) -> MongoConfig {
        MongoConfig {
            uri: self.uri.clone(),
            database: self.name.clone().filter(|name| !name.is_empty()),
            collection: self.collection.clone(),
            server_selection_timeout: Duration::from_secs(self.server_selection_timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            ping_timeout: Duration::from_secs(self.ping_timeout_secs),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
