//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - `MONGODB_URI` / `DEBUG`（最高优先级）
//! - 带前缀的环境变量
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）

mod loader;
mod types;

pub use loader::{
    load_config, load_config_from_sources, parse_debug_flag, print_config, ConfigError,
    EnvOverrides, DEBUG_VAR, MONGODB_URI_VAR,
};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ServerConfig};
