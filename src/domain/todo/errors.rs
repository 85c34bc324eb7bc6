//! Todo Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("无效的清单名称: {0}")]
    InvalidName(String),

    #[error("无效的条目内容: {0}")]
    InvalidLabel(String),

    #[error("条目不存在: {0}")]
    ItemNotFound(String),
}
