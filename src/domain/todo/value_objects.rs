//! Todo Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TodoError;

/// 清单唯一标识（由存储分配，对领域层不透明）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(String);

impl ListId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 条目标识，只在所属清单内唯一
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// 生成新的条目标识（32 位十六进制）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 只拒绝空白内容，长度不设上限
fn check_text(text: &str) -> Result<(), &'static str> {
    if text.trim().is_empty() {
        return Err("不能为空");
    }
    Ok(())
}

/// 清单名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListName(String);

impl ListName {
    pub fn new(name: impl Into<String>) -> Result<Self, TodoError> {
        let name = name.into();
        check_text(&name).map_err(|reason| TodoError::InvalidName(format!("名称{}", reason)))?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ListName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 条目内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLabel(String);

impl ItemLabel {
    pub fn new(label: impl Into<String>) -> Result<Self, TodoError> {
        let label = label.into();
        check_text(&label).map_err(|reason| TodoError::InvalidLabel(format!("内容{}", reason)))?;
        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
