//! Todo Context - Entities

use super::{ItemId, ItemLabel};

/// 清单条目
///
/// 只作为 TodoList 的子元素存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: ItemId,
    label: String,
    checked: bool,
}

impl TodoItem {
    /// 创建新条目，默认未勾选
    pub fn new(label: ItemLabel) -> Self {
        Self {
            id: ItemId::generate(),
            label: label.into_inner(),
            checked: false,
        }
    }

    /// 从存储中恢复条目
    pub fn restore(id: ItemId, label: impl Into<String>, checked: bool) -> Self {
        Self {
            id,
            label: label.into(),
            checked,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub(super) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}
