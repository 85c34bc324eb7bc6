//! Todo Context - Aggregate Root

use super::{ItemId, ListId, ListName, TodoError, TodoItem};

/// TodoList 聚合根
///
/// 不变量:
/// - 条目 ID 在清单内唯一
/// - 条目保持插入顺序
/// - 条目只能通过清单修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    id: ListId,
    name: String,
    items: Vec<TodoItem>,
}

impl TodoList {
    /// 创建空清单
    pub fn new(id: ListId, name: ListName) -> Self {
        Self {
            id,
            name: name.into_inner(),
            items: Vec::new(),
        }
    }

    /// 从存储中恢复清单
    pub fn restore(id: ListId, name: impl Into<String>, items: Vec<TodoItem>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }

    /// 追加条目
    pub fn add_item(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    /// 移除条目，条目不存在时清单保持不变
    pub fn remove_item(&mut self, item_id: &ItemId) -> Result<TodoItem, TodoError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or_else(|| TodoError::ItemNotFound(item_id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// 设置条目勾选状态
    pub fn set_checked(&mut self, item_id: &ItemId, checked: bool) -> Result<(), TodoError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == item_id)
            .ok_or_else(|| TodoError::ItemNotFound(item_id.to_string()))?;
        item.set_checked(checked);
        Ok(())
    }

    /// 计算列表摘要
    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            item_count: self.items.len(),
            checked_count: self.items.iter().filter(|item| item.is_checked()).count(),
        }
    }

    // Getters
    pub fn id(&self) -> &ListId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get_item(&self, item_id: &ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    pub fn into_parts(self) -> (ListId, String, Vec<TodoItem>) {
        (self.id, self.name, self.items)
    }
}

/// 清单摘要（只读投影）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub item_count: usize,
    pub checked_count: usize,
}
