//! TodoList Commands

use crate::domain::{ItemId, ListId};

/// 创建清单命令
#[derive(Debug, Clone)]
pub struct CreateList {
    pub name: String,
}

/// 删除清单命令
#[derive(Debug, Clone)]
pub struct DeleteList {
    pub list_id: ListId,
}

/// 添加条目命令
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub list_id: ListId,
    pub label: String,
}

/// 删除条目命令
#[derive(Debug, Clone)]
pub struct DeleteItem {
    pub list_id: ListId,
    pub item_id: ItemId,
}

/// 设置条目勾选状态命令
#[derive(Debug, Clone)]
pub struct SetCheckedState {
    pub list_id: ListId,
    pub item_id: ItemId,
    pub checked: bool,
}
