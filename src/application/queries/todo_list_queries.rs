//! TodoList Queries

use crate::domain::ListId;

/// 获取清单详情查询
#[derive(Debug, Clone)]
pub struct GetList {
    pub list_id: ListId,
}

/// 列出所有清单摘要查询
#[derive(Debug, Clone)]
pub struct ListLists;
