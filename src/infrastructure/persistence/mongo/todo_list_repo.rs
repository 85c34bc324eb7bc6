//! MongoDB TodoList Repository
//!
//! 文档结构：
//! `{ _id: ObjectId, name: string, items: [{ id: string, label: string, checked: bool }] }`

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ReturnDocument,
    Collection,
};
use serde::{Deserialize, Serialize};

use crate::application::ports::{RepositoryError, TodoListRepositoryPort};
use crate::domain::{ItemId, ListId, ListName, ListSummary, TodoItem, TodoList};

/// 清单文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<TodoItemDocument>,
}

/// 条目子文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItemDocument {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub checked: bool,
}

/// 摘要投影结果
#[derive(Debug, Deserialize)]
pub struct ListSummaryDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    pub item_count: i64,
    pub checked_count: i64,
}

impl From<TodoListDocument> for TodoList {
    fn from(document: TodoListDocument) -> Self {
        let items = document.items.into_iter().map(TodoItem::from).collect();
        TodoList::restore(ListId::new(document.id.to_hex()), document.name, items)
    }
}

impl From<TodoItemDocument> for TodoItem {
    fn from(document: TodoItemDocument) -> Self {
        TodoItem::restore(ItemId::new(document.id), document.label, document.checked)
    }
}

impl From<&TodoItem> for TodoItemDocument {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id().as_str().to_string(),
            label: item.label().to_string(),
            checked: item.is_checked(),
        }
    }
}

impl From<ListSummaryDocument> for ListSummary {
    fn from(document: ListSummaryDocument) -> Self {
        ListSummary {
            id: ListId::new(document.id.to_hex()),
            name: document.name,
            item_count: document.item_count.max(0) as usize,
            checked_count: document.checked_count.max(0) as usize,
        }
    }
}

/// 非法的 ObjectId 不可能匹配任何文档，按不存在处理
fn parse_object_id(id: &ListId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

/// 摘要投影：条目总数和已勾选数在服务端计算
fn summary_projection() -> Document {
    doc! {
        "name": 1,
        "item_count": { "$size": { "$ifNull": ["$items", []] } },
        "checked_count": {
            "$size": {
                "$filter": {
                    "input": { "$ifNull": ["$items", []] },
                    "as": "item",
                    "cond": { "$eq": ["$$item.checked", true] },
                }
            }
        },
    }
}

fn list_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// 同时匹配清单 ID 和条目 ID，条目不存在时更新不会命中
fn item_filter(id: ObjectId, item_id: &ItemId) -> Document {
    doc! { "_id": id, "items.id": item_id.as_str() }
}

fn push_item_update(item: &TodoItem) -> Result<Document, RepositoryError> {
    let item = mongodb::bson::to_bson(&TodoItemDocument::from(item))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
    Ok(doc! { "$push": { "items": item } })
}

fn pull_item_update(item_id: &ItemId) -> Document {
    doc! { "$pull": { "items": { "id": item_id.as_str() } } }
}

fn set_checked_update(checked: bool) -> Document {
    doc! { "$set": { "items.$.checked": checked } }
}

fn db_error(err: mongodb::error::Error) -> RepositoryError {
    RepositoryError::DatabaseError(err.to_string())
}

/// MongoDB TodoList Repository
///
/// 持有的 Collection 内部共享同一个连接池，可在并发请求间复用
pub struct MongoTodoListRepository {
    collection: Collection<TodoListDocument>,
}

impl MongoTodoListRepository {
    pub fn new(collection: Collection<TodoListDocument>) -> Self {
        Self { collection }
    }

    async fn update_one_returning(
        &self,
        filter: Document,
        update: Document,
    ) -> Result<Option<TodoList>, RepositoryError> {
        let document = self
            .collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(db_error)?;

        Ok(document.map(TodoList::from))
    }
}

#[async_trait]
impl TodoListRepositoryPort for MongoTodoListRepository {
    async fn list_summaries(&self) -> Result<Vec<ListSummary>, RepositoryError> {
        let cursor = self
            .collection
            .clone_with_type::<ListSummaryDocument>()
            .find(doc! {})
            .projection(summary_projection())
            .sort(doc! { "name": 1 })
            .await
            .map_err(db_error)?;

        let documents: Vec<ListSummaryDocument> = cursor.try_collect().await.map_err(db_error)?;

        Ok(documents.into_iter().map(ListSummary::from).collect())
    }

    async fn create_list(&self, name: &ListName) -> Result<ListId, RepositoryError> {
        let document = TodoListDocument {
            id: ObjectId::new(),
            name: name.as_str().to_string(),
            items: Vec::new(),
        };

        self.collection
            .insert_one(&document)
            .await
            .map_err(db_error)?;

        Ok(ListId::new(document.id.to_hex()))
    }

    async fn find_by_id(&self, id: &ListId) -> Result<Option<TodoList>, RepositoryError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(list_filter(oid))
            .await
            .map_err(db_error)?;

        Ok(document.map(TodoList::from))
    }

    async fn delete_list(&self, id: &ListId) -> Result<bool, RepositoryError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(false);
        };

        let result = self
            .collection
            .delete_one(list_filter(oid))
            .await
            .map_err(db_error)?;

        Ok(result.deleted_count == 1)
    }

    async fn push_item(
        &self,
        list_id: &ListId,
        item: &TodoItem,
    ) -> Result<Option<TodoList>, RepositoryError> {
        let Some(oid) = parse_object_id(list_id) else {
            return Ok(None);
        };

        self.update_one_returning(list_filter(oid), push_item_update(item)?)
            .await
    }

    async fn pull_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
    ) -> Result<Option<TodoList>, RepositoryError> {
        let Some(oid) = parse_object_id(list_id) else {
            return Ok(None);
        };

        self.update_one_returning(item_filter(oid, item_id), pull_item_update(item_id))
            .await
    }

    async fn set_checked(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        checked: bool,
    ) -> Result<Option<TodoList>, RepositoryError> {
        let Some(oid) = parse_object_id(list_id) else {
            return Ok(None);
        };

        self.update_one_returning(item_filter(oid, item_id), set_checked_update(checked))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemLabel;

    #[test]
    fn test_document_uses_underscore_id() {
        let oid = ObjectId::new();
        let document = TodoListDocument {
            id: oid,
            name: "Groceries".to_string(),
            items: Vec::new(),
        };

        let bson = mongodb::bson::to_document(&document).unwrap();

        assert_eq!(bson.get_object_id("_id").unwrap(), oid);
        assert_eq!(bson.get_str("name").unwrap(), "Groceries");
        assert!(bson.get_array("items").unwrap().is_empty());
    }

    #[test]
    fn test_document_without_items_field_decodes_empty() {
        let oid = ObjectId::new();
        let raw = doc! { "_id": oid, "name": "Legacy" };

        let document: TodoListDocument = mongodb::bson::from_document(raw).unwrap();
        let list = TodoList::from(document);

        assert_eq!(list.id().as_str(), oid.to_hex());
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_document_to_domain_keeps_item_order() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "name": "Chores",
            "items": [
                { "id": "a1", "label": "Sweep", "checked": true },
                { "id": "b2", "label": "Mop" },
            ],
        };

        let list = TodoList::from(mongodb::bson::from_document::<TodoListDocument>(raw).unwrap());

        assert_eq!(list.items().len(), 2);
        assert_eq!(list.items()[0].id().as_str(), "a1");
        assert!(list.items()[0].is_checked());
        assert_eq!(list.items()[1].label(), "Mop");
        assert!(!list.items()[1].is_checked());
    }

    #[test]
    fn test_summary_document_accepts_int32_counts() {
        let oid = ObjectId::new();
        let raw = doc! { "_id": oid, "name": "Chores", "item_count": 3_i32, "checked_count": 1_i32 };

        let summary = ListSummary::from(
            mongodb::bson::from_document::<ListSummaryDocument>(raw).unwrap(),
        );

        assert_eq!(summary.id.as_str(), oid.to_hex());
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.checked_count, 1);
    }

    #[test]
    fn test_invalid_object_id_is_absent() {
        assert!(parse_object_id(&ListId::new("not-an-object-id")).is_none());
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&ListId::new(oid.to_hex())), Some(oid));
    }

    #[test]
    fn test_item_updates_match_item_id() {
        let oid = ObjectId::new();
        let item_id = ItemId::new("abc");

        let filter = item_filter(oid, &item_id);
        assert_eq!(filter.get_object_id("_id").unwrap(), oid);
        assert_eq!(filter.get_str("items.id").unwrap(), "abc");

        let update = set_checked_update(true);
        assert!(update.get_document("$set").unwrap().get_bool("items.$.checked").unwrap());

        let pull = pull_item_update(&item_id);
        let pulled = pull.get_document("$pull").unwrap().get_document("items").unwrap();
        assert_eq!(pulled.get_str("id").unwrap(), "abc");
    }

    #[test]
    fn test_push_update_contains_new_item() {
        let item = TodoItem::new(ItemLabel::new("Sweep").unwrap());

        let update = push_item_update(&item).unwrap();
        let pushed = update.get_document("$push").unwrap().get_document("items").unwrap();

        assert_eq!(pushed.get_str("id").unwrap(), item.id().as_str());
        assert_eq!(pushed.get_str("label").unwrap(), "Sweep");
        assert!(!pushed.get_bool("checked").unwrap());
    }

    #[test]
    fn test_summary_projection_computes_counts() {
        let projection = summary_projection();
        assert!(projection.contains_key("item_count"));
        assert!(projection.contains_key("checked_count"));
        assert_eq!(projection.get_i32("name").unwrap(), 1);
    }
}
