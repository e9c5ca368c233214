use async_trait::async_trait;
use serde_json::Value;

use crate::errors::GatewayError;

/// Row selection understood by every row store: one optional equality filter, one
/// optional descending sort and a row cap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowQuery {
    pub eq: Option<(String, String)>,
    pub order_desc: Option<String>,
    pub limit: Option<usize>,
}

impl RowQuery {
    /// Every row, newest first.
    pub fn all() -> Self {
        RowQuery {
            eq: None,
            order_desc: Some("created_at".to_string()),
            limit: None,
        }
    }

    pub fn by_field(field: &str, value: &str) -> Self {
        RowQuery {
            eq: Some((field.to_string(), value.to_string())),
            ..RowQuery::all()
        }
    }

    pub fn by_id(id: &str) -> Self {
        RowQuery {
            eq: Some(("id".to_string(), id.to_string())),
            order_desc: None,
            limit: Some(1),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RowStore: Send + Sync {
    async fn select(&self, table: &str, query: &RowQuery) -> Result<Vec<Value>, GatewayError>;

    /// Inserts one row and returns it as stored, generated id included.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, GatewayError>;

    /// `Ok(None)` when no row has that id.
    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Option<Value>, GatewayError>;

    /// `Ok(false)` when no row has that id.
    async fn delete(&self, table: &str, id: &str) -> Result<bool, GatewayError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn exists(&self, bucket: &str, key: &str) -> Result<bool, GatewayError>;

    /// Stores `bytes` under `key`, overwriting any previous object. Returns the stored key.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, GatewayError>;

    async fn remove(&self, bucket: &str, keys: Vec<String>) -> Result<(), GatewayError>;

    /// Pure function of bucket and key; never touches the network.
    fn public_url(&self, bucket: &str, key: &str) -> String;
}
