use async_trait::async_trait;

use crate::error::Result;

/// A stored record as returned by the store, field name → JSON value.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Search capability of the external record store.
///
/// Implementations talk to whatever backs the registered records; the import
/// only ever needs exact-match lookups.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Records of `collection` whose `field` equals `value`, at most `limit`.
    async fn search_equal(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        limit: usize,
    ) -> Result<Vec<Record>>;
}
