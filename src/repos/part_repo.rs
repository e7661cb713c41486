//! Persistence contract for parts.
//!
//! Handlers only see `Arc<dyn PartRepo>`; whether rows live in Postgres or in
//! memory is decided once in `app::build_state`.

use async_trait::async_trait;
use serde::Serialize;

use crate::repos::error::RepoResult;

/// A stored part. `id` is always the key the row is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Part {
    #[sqlx(rename = "partId")]
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Business attributes of a part, without the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPart {
    pub name: String,
    pub code: Option<String>,
}

impl NewPart {
    pub fn with_id(self, id: i64) -> Part {
        Part {
            id,
            name: self.name,
            code: self.code,
        }
    }
}

#[async_trait]
pub trait PartRepo: Send + Sync + 'static {
    /// All parts ordered by id ascending.
    async fn list(&self) -> RepoResult<Vec<Part>>;

    async fn get(&self, id: i64) -> RepoResult<Option<Part>>;

    /// Store a new part and return it with its assigned id.
    ///
    /// Ids are unique even under concurrent inserts.
    async fn insert(&self, part: NewPart) -> RepoResult<Part>;

    /// Replace the attributes of the part at `id`.
    ///
    /// Returns `Ok(None)` when no row exists; nothing is created in that case.
    async fn update(&self, id: i64, part: NewPart) -> RepoResult<Option<Part>>;

    /// Returns `true` when a row was removed.
    async fn delete(&self, id: i64) -> RepoResult<bool>;

    /// Trivial read used by the health check.
    async fn ping(&self) -> RepoResult<()>;
}
