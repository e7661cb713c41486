//! In-memory `PartRepo`, used with `PARTS_STORE=memory` and in tests.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::repos::error::{RepoError, RepoResult};
use crate::repos::part_repo::{NewPart, Part, PartRepo};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    parts: BTreeMap<i64, Part>,
}

/// Every operation runs under a single lock, so id assignment and
/// update/delete are atomic with respect to concurrent requests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPartRepo {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryPartRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PartRepo for InMemoryPartRepo {
    async fn list(&self) -> RepoResult<Vec<Part>> {
        let inner = self.inner.read().map_err(|_| RepoError::Poisoned)?;
        Ok(inner.parts.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> RepoResult<Option<Part>> {
        let inner = self.inner.read().map_err(|_| RepoError::Poisoned)?;
        Ok(inner.parts.get(&id).cloned())
    }

    async fn insert(&self, part: NewPart) -> RepoResult<Part> {
        let mut inner = self.inner.write().map_err(|_| RepoError::Poisoned)?;

        inner.next_id += 1;
        let part = part.with_id(inner.next_id);
        inner.parts.insert(part.id, part.clone());

        Ok(part)
    }

    async fn update(&self, id: i64, part: NewPart) -> RepoResult<Option<Part>> {
        let mut inner = self.inner.write().map_err(|_| RepoError::Poisoned)?;

        let Some(slot) = inner.parts.get_mut(&id) else {
            return Ok(None);
        };
        *slot = part.with_id(id);

        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut inner = self.inner.write().map_err(|_| RepoError::Poisoned)?;
        Ok(inner.parts.remove(&id).is_some())
    }

    async fn ping(&self) -> RepoResult<()> {
        let _guard = self.inner.read().map_err(|_| RepoError::Poisoned)?;
        Ok(())
    }
}
