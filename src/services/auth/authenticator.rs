//! Token → principal resolution.

use std::sync::Arc;

use crate::services::auth::principal::Principal;

/// Resolve a bearer token to a principal.
///
/// An unknown, expired or malformed token yields `None`; it is not an error.
/// Implementations must not panic on any input and have no side effects.
pub trait Authenticator: Send + Sync {
    fn name(&self) -> &'static str;

    fn authenticate(&self, token: &str) -> Option<Principal>;
}

/// Ordered list of strategies; the first one that recognises the token wins.
#[derive(Clone, Default)]
pub struct ChainedAuthenticator {
    strategies: Vec<Arc<dyn Authenticator>>,
}

impl ChainedAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, strategy: Arc<dyn Authenticator>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for ChainedAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainedAuthenticator")
            .field("strategies", &names)
            .finish()
    }
}

impl Authenticator for ChainedAuthenticator {
    fn name(&self) -> &'static str {
        "chained"
    }

    fn authenticate(&self, token: &str) -> Option<Principal> {
        self.strategies.iter().find_map(|s| {
            let principal = s.authenticate(token)?;
            tracing::debug!(strategy = s.name(), user_id = %principal.user_id, "token accepted");
            Some(principal)
        })
    }
}
