//! Fixed token table loaded from `AUTH_STATIC_TOKENS`.
//!
//! Meant for service accounts and local development where running an
//! authorization server is overkill.

use std::collections::HashMap;

use crate::config::StaticTokenEntry;
use crate::services::auth::authenticator::Authenticator;
use crate::services::auth::principal::Principal;

#[derive(Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, Principal>,
}

impl std::fmt::Debug for StaticTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print tokens
        f.debug_struct("StaticTokenAuthenticator")
            .field("tokens", &self.tokens.len())
            .finish()
    }
}

impl StaticTokenAuthenticator {
    pub fn new(entries: &[StaticTokenEntry]) -> Self {
        let tokens = entries
            .iter()
            .map(|e| {
                (
                    e.token.clone(),
                    Principal::new(e.user_id.clone(), e.roles.iter().cloned()),
                )
            })
            .collect();

        Self { tokens }
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn name(&self) -> &'static str {
        "static-token"
    }

    fn authenticate(&self, token: &str) -> Option<Principal> {
        self.tokens.get(token).cloned()
    }
}
