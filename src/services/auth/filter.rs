//! Admission decision for a single request.
//!
//! Stages run strictly in order and stop at the first rejection:
//!
//! ```text
//! Unauthenticated --extract--> TokenPresent --authenticate--> Authenticated --authorize--> Admitted
//!        |                          |                              |
//!        +-> Rejected(401)          +-> Rejected(401)              +-> Rejected(403)
//! ```

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::error::AppError;
use crate::services::auth::authenticator::Authenticator;
use crate::services::auth::authorizer::Authorizer;
use crate::services::auth::credentials::extract_bearer;
use crate::services::auth::principal::{Principal, Role};

/// Why a request was not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthRejection {
    #[error("missing credential")]
    MissingCredential,
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("forbidden")]
    Forbidden,
}

impl From<AuthRejection> for AppError {
    fn from(r: AuthRejection) -> Self {
        match r {
            AuthRejection::MissingCredential => AppError::MissingCredential,
            AuthRejection::Unauthenticated => AppError::Unauthenticated,
            AuthRejection::Forbidden => AppError::Forbidden,
        }
    }
}

#[derive(Clone)]
pub struct AuthFilter {
    authenticator: Arc<dyn Authenticator>,
    authorizer: Arc<dyn Authorizer>,
}

impl std::fmt::Debug for AuthFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthFilter")
            .field("authenticator", &self.authenticator.name())
            .finish()
    }
}

impl AuthFilter {
    pub fn new(authenticator: Arc<dyn Authenticator>, authorizer: Arc<dyn Authorizer>) -> Self {
        Self {
            authenticator,
            authorizer,
        }
    }

    pub fn admit(&self, headers: &HeaderMap, required: &Role) -> Result<Principal, AuthRejection> {
        let token = extract_bearer(headers).map_err(|_| AuthRejection::MissingCredential)?;

        let principal = self
            .authenticator
            .authenticate(token)
            .ok_or(AuthRejection::Unauthenticated)?;

        if !self.authorizer.authorize(&principal, required) {
            tracing::warn!(
                user_id = %principal.user_id,
                required_role = %required,
                "principal lacks required role"
            );
            return Err(AuthRejection::Forbidden);
        }

        Ok(principal)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::{HeaderValue, header};

    use super::*;

    #[derive(Default)]
    struct Counting {
        authn_calls: AtomicUsize,
        authz_calls: AtomicUsize,
    }

    impl Authenticator for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn authenticate(&self, token: &str) -> Option<Principal> {
            self.authn_calls.fetch_add(1, Ordering::SeqCst);
            match token {
                "admin" => Some(Principal::new("alice", ["ADMIN"])),
                "viewer" => Some(Principal::new("bob", ["VIEWER"])),
                _ => None,
            }
        }
    }

    impl Authorizer for Counting {
        fn authorize(&self, principal: &Principal, required: &Role) -> bool {
            self.authz_calls.fetch_add(1, Ordering::SeqCst);
            principal.has_role(required)
        }
    }

    fn filter() -> (AuthFilter, Arc<Counting>) {
        let counting = Arc::new(Counting::default());
        (AuthFilter::new(counting.clone(), counting.clone()), counting)
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        h
    }

    #[test]
    fn missing_credential_stops_before_authentication() {
        let (filter, counting) = filter();

        let res = filter.admit(&HeaderMap::new(), &Role::admin());

        assert_eq!(res, Err(AuthRejection::MissingCredential));
        assert_eq!(counting.authn_calls.load(Ordering::SeqCst), 0);
        assert_eq!(counting.authz_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unknown_token_stops_before_authorization() {
        let (filter, counting) = filter();

        let res = filter.admit(&bearer("nope"), &Role::admin());

        assert_eq!(res, Err(AuthRejection::Unauthenticated));
        assert_eq!(counting.authn_calls.load(Ordering::SeqCst), 1);
        assert_eq!(counting.authz_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn principal_without_role_is_forbidden() {
        let (filter, _) = filter();

        assert_eq!(
            filter.admit(&bearer("viewer"), &Role::admin()),
            Err(AuthRejection::Forbidden)
        );
    }

    #[test]
    fn admitted_request_carries_principal() {
        let (filter, _) = filter();

        let principal = filter.admit(&bearer("admin"), &Role::admin()).unwrap();
        assert_eq!(principal.user_id, "alice");

        // The required role comes from the operation, not the filter.
        assert_eq!(
            filter.admit(&bearer("viewer"), &Role::new("VIEWER")).unwrap().user_id,
            "bob"
        );
    }
}
