use crate::services::auth::principal::{Principal, Role};

/// Decide whether an authenticated principal may run an operation that
/// requires `required`. Pure: no I/O, no side effects.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, principal: &Principal, required: &Role) -> bool;
}

/// Grants access iff the principal holds the required role.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAuthorizer;

impl Authorizer for RoleAuthorizer {
    fn authorize(&self, principal: &Principal, required: &Role) -> bool {
        principal.has_role(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_must_be_granted_exactly() {
        let admin = Principal::new("alice", ["ADMIN"]);
        let viewer = Principal::new("bob", ["VIEWER"]);
        let shouting = Principal::new("carol", ["admin"]);

        assert!(RoleAuthorizer.authorize(&admin, &Role::admin()));
        assert!(!RoleAuthorizer.authorize(&viewer, &Role::admin()));
        assert!(!RoleAuthorizer.authorize(&shouting, &Role::admin()));

        let nobody = Principal::new("dave", Vec::<String>::new());
        assert!(!RoleAuthorizer.authorize(&nobody, &Role::admin()));
    }
}
