//! Factory: build the `AuthFilter` from application `Config`.
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::auth::access_jwt::JwtAuthenticator;
use crate::services::auth::authenticator::ChainedAuthenticator;
use crate::services::auth::authorizer::RoleAuthorizer;
use crate::services::auth::filter::AuthFilter;
use crate::services::auth::static_token::StaticTokenAuthenticator;

// Strategy order: JWT first, then the static token table.
pub fn build_auth_filter(config: &Config) -> Result<Arc<AuthFilter>, ConfigError> {
    let mut chain = ChainedAuthenticator::new();

    if let Some(jwt) = &config.jwt {
        let jwt = JwtAuthenticator::new(jwt).map_err(|e| {
            tracing::error!(error = %e, "failed to load access JWT public key");
            ConfigError::Invalid("ACCESS_JWT_PUBLIC_KEY_PEM")
        })?;
        chain = chain.with(Arc::new(jwt));
    }

    if !config.static_tokens.is_empty() {
        chain = chain.with(Arc::new(StaticTokenAuthenticator::new(
            &config.static_tokens,
        )));
    }

    if chain.is_empty() {
        return Err(ConfigError::Missing(
            "ACCESS_JWT_PUBLIC_KEY_PEM or AUTH_STATIC_TOKENS",
        ));
    }

    tracing::info!(strategies = ?chain, "authentication chain ready");

    Ok(Arc::new(AuthFilter::new(
        Arc::new(chain),
        Arc::new(RoleAuthorizer),
    )))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;
    use crate::config::{AppEnv, JwtConfig, StoreBackend};

    fn config(jwt: Option<JwtConfig>) -> Config {
        Config {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            app_env: AppEnv::Development,
            store: StoreBackend::Memory,
            jwt,
            static_tokens: Vec::new(),
            request_body_limit_bytes: 1024,
            request_timeout_seconds: 1,
        }
    }

    #[test]
    fn no_strategy_is_a_config_error() {
        assert!(matches!(
            build_auth_filter(&config(None)),
            Err(ConfigError::Missing(_))
        ));
    }

    #[test]
    fn unreadable_public_key_is_a_config_error() {
        let jwt = JwtConfig {
            issuer: "iss".into(),
            audience: "aud".into(),
            leeway_seconds: 0,
            public_key_pem: "not a pem".into(),
        };

        assert!(matches!(
            build_auth_filter(&config(Some(jwt))),
            Err(ConfigError::Invalid("ACCESS_JWT_PUBLIC_KEY_PEM"))
        ));
    }
}
