/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, Auth 設定, HTTP の上限値など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which `PartRepo` implementation backs the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    Memory,
}

/// Settings for the JWT bearer strategy.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub issuer: String,
    pub audience: String,
    pub leeway_seconds: u64,
    pub public_key_pem: String,
}

/// One entry of `AUTH_STATIC_TOKENS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTokenEntry {
    pub token: String,
    pub user_id: String,
    pub roles: Vec<String>,
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub store: StoreBackend,

    pub jwt: Option<JwtConfig>,
    pub static_tokens: Vec<StaticTokenEntry>,

    pub request_body_limit_bytes: usize,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let store = match std::env::var("PARTS_STORE")
            .unwrap_or_else(|_| "postgres".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "postgres" => {
                let database_url = std::env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
                let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(5);
                StoreBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            "memory" => StoreBackend::Memory,
            _ => return Err(ConfigError::Invalid("PARTS_STORE")),
        };

        let jwt = match std::env::var("ACCESS_JWT_PUBLIC_KEY_PEM") {
            Ok(pem) => {
                let issuer = std::env::var("AUTH_ISSUER")
                    .map_err(|_| ConfigError::Missing("AUTH_ISSUER"))?;
                let audience = std::env::var("AUTH_AUDIENCE")
                    .map_err(|_| ConfigError::Missing("AUTH_AUDIENCE"))?;
                let leeway_seconds = std::env::var("ACCESS_TOKEN_LEEWAY_SECONDS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);

                Some(JwtConfig {
                    issuer,
                    audience,
                    leeway_seconds,
                    public_key_pem: pem.replace("\\n", "\n"),
                })
            }
            Err(_) => None,
        };

        let static_tokens = match std::env::var("AUTH_STATIC_TOKENS") {
            Ok(raw) => parse_static_tokens(&raw)?,
            Err(_) => Vec::new(),
        };

        if jwt.is_none() && static_tokens.is_empty() {
            return Err(ConfigError::Missing(
                "ACCESS_JWT_PUBLIC_KEY_PEM or AUTH_STATIC_TOKENS",
            ));
        }

        let request_body_limit_bytes = std::env::var("REQUEST_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        let request_timeout_seconds = std::env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            addr,
            app_env,
            store,
            jwt,
            static_tokens,
            request_body_limit_bytes,
            request_timeout_seconds,
        })
    }
}

/// Parse `token=user:ROLE|ROLE;token=user` into entries.
///
/// Roles are optional; a token without roles still authenticates but is
/// rejected by every role check.
pub fn parse_static_tokens(raw: &str) -> Result<Vec<StaticTokenEntry>, ConfigError> {
    let mut entries = Vec::new();

    for item in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (token, rest) = item
            .split_once('=')
            .ok_or(ConfigError::Invalid("AUTH_STATIC_TOKENS"))?;

        let (user_id, roles) = match rest.split_once(':') {
            Some((user_id, roles)) => (user_id, roles),
            None => (rest, ""),
        };

        let token = token.trim();
        let user_id = user_id.trim();
        if token.is_empty() || user_id.is_empty() {
            return Err(ConfigError::Invalid("AUTH_STATIC_TOKENS"));
        }

        let roles = roles
            .split('|')
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();

        entries.push(StaticTokenEntry {
            token: token.to_string(),
            user_id: user_id.to_string(),
            roles,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_tokens_with_and_without_roles() {
        let entries = parse_static_tokens("t1=alice:ADMIN|AUDITOR; t2=bob ;").unwrap();

        assert_eq!(
            entries,
            vec![
                StaticTokenEntry {
                    token: "t1".into(),
                    user_id: "alice".into(),
                    roles: vec!["ADMIN".into(), "AUDITOR".into()],
                },
                StaticTokenEntry {
                    token: "t2".into(),
                    user_id: "bob".into(),
                    roles: vec![],
                },
            ]
        );
    }

    #[test]
    fn rejects_static_token_without_user() {
        assert!(matches!(
            parse_static_tokens("t1="),
            Err(ConfigError::Invalid("AUTH_STATIC_TOKENS"))
        ));
        assert!(matches!(
            parse_static_tokens("no-separator"),
            Err(ConfigError::Invalid("AUTH_STATIC_TOKENS"))
        ));
    }

    #[test]
    fn app_env_accepts_short_production_name() {
        assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
    }
}
