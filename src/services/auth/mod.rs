/*
 * Responsibility
 * - 認証パイプライン (credential 抽出 → 認証 → role 認可) の構成要素
 * - HTTP / axum への依存は credentials と middleware 側に閉じ込める
 */
pub mod access_jwt;
pub mod authenticator;
pub mod authorizer;
pub mod credentials;
pub mod factory;
pub mod filter;
pub mod principal;
pub mod static_token;

pub use factory::build_auth_filter;
pub use filter::{AuthFilter, AuthRejection};
pub use principal::{Principal, Role};
