/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access::require_role(...), http::apply(...)
 */
pub mod auth;
pub mod http;
