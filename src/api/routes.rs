/*
 * Responsibility
 * - URL 構造を定義
 * - /health は認証なし、/parts 系は route ごとに必要な role を宣言する
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    health::health,
    parts::{create_part, delete_part, edit_part, get_part, get_parts},
};
use crate::middleware::auth::access::require_role;
use crate::services::auth::Role;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    // 全操作 ADMIN。操作ごとに role を分ける場合は Router を分けて require_role を掛ける
    let parts = Router::new()
        .route("/parts", get(get_parts).post(create_part))
        .route(
            "/parts/{id}",
            get(get_part).put(edit_part).delete(delete_part),
        );

    Router::new()
        .route("/health", get(health))
        .merge(require_role(parts, state, Role::admin()))
}
