/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - parts: Parts Store, auth: 認証パイプライン
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - リクエストをまたぐ可変状態は Parts Store 側にだけ置く
 */
use std::sync::Arc;

use crate::repos::PartRepo;
use crate::services::auth::AuthFilter;

#[derive(Clone)]
pub struct AppState {
    pub parts: Arc<dyn PartRepo>,
    pub auth: Arc<AuthFilter>,
}

impl AppState {
    pub fn new(parts: Arc<dyn PartRepo>, auth: Arc<AuthFilter>) -> Self {
        Self { parts, auth }
    }
}
