/*
 * Responsibility
 * - Path の {id} を内部 ID (i64) として受け取る
 * - 数値でない / 範囲外なら 400 (INVALID_PART_ID)
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartId(pub i64);

impl FromRequestParts<AppState> for PartId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("INVALID_PART_ID", "invalid id"))?;

        raw.parse::<i64>()
            .map(PartId)
            .map_err(|_| AppError::bad_request("INVALID_PART_ID", "invalid id"))
    }
}
