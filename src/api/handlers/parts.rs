/*
 * Responsibility
 * - /parts 系 CRUD handler
 * - 認証・認可は middleware で済んでいる前提 (ここに来た時点で Admitted)
 * - Json を受けて DTO validation → PartRepo 呼び出し → Envelope で status を明示して返す
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    api::{
        dto::parts::PartRequest,
        envelope::Envelope,
        extractors::{CurrentPrincipal, PartId},
    },
    error::AppError,
    repos::{NewPart, Part},
    state::AppState,
};

const RESOURCE: &str = "part";

// Body の parse 失敗も validate() 失敗も同じ 422 に寄せる
// ただし body 上限超過 (Content-Length なしで Limited に引っかかった場合) は 413
fn validated(payload: Result<Json<PartRequest>, JsonRejection>) -> Result<NewPart, AppError> {
    let Json(req) = payload.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::validation(e.body_text())
        }
    })?;
    req.validate().map_err(AppError::validation)?;
    Ok(req.into_new_part())
}

pub async fn get_parts(State(state): State<AppState>) -> Result<Envelope<Vec<Part>>, AppError> {
    let parts = state.parts.list().await?;
    Ok(Envelope::ok(parts))
}

pub async fn get_part(
    State(state): State<AppState>,
    PartId(id): PartId,
) -> Result<Envelope<Part>, AppError> {
    let part = state
        .parts
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(RESOURCE))?;

    Ok(Envelope::ok(part))
}

pub async fn create_part(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    payload: Result<Json<PartRequest>, JsonRejection>,
) -> Result<Envelope<Part>, AppError> {
    let new_part = validated(payload)?;

    let part = state.parts.insert(new_part).await?;

    tracing::info!(part_id = part.id, user_id = %principal.user_id, "part created");
    Ok(Envelope::ok(part))
}

pub async fn edit_part(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    PartId(id): PartId,
    payload: Result<Json<PartRequest>, JsonRejection>,
) -> Result<Envelope<Part>, AppError> {
    let new_part = validated(payload)?;

    // path の id が正。body の id は見ない
    let part = state
        .parts
        .update(id, new_part)
        .await?
        .ok_or_else(|| AppError::not_found(RESOURCE))?;

    tracing::info!(part_id = part.id, user_id = %principal.user_id, "part updated");
    Ok(Envelope::ok(part))
}

pub async fn delete_part(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    PartId(id): PartId,
) -> Result<Envelope<String>, AppError> {
    if !state.parts.delete(id).await? {
        return Err(AppError::not_found(RESOURCE));
    }

    tracing::info!(part_id = id, user_id = %principal.user_id, "part deleted");
    Ok(Envelope::ok(format!("part {id} deleted")))
}
