/*!
 * Request extractors
 *
 * Responsibility:
 * - 認証済み Principal と Path の part id を handler に提供する
 * - 失敗時は AppError (401 / 400) へ変換
 */

mod part_id;
mod principal;

pub use part_id::PartId;
pub use principal::CurrentPrincipal;
