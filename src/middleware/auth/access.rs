//! Bearer 認証 + role 認可 → Principal を extensions に入れる
//!
//! - `AuthFilter::admit` で extract → authenticate → authorize を順に実行
//! - どこかで拒否されたら handler は実行しない (store にも触れない)
//! - 通過したら `Principal` を request extensions に格納し、handler は extractor で受け取る

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{AuthRejection, Role};
use crate::state::AppState;

#[derive(Clone)]
struct Guard {
    state: AppState,
    required: Role,
}

/// Router 内の全 route に `required` role を要求する。
///
/// `route_layer` なので、存在しない path は 401/403 ではなく 404 のまま。
///
/// 例：
/// ```ignore
/// let parts = Router::new().route("/parts", get(get_parts));
/// let parts = middleware::auth::access::require_role(parts, state.clone(), Role::admin());
/// ```
pub fn require_role(router: Router<AppState>, state: AppState, required: Role) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(
        Guard { state, required },
        access_middleware,
    ))
}

async fn access_middleware(
    State(guard): State<Guard>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let principal = match guard.state.auth.admit(req.headers(), &guard.required) {
        Ok(principal) => principal,
        Err(rejection) => {
            match rejection {
                AuthRejection::MissingCredential | AuthRejection::Unauthenticated => {
                    tracing::warn!(
                        method = %req.method(),
                        uri = %req.uri(),
                        reason = %rejection,
                        "request not authenticated"
                    );
                }
                // AuthFilter 側で user_id 付きで記録済み
                AuthRejection::Forbidden => {}
            }
            return Err(rejection.into());
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
