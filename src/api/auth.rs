use crate::api::RequestContext;
use crate::common::error::AppError;
use crate::common::state::AppState;
use crate::usecases::sessions;
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

/// The identity behind a valid `Authorization: Bearer <session id>` header.
///
/// Taking this extractor as the first handler argument rejects the request
/// with `401` before any other extractor or handler logic runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub session_id: Uuid,
    pub user_id: i64,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let session_id = bearer_token(&parts.headers)?;
        let ctx = RequestContext::from(state);
        let session = sessions::authenticate(&ctx, session_id).await?;
        Ok(Self {
            session_id: session.session_id,
            user_id: session.user_id,
        })
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Result<Uuid, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?
        .to_str()
        .map_err(|_| AppError::Unauthorized)?;
    let (scheme, token) = value.split_once(' ').ok_or(AppError::Unauthorized)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::Unauthorized);
    }
    Uuid::parse_str(token.trim()).map_err(|_| AppError::Unauthorized)
}
