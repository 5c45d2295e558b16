use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::sessions::Session;
use crate::repositories::sessions;
use tracing::debug;
use uuid::Uuid;

/// Resolves a bearer token to a live session.
pub async fn authenticate<C: Context>(ctx: &C, session_id: Uuid) -> ServiceResult<Session> {
    let session = match sessions::fetch_one(ctx, session_id).await {
        Ok(Some(session)) => Session::from(session),
        Ok(None) => {
            debug!(%session_id, "Unknown session token");
            return Err(AppError::Unauthorized);
        }
        Err(e) => return unexpected(e),
    };
    if session.is_expired() {
        debug!(%session_id, user_id = session.user_id, "Expired session token");
        return Err(AppError::Unauthorized);
    }
    Ok(session)
}
