use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::users::User;
use crate::repositories::users;

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<User> {
    match users::fetch_one(ctx, user_id).await {
        Ok(user) => Ok(User::from(user)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<User>> {
    match users::fetch_all(ctx).await {
        Ok(users) => Ok(users.into_iter().map(User::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// Parses a user id received as a path segment. Clients that lost their
/// session send an empty segment or the literal `null`.
pub fn parse_user_id(raw: &str) -> ServiceResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Err(AppError::FriendsInvalidUserId);
    }
    raw.parse().map_err(|_| AppError::FriendsInvalidUserId)
}
