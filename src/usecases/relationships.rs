use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::relationships::{Friend, Relationship};
use crate::repositories::relationships;
use crate::usecases::users;
use hashbrown::HashSet;
use tracing::{info, warn};

pub async fn fetch_friends<C: Context>(ctx: &C, user_id: &str) -> ServiceResult<Vec<Friend>> {
    let user_id = users::parse_user_id(user_id)?;
    match relationships::fetch_friends(ctx, user_id).await {
        Ok(friends) => Ok(friends.into_iter().map(Friend::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_friend_ids<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<HashSet<i64>> {
    match relationships::fetch_friend_ids(ctx, user_id).await {
        Ok(friend_ids) => Ok(friend_ids.into_iter().collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn add_friend<C: Context>(
    ctx: &C,
    user_id: i64,
    friend_id: i64,
) -> ServiceResult<Relationship> {
    if user_id == friend_id {
        return Err(AppError::FriendsSelfReference);
    }

    let friend = users::fetch_one(ctx, friend_id).await?;
    let relationship_id = match relationships::add_friend(ctx, user_id, friend_id, &friend.name).await
    {
        Ok(relationship_id) => relationship_id,
        Err(e) => return Err(translate_insert_error(e, user_id, friend_id)),
    };

    info!(user_id, friend_id, relationship_id, "Added friend");
    match relationships::fetch_one(ctx, relationship_id).await {
        Ok(relationship) => Ok(Relationship::from(relationship)),
        Err(e) => unexpected(e),
    }
}

pub async fn remove_friend<C: Context>(ctx: &C, user_id: i64, friend_id: i64) -> ServiceResult<()> {
    match relationships::remove_friend(ctx, user_id, friend_id).await {
        Ok(rows_affected) => {
            removal_outcome(rows_affected)?;
            info!(user_id, friend_id, "Removed friend");
            Ok(())
        }
        Err(e) => unexpected(e),
    }
}

/// The delete is keyed on the ordered pair, so zero rows means there was
/// no such relationship.
fn removal_outcome(rows_affected: u64) -> ServiceResult<()> {
    match rows_affected {
        0 => Err(AppError::FriendsNotFound),
        _ => Ok(()),
    }
}

/// Concurrent adds of the same pair race on the unique key, and a user
/// deleted after the lookup trips the foreign key. Both are expected outcomes.
#[track_caller]
fn translate_insert_error(e: sqlx::Error, user_id: i64, friend_id: i64) -> AppError {
    let db_error = e.as_database_error();
    if db_error.is_some_and(|db_error| db_error.is_unique_violation()) {
        warn!(user_id, friend_id, "Friend relationship already exists");
        return AppError::FriendsAlreadyExists;
    }
    if db_error.is_some_and(|db_error| db_error.is_foreign_key_violation()) {
        warn!(user_id, friend_id, "Friend relationship references a missing user");
        return AppError::UsersNotFound;
    }
    AppError::from(e)
}
