use crate::common::context::Context;
use crate::entities::relationships::{FriendRow, Relationship};

const TABLE_NAME: &str = "friends";
const READ_FIELDS: &str = "id, user_id, friend_id, friend_name, created_at, updated_at";

pub async fn fetch_one<C: Context>(ctx: &C, relationship_id: i64) -> sqlx::Result<Relationship> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(relationship_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_friends<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<FriendRow>> {
    const QUERY: &str = const_str::concat!(
        "SELECT u.id, u.name, f.friend_name, u.interest, u.school, u.major FROM ",
        TABLE_NAME,
        " f INNER JOIN users u ON u.id = f.friend_id WHERE f.user_id = ? ORDER BY f.id"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_friend_ids<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<i64>> {
    const QUERY: &str = const_str::concat!(
        "SELECT friend_id FROM ",
        TABLE_NAME,
        " WHERE user_id = ?"
    );
    sqlx::query_scalar(QUERY)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

/// Inserts the edge and returns its id. Duplicate pairs are rejected by the
/// `(user_id, friend_id)` unique key.
pub async fn add_friend<C: Context>(
    ctx: &C,
    user_id: i64,
    friend_id: i64,
    friend_name: &str,
) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user_id, friend_id, friend_name) VALUES (?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(friend_id)
        .bind(friend_name)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id() as i64)
}

/// Returns the number of deleted rows.
pub async fn remove_friend<C: Context>(
    ctx: &C,
    user_id: i64,
    friend_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE user_id = ? AND friend_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(friend_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}
