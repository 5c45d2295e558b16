use crate::common::context::Context;
use crate::models::engagements::EngagementSnapshot;

pub async fn fetch_snapshot<C: Context>(ctx: &C) -> sqlx::Result<EngagementSnapshot> {
    const LIKES_QUERY: &str = "SELECT DISTINCT user_id FROM likes";
    const COMMENTS_QUERY: &str = "SELECT DISTINCT user_id FROM comments";
    let like_user_ids = sqlx::query_scalar(LIKES_QUERY).fetch_all(ctx.db()).await?;
    let comment_user_ids = sqlx::query_scalar(COMMENTS_QUERY)
        .fetch_all(ctx.db())
        .await?;
    Ok(EngagementSnapshot {
        like_user_ids,
        comment_user_ids,
    })
}
