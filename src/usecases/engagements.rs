use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::engagements::EngagementSnapshot;
use crate::repositories::engagements;
use hashbrown::HashSet;

/// Everyone who liked or commented on any post, platform-wide. The
/// population is global, not limited to posts of a particular user.
pub fn engaged_user_ids(snapshot: &EngagementSnapshot) -> HashSet<i64> {
    snapshot
        .like_user_ids
        .iter()
        .chain(&snapshot.comment_user_ids)
        .copied()
        .collect()
}

pub async fn fetch_engaged_user_ids<C: Context>(ctx: &C) -> ServiceResult<HashSet<i64>> {
    match engagements::fetch_snapshot(ctx).await {
        Ok(snapshot) => Ok(engaged_user_ids(&snapshot)),
        Err(e) => unexpected(e),
    }
}
