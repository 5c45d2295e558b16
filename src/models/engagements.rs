/// Acting user ids of every like and comment on the platform, read in one pass.
#[derive(Debug, Default, Clone)]
pub struct EngagementSnapshot {
    pub like_user_ids: Vec<i64>,
    pub comment_user_ids: Vec<i64>,
}
