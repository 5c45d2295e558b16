use crate::common::context::Context;
use crate::entities::sessions::Session;
use redis::AsyncCommands;
use uuid::Uuid;

const SESSIONS_KEY: &str = "studenthub:sessions";

pub async fn fetch_one<C: Context>(ctx: &C, session_id: Uuid) -> anyhow::Result<Option<Session>> {
    let mut redis = ctx.redis().await?;
    let session: Option<String> = redis.hget(SESSIONS_KEY, session_id).await?;
    match session {
        Some(session) => Ok(Some(serde_json::from_str(&session)?)),
        None => Ok(None),
    }
}
