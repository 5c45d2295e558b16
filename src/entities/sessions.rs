use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session document written by the identity service. Fields this service
/// does not read are ignored on decode.
#[derive(Debug, Deserialize, Serialize)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: i64,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}
