use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Relationship {
    pub id: i64,
    pub user_id: i64,
    pub friend_id: i64,
    pub friend_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A relationship joined with the live profile of the friend.
#[derive(Debug, FromRow)]
pub struct FriendRow {
    pub id: i64,
    pub name: Option<String>,
    pub friend_name: Option<String>,
    pub interest: Option<String>,
    pub school: Option<String>,
    pub major: Option<String>,
}

impl FriendRow {
    /// The name captured when the friend was added, falling back to the
    /// live profile name when no snapshot was stored.
    pub fn display_name(&self) -> &str {
        match self.friend_name.as_deref() {
            Some(snapshot) if !snapshot.is_empty() => snapshot,
            _ => self.name.as_deref().unwrap_or_default(),
        }
    }
}
