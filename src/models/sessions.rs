use crate::entities::sessions::Session as SessionEntity;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= Utc::now())
    }
}

impl From<SessionEntity> for Session {
    fn from(value: SessionEntity) -> Self {
        Self {
            session_id: value.session_id,
            user_id: value.user_id,
            expires_at: value.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn session(expires_at: Option<DateTime<Utc>>) -> Session {
        Session {
            session_id: Uuid::new_v4(),
            user_id: 1,
            expires_at,
        }
    }

    #[test]
    fn decodes_identity_service_documents() {
        let document = r#"{
            "session_id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "user_id": 1,
            "name": "Ada",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let entity: SessionEntity = serde_json::from_str(document).unwrap();
        let session = Session::from(entity);
        assert_eq!(session.user_id, 1);
        assert!(session.expires_at.is_none());
        assert!(!session.is_expired());
    }

    #[test]
    fn sessions_without_expiry_never_expire() {
        assert!(!session(None).is_expired());
    }

    #[test]
    fn expiry_is_checked_against_now() {
        assert!(session(Some(Utc::now() - TimeDelta::minutes(1))).is_expired());
        assert!(!session(Some(Utc::now() + TimeDelta::hours(1))).is_expired());
    }
}
