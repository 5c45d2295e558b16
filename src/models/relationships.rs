use crate::common::search::Searchable;
use crate::entities::relationships::{FriendRow, Relationship as RelationshipEntity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A directed friend edge, owned by `user_id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: i64,
    pub user_id: i64,
    pub friend_id: i64,
    pub friend_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RelationshipEntity> for Relationship {
    fn from(value: RelationshipEntity) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            friend_id: value.friend_id,
            friend_name: value.friend_name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// An entry of a user's friend list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Friend {
    pub id: i64,
    pub name: String,
    pub school: String,
    pub major: String,
    pub interest: String,
}

impl From<FriendRow> for Friend {
    fn from(value: FriendRow) -> Self {
        let name = value.display_name().to_owned();
        Self {
            id: value.id,
            name,
            school: value.school.unwrap_or_default(),
            major: value.major.unwrap_or_default(),
            interest: value.interest.unwrap_or_default(),
        }
    }
}

impl Searchable for Friend {
    fn search_fields(&self) -> [&str; 4] {
        [&self.name, &self.interest, &self.school, &self.major]
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendArgs {
    #[serde(deserialize_with = "deserialize_user_id")]
    pub user_id: i64,
    #[serde(deserialize_with = "deserialize_user_id")]
    pub friend_id: i64,
}

#[derive(Debug, Serialize)]
pub struct RemoveFriendResponse {
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Number(i64),
    Text(String),
}

/// Web clients keep the signed-in user id in session storage and send it
/// back as a string, so ids are accepted as numbers or numeric strings.
fn deserialize_user_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match RawUserId::deserialize(deserializer)? {
        RawUserId::Number(id) => Ok(id),
        RawUserId::Text(id) => id
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid user id `{id}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friend_args_accept_numbers_and_numeric_strings() {
        let args: FriendArgs = serde_json::from_str(r#"{"userId": "1", "friendId": 5}"#).unwrap();
        assert_eq!(args.user_id, 1);
        assert_eq!(args.friend_id, 5);
    }

    #[test]
    fn friend_args_reject_garbage_ids() {
        assert!(serde_json::from_str::<FriendArgs>(r#"{"userId": "null", "friendId": 5}"#).is_err());
        assert!(serde_json::from_str::<FriendArgs>(r#"{"userId": 1}"#).is_err());
    }

    #[test]
    fn friend_uses_snapshot_name() {
        let friend = Friend::from(FriendRow {
            id: 5,
            name: Some("Robert".to_owned()),
            friend_name: Some("Bob".to_owned()),
            interest: Some("chess club".to_owned()),
            school: None,
            major: Some("EE".to_owned()),
        });
        assert_eq!(friend.name, "Bob");
        assert_eq!(friend.id, 5);
        assert_eq!(friend.school, "");
        assert_eq!(friend.interest, "chess club");
    }

    #[test]
    fn relationship_serializes_in_camel_case() {
        let now = Utc::now();
        let relationship = Relationship {
            id: 1,
            user_id: 1,
            friend_id: 5,
            friend_name: Some("Bob".to_owned()),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&relationship).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["friendId"], 5);
        assert_eq!(json["friendName"], "Bob");
        assert!(json.get("createdAt").is_some());
    }
}
