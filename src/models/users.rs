use crate::common::search::Searchable;
use crate::entities::users::User as UserEntity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub interest: String,
    pub school: String,
    pub major: String,
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            name: value.name.unwrap_or_default(),
            interest: value.interest.unwrap_or_default(),
            school: value.school.unwrap_or_default(),
            major: value.major.unwrap_or_default(),
        }
    }
}

impl Searchable for User {
    fn search_fields(&self) -> [&str; 4] {
        [&self.name, &self.interest, &self.school, &self.major]
    }
}
