use sqlx::FromRow;

/// Profile columns belong to the profile service and may be NULL.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub interest: Option<String>,
    pub school: Option<String>,
    pub major: Option<String>,
}
