pub mod relationships;
pub mod sessions;
pub mod users;
