pub mod availability;
pub mod engagements;
pub mod recommendations;
pub mod relationships;
pub mod sessions;
pub mod users;
