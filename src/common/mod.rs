pub mod context;
pub mod env;
pub mod error;
pub mod init;
pub mod redis_pool;
pub mod search;
pub mod state;
