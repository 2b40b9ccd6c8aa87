pub mod database;
pub mod repositories;

pub use database::{Database, SqlitePool, IN_MEMORY};
pub use repositories::*;
