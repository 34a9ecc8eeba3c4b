pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod classes;
pub mod common;
pub mod marks;
pub mod materials;
pub mod permissions;
pub mod rooms;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::{ApiResponse, BulkInsertResponse, ErrorCode, StoredDocument};
