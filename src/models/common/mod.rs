pub mod bulk;
pub mod document;
pub mod error_code;
pub mod response;

pub use bulk::BulkInsertResponse;
pub use document::StoredDocument;
pub use error_code::ErrorCode;
pub use response::ApiResponse;

