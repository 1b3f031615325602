//! HTTP API handlers for bhulekh-dr

pub mod health;
pub mod records;

pub use health::health_routes;
pub use records::{get_record_validity, list_records};
