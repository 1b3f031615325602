//! HTTP API handlers for bhulekh-up

pub mod buildinfo;
pub mod health;
pub mod upload;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use upload::process_upload;
