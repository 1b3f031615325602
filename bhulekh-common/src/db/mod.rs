//! Database layer: schema initialization, row models, shared queries

pub mod init;
pub mod models;
pub mod queries;

pub use init::init_database;
