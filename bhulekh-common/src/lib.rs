//! # Bhulekh Common Library
//!
//! Shared code for the Bhulekh land-record microservices including:
//! - Domain vocabulary (nondh/tenure/hukam enums, status mapping)
//! - Area normalization constants
//! - The validity-chain computation (classifier, sorter, validator, engine)
//! - Database models and schema initialization
//! - Configuration loading

pub mod area;
pub mod chain;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod vocab;

pub use error::{Error, Result};
