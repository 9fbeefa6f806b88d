//! Shared errors and configuration for the podcast backend.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, BucketConfig, DatabaseConfig, MinioConfig, ServerConfig};
pub use error::AppError;
