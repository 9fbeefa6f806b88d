//! Core business logic for the podcast backend.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached through repository traits implemented by the db crate.
//!
//! # Modules
//!
//! - `storage` - Object naming, upload and deletion of media assets
//! - `catalog` - Errors and asset cleanup shared by the record services
//! - `news` - News articles with an optional cover
//! - `podcast` - Podcast episodes with audio and an optional cover

pub mod catalog;
pub mod news;
pub mod podcast;
pub mod storage;
