//! Pieces shared by the news and podcast services.
//!
//! - Error type carrying the entity kind on lookups that miss
//! - Best-effort asset cleanup

mod cleanup;
mod error;

pub use cleanup::discard_asset;
pub use error::{CatalogError, EntityKind};
