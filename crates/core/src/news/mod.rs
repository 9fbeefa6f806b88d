//! News article records and their optional cover image.

mod service;
mod types;

pub use service::{NewsRepository, NewsService};
pub use types::{NewNews, News, NewsRequest, NewsResponse, NewsUpload};
