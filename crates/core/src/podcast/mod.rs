//! Podcast episodes: a required audio file and an optional cover.

mod service;
mod types;

pub use service::{PodcastBuckets, PodcastRepository, PodcastService};
pub use types::{NewPodcast, Podcast, PodcastRequest, PodcastResponse, PodcastUpload};
