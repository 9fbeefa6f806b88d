//! `SeaORM` entities.

pub mod news_articles;
pub mod podcasts;
