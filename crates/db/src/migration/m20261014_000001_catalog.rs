//! Catalog migration.
//!
//! Creates the news_articles and podcasts tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(CATALOG_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS podcasts, news_articles CASCADE;")
            .await?;
        Ok(())
    }
}

const CATALOG_SQL: &str = r"
-- News articles with an optional cover image
CREATE TABLE news_articles (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    cover_url TEXT
);

-- Podcast episodes; audio_url is set for every upload-created episode
CREATE TABLE podcasts (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    cover_url TEXT,
    audio_url TEXT
);
";
