//! News article repository for database operations.
//!
//! Implements the news persistence contract using `SeaORM`.

use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set,
};

use crate::entities::news_articles;
use podcast_core::catalog::{CatalogError, EntityKind};
use podcast_core::news::{NewNews, News, NewsRepository as NewsRepoTrait};

/// News article repository implementation.
#[derive(Debug)]
pub struct NewsArticleRepository {
    db: Arc<DatabaseConnection>,
}

impl NewsArticleRepository {
    /// Create a new news article repository.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl NewsRepoTrait for NewsArticleRepository {
    async fn find_all(&self) -> Result<Vec<News>, CatalogError> {
        let models = news_articles::Entity::find()
            .order_by_asc(news_articles::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| CatalogError::repository(e.to_string()))?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<News>, CatalogError> {
        let model = news_articles::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| CatalogError::repository(e.to_string()))?;

        Ok(model.map(to_domain))
    }

    async fn insert(&self, input: NewNews) -> Result<News, CatalogError> {
        let active_model = news_articles::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            cover_url: Set(input.cover_url),
        };

        let model = active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| CatalogError::repository(e.to_string()))?;

        Ok(to_domain(model))
    }

    async fn update(&self, news: News) -> Result<News, CatalogError> {
        let id = news.id;
        let active_model = news_articles::ActiveModel {
            id: Set(id),
            title: Set(news.title),
            description: Set(news.description),
            cover_url: Set(news.cover_url),
        };

        let model = active_model
            .update(self.db.as_ref())
            .await
            .map_err(|e| match e {
                // Row removed after the caller looked it up
                DbErr::RecordNotUpdated => CatalogError::not_found(EntityKind::News, id),
                other => CatalogError::repository(other.to_string()),
            })?;

        Ok(to_domain(model))
    }

    async fn delete(&self, id: i64) -> Result<bool, CatalogError> {
        let result = news_articles::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| CatalogError::repository(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

fn to_domain(model: news_articles::Model) -> News {
    News {
        id: model.id,
        title: model.title,
        description: model.description,
        cover_url: model.cover_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(id: i64, title: &str, cover_url: Option<&str>) -> news_articles::Model {
        news_articles::Model {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            cover_url: cover_url.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                model(1, "Abertura", None),
                model(2, "Feira", Some("http://localhost:9000/capas-noticias/f.png")),
            ]])
            .into_connection();
        let repo = NewsArticleRepository::new(Arc::new(db));

        let news = repo.find_all().await.expect("find_all");

        assert_eq!(news.len(), 2);
        assert_eq!(news[0].id, 1);
        assert_eq!(news[0].cover_url, None);
        assert_eq!(
            news[1].cover_url.as_deref(),
            Some("http://localhost:9000/capas-noticias/f.png")
        );
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<news_articles::Model>::new()])
            .into_connection();
        let repo = NewsArticleRepository::new(Arc::new(db));

        assert_eq!(repo.find_by_id(99).await.expect("query"), None);
    }

    #[tokio::test]
    async fn test_insert_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, "Nova", None)]])
            .into_connection();
        let repo = NewsArticleRepository::new(Arc::new(db));

        let news = repo
            .insert(NewNews {
                title: "Nova".to_string(),
                description: "Nova description".to_string(),
                cover_url: None,
            })
            .await
            .expect("insert");

        assert_eq!(news.id, 7);
        assert_eq!(news.title, "Nova");
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "Editada", Some("http://h/c/k.png"))]])
            .into_connection();
        let repo = NewsArticleRepository::new(Arc::new(db));

        let news = repo
            .update(News {
                id: 3,
                title: "Editada".to_string(),
                description: "Editada description".to_string(),
                cover_url: Some("http://h/c/k.png".to_string()),
            })
            .await
            .expect("update");

        assert_eq!(news.id, 3);
        assert_eq!(news.cover_url.as_deref(), Some("http://h/c/k.png"));
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = NewsArticleRepository::new(Arc::new(db));

        assert!(repo.delete(1).await.expect("delete"));
        assert!(!repo.delete(1).await.expect("delete"));
    }

    #[tokio::test]
    async fn test_database_errors_become_repository_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = NewsArticleRepository::new(Arc::new(db));

        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, CatalogError::Repository(msg) if msg.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_update_of_vanished_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<news_articles::Model>::new()])
            .into_connection();
        let repo = NewsArticleRepository::new(Arc::new(db));

        let err = repo
            .update(News {
                id: 11,
                title: "Apagada".to_string(),
                description: "Apagada description".to_string(),
                cover_url: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: EntityKind::News,
                id: 11
            }
        ));
    }
}
