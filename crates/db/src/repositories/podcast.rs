//! Podcast repository for database operations.

use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set,
};

use crate::entities::podcasts;
use podcast_core::catalog::{CatalogError, EntityKind};
use podcast_core::podcast::{NewPodcast, Podcast, PodcastRepository as PodcastRepoTrait};

/// Podcast repository implementation.
#[derive(Debug)]
pub struct PodcastRepository {
    db: Arc<DatabaseConnection>,
}

impl PodcastRepository {
    /// Create a new podcast repository.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl PodcastRepoTrait for PodcastRepository {
    async fn find_all(&self) -> Result<Vec<Podcast>, CatalogError> {
        let models = podcasts::Entity::find()
            .order_by_asc(podcasts::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| CatalogError::repository(e.to_string()))?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Podcast>, CatalogError> {
        let model = podcasts::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| CatalogError::repository(e.to_string()))?;

        Ok(model.map(to_domain))
    }

    async fn insert(&self, input: NewPodcast) -> Result<Podcast, CatalogError> {
        let active_model = podcasts::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            cover_url: Set(input.cover_url),
            audio_url: Set(input.audio_url),
        };

        let model = active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| CatalogError::repository(e.to_string()))?;

        Ok(to_domain(model))
    }

    async fn update(&self, podcast: Podcast) -> Result<Podcast, CatalogError> {
        let id = podcast.id;
        let active_model = podcasts::ActiveModel {
            id: Set(id),
            title: Set(podcast.title),
            description: Set(podcast.description),
            cover_url: Set(podcast.cover_url),
            audio_url: Set(podcast.audio_url),
        };

        let model = active_model
            .update(self.db.as_ref())
            .await
            .map_err(|e| match e {
                // Row removed after the caller looked it up
                DbErr::RecordNotUpdated => CatalogError::not_found(EntityKind::Podcast, id),
                other => CatalogError::repository(other.to_string()),
            })?;

        Ok(to_domain(model))
    }

    async fn delete(&self, id: i64) -> Result<bool, CatalogError> {
        let result = podcasts::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| CatalogError::repository(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

fn to_domain(model: podcasts::Model) -> Podcast {
    Podcast {
        id: model.id,
        title: model.title,
        description: model.description,
        cover_url: model.cover_url,
        audio_url: model.audio_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn episode(id: i64) -> podcasts::Model {
        podcasts::Model {
            id,
            title: format!("Ep{id}"),
            description: "desc".to_string(),
            cover_url: None,
            audio_url: Some(format!("http://localhost:9000/audios/ep{id}.wav")),
        }
    }

    #[tokio::test]
    async fn test_find_all_keeps_row_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![episode(1), episode(2), episode(5)]])
            .into_connection();
        let repo = PodcastRepository::new(Arc::new(db));

        let ids: Vec<i64> = repo
            .find_all()
            .await
            .expect("find_all")
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[tokio::test]
    async fn test_insert_keeps_audio_url() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![episode(1)]])
            .into_connection();
        let repo = PodcastRepository::new(Arc::new(db));

        let podcast = repo
            .insert(NewPodcast {
                title: "Ep1".to_string(),
                description: "desc".to_string(),
                cover_url: None,
                audio_url: Some("http://localhost:9000/audios/ep1.wav".to_string()),
            })
            .await
            .expect("insert");

        assert_eq!(podcast.id, 1);
        assert_eq!(
            podcast.audio_url.as_deref(),
            Some("http://localhost:9000/audios/ep1.wav")
        );
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![episode(4)]])
            .into_connection();
        let repo = PodcastRepository::new(Arc::new(db));

        let podcast = repo.find_by_id(4).await.expect("query").expect("present");
        assert_eq!(podcast.title, "Ep4");
        assert_eq!(podcast.cover_url, None);
    }

    #[tokio::test]
    async fn test_delete_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PodcastRepository::new(Arc::new(db));

        assert!(!repo.delete(999).await.expect("delete"));
    }

    #[tokio::test]
    async fn test_update_of_vanished_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<podcasts::Model>::new()])
            .into_connection();
        let repo = PodcastRepository::new(Arc::new(db));

        let mut podcast = to_domain(episode(6));
        podcast.title = "Ep6 revisado".to_string();
        let err = repo.update(podcast).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: EntityKind::Podcast,
                id: 6
            }
        ));
    }
}
