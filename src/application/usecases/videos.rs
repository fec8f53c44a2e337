use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::domain::{
    entities::videos::{InsertVideoEntity, VideoEntity},
    errors::ServiceError,
    repositories::videos::VideoRepository,
    value_objects::videos::SaveVideoModel,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDto {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub public_id: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

impl From<VideoEntity> for VideoDto {
    fn from(value: VideoEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            url: value.url,
            public_id: value.public_id,
            uploaded_at: value.uploaded_at,
        }
    }
}

pub struct VideosUseCase<V>
where
    V: VideoRepository + Send + Sync + 'static,
{
    video_repository: Arc<V>,
}

impl<V> VideosUseCase<V>
where
    V: VideoRepository + Send + Sync + 'static,
{
    pub fn new(video_repository: Arc<V>) -> Self {
        Self { video_repository }
    }

    pub async fn save_video(&self, save_video_model: SaveVideoModel) -> Result<i64, ServiceError> {
        save_video_model.validate()?;

        let insert_video_entity = InsertVideoEntity {
            name: save_video_model.name,
            url: save_video_model.url,
            public_id: save_video_model.public_id,
            uploaded_at: Utc::now(),
        };

        let id = self
            .video_repository
            .save(insert_video_entity)
            .await
            .map_err(ServiceError::DependencyUnavailable)?;

        info!(video_id = id, "videos: metadata saved");
        Ok(id)
    }

    pub async fn list_videos(&self) -> Result<Vec<VideoDto>, ServiceError> {
        let videos = self
            .video_repository
            .list_all()
            .await
            .map_err(ServiceError::DependencyUnavailable)?;

        Ok(videos.into_iter().map(VideoDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::videos::MockVideoRepository;
    use chrono::Duration;

    fn save_model() -> SaveVideoModel {
        SaveVideoModel {
            name: "a".to_string(),
            url: "u".to_string(),
            public_id: "p".to_string(),
        }
    }

    fn entity(id: i64, uploaded_at: DateTime<Utc>) -> VideoEntity {
        VideoEntity {
            id,
            name: format!("video-{}", id),
            url: format!("https://example.com/{}.mp4", id),
            public_id: format!("student_project/{}", id),
            uploaded_at,
        }
    }

    #[tokio::test]
    async fn save_stamps_server_time_onto_client_fields() {
        let mut video_repository = MockVideoRepository::new();
        let before = Utc::now();

        video_repository
            .expect_save()
            .withf(move |insert| {
                insert.name == "a"
                    && insert.url == "u"
                    && insert.public_id == "p"
                    && insert.uploaded_at >= before
                    && insert.uploaded_at <= Utc::now()
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(7) }));

        let usecase = VideosUseCase::new(Arc::new(video_repository));

        assert_eq!(usecase.save_video(save_model()).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn save_rejects_blank_fields_without_touching_store() {
        let mut video_repository = MockVideoRepository::new();
        video_repository.expect_save().never();

        let usecase = VideosUseCase::new(Arc::new(video_repository));
        let result = usecase
            .save_video(SaveVideoModel {
                name: "".to_string(),
                ..save_model()
            })
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn save_store_failure_is_dependency_unavailable() {
        let mut video_repository = MockVideoRepository::new();
        video_repository
            .expect_save()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("connection refused")) }));

        let usecase = VideosUseCase::new(Arc::new(video_repository));
        let result = usecase.save_video(save_model()).await;

        assert!(matches!(
            result,
            Err(ServiceError::DependencyUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn list_keeps_repository_order() {
        let now = Utc::now();
        let rows = vec![
            entity(3, now),
            entity(2, now - Duration::seconds(5)),
            entity(1, now - Duration::seconds(10)),
        ];

        let mut video_repository = MockVideoRepository::new();
        video_repository.expect_list_all().returning(move || {
            let rows = rows.clone();
            Box::pin(async move { Ok(rows) })
        });

        let usecase = VideosUseCase::new(Arc::new(video_repository));
        let videos = usecase.list_videos().await.unwrap();

        let ids: Vec<i64> = videos.iter().map(|video| video.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn dto_serializes_uploaded_at_in_camel_case() {
        let dto = VideoDto::from(entity(1, Utc::now()));
        let body = serde_json::to_value(&dto).unwrap();

        assert!(body.get("uploadedAt").is_some());
        assert!(body.get("uploaded_at").is_none());
        assert_eq!(body["public_id"], "student_project/1");
    }
}
