use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::videos::{InsertVideoEntity, VideoEntity};

#[async_trait]
#[automock]
pub trait VideoRepository {
    async fn save(&self, insert_video_entity: InsertVideoEntity) -> Result<i64>;

    /// Every stored video, most recently uploaded first.
    async fn list_all(&self) -> Result<Vec<VideoEntity>>;
}
