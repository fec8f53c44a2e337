use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use tokio::task;

use crate::{
    domain::{
        entities::videos::{InsertVideoEntity, VideoEntity},
        repositories::videos::VideoRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::videos},
};

pub struct VideoPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl VideoPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl VideoRepository for VideoPostgres {
    async fn save(&self, insert_video_entity: InsertVideoEntity) -> Result<i64> {
        // Diesel is synchronous; keep pool checkout and queries off the async workers.
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<i64> {
            let mut conn = db_pool.get()?;

            let id = diesel::insert_into(videos::table)
                .values(&insert_video_entity)
                .returning(videos::id)
                .get_result::<i64>(&mut conn)?;

            Ok(id)
        })
        .await??)
    }

    async fn list_all(&self) -> Result<Vec<VideoEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<VideoEntity>> {
            let mut conn = db_pool.get()?;

            let results = videos::table
                .select(VideoEntity::as_select())
                .order((videos::uploaded_at.desc(), videos::id.desc()))
                .load::<VideoEntity>(&mut conn)?;

            Ok(results)
        })
        .await??)
    }
}
