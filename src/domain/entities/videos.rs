use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::videos;

#[derive(Debug, Clone, PartialEq, Selectable, Queryable)]
#[diesel(table_name = videos)]
pub struct VideoEntity {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub public_id: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = videos)]
pub struct InsertVideoEntity {
    pub name: String,
    pub url: String,
    pub public_id: String,
    pub uploaded_at: DateTime<Utc>,
}
