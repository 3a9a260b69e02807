use crate::schema::posts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Queryable, Identifiable, Serialize, Debug, Clone, Eq, PartialEq)]
#[diesel(table_name = posts)]
pub struct Post {
    pub id: Uuid,
    pub feed_id: Uuid,
    pub title: String,

    // None means the source item had no description at all; posts never
    // store an empty string here.
    pub description: Option<String>,

    pub published_at: DateTime<Utc>,
    pub url: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
