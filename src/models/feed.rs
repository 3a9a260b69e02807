use crate::schema::feeds;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Queryable, Identifiable, Serialize, Debug, Clone, Eq, PartialEq)]
#[diesel(table_name = feeds)]
pub struct Feed {
    pub id: Uuid,
    pub name: String,
    pub url: String,

    pub last_fetched_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
