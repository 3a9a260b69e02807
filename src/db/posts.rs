use crate::models::post::Post;
use crate::schema::posts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

#[derive(Insertable, Debug)]
#[diesel(table_name = posts)]
pub struct NewPost {
    pub id: Uuid,
    pub feed_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub published_at: DateTime<Utc>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// No upsert here. The unique index on posts.url is the deduplication
// mechanism; a violation must reach the caller as
// DatabaseError(UniqueViolation, _) so it can branch on the error kind.
pub fn create(conn: &mut PgConnection, new_post: &NewPost) -> Result<Post, Error> {
    diesel::insert_into(posts::table)
        .values(new_post)
        .get_result::<Post>(conn)
}

pub fn find_by_feed_id(conn: &mut PgConnection, feed_id: Uuid) -> Result<Vec<Post>, Error> {
    posts::table
        .filter(posts::feed_id.eq(feed_id))
        .order(posts::published_at.desc())
        .load::<Post>(conn)
}
