use crate::db;
use crate::db::posts::NewPost;
use crate::db::{feeds, posts, Pool};
use crate::models::feed::Feed;
use crate::sync::reader::{FeedReaderError, FetchedFeedItem, RssReader};
use chrono::DateTime;
use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error};
use log::error;
use uuid::Uuid;

#[derive(Debug)]
pub struct SyncFeedJob {
    feed: Feed,
}

#[derive(Debug, Eq, PartialEq)]
pub enum FeedSyncError {
    FeedError { msg: String },
    DbError { msg: String },
}

#[derive(Debug, Eq, PartialEq)]
pub struct PubDateParseError {
    msg: String,
}

impl From<Error> for FeedSyncError {
    fn from(error: Error) -> Self {
        let msg = format!("{:?}", error);

        FeedSyncError::DbError { msg }
    }
}

impl From<PoolError> for FeedSyncError {
    fn from(error: PoolError) -> Self {
        let msg = format!("{:?}", error);

        FeedSyncError::DbError { msg }
    }
}

impl From<FeedReaderError> for FeedSyncError {
    fn from(error: FeedReaderError) -> Self {
        let msg = format!("{:?}", error);

        FeedSyncError::FeedError { msg }
    }
}

impl SyncFeedJob {
    pub fn new(feed: Feed) -> Self {
        Self { feed }
    }

    // Failures stay inside the job; the scheduler only ever sees task
    // completion.
    pub async fn run(self, pool: Pool) {
        if let Err(error) = self.sync_feed(&pool).await {
            error!("Failed to sync feed {}: {:?}", self.feed.url, error);
        }
    }

    async fn sync_feed(&self, pool: &Pool) -> Result<(), FeedSyncError> {
        self.mark_fetched(pool)?;

        let fetched_feed = RssReader {
            url: self.feed.url.clone(),
        }
        .read()
        .await?;

        let mut connection = pool.get()?;

        for item in &fetched_feed.items {
            match build_post(self.feed.id, item) {
                Ok(new_post) => match posts::create(&mut connection, &new_post) {
                    Ok(_) => (),
                    // A url we already stored; the dedup constraint doing
                    // its job, not a failure.
                    Err(Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => (),
                    Err(error) => {
                        error!("Failed to create post {}: {:?}", item.link, error);
                    }
                },
                Err(error) => {
                    error!(
                        "Skipping item {} of feed {}: {:?}",
                        item.link, self.feed.url, error
                    );
                }
            }
        }

        log::info!(
            "Feed {} collected, {} posts found",
            self.feed.name,
            fetched_feed.items.len()
        );

        Ok(())
    }

    // The staleness clock advances even when the fetch that follows
    // fails, so a broken feed waits its turn again instead of being
    // re-polled on every tick.
    fn mark_fetched(&self, pool: &Pool) -> Result<(), FeedSyncError> {
        let mut connection = pool.get()?;

        feeds::mark_fetched(&mut connection, self.feed.id)?;

        Ok(())
    }
}

fn build_post(feed_id: Uuid, item: &FetchedFeedItem) -> Result<NewPost, PubDateParseError> {
    // RFC 1123 with a numeric zone, the format the publish dates of the
    // supported feeds use. An unreadable date rejects this item only;
    // siblings are unaffected.
    let published_at = match DateTime::parse_from_rfc2822(&item.pub_date) {
        Ok(date) => date.into(),
        Err(error) => {
            let msg = format!("{} ({:?})", error, item.pub_date);

            return Err(PubDateParseError { msg });
        }
    };

    // A blank description tag and a missing one both decode to an empty
    // string; the stored post keeps the field absent in either case.
    let description = if item.description.is_empty() {
        None
    } else {
        Some(item.description.clone())
    };

    Ok(NewPost {
        id: Uuid::new_v4(),
        feed_id,
        title: item.title.clone(),
        description,
        published_at,
        url: item.link.clone(),
        created_at: db::current_time(),
        updated_at: db::current_time(),
    })
}
