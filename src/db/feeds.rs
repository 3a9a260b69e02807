use crate::db;
use crate::models::feed::Feed;
use crate::schema::feeds;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

#[derive(Insertable)]
#[diesel(table_name = feeds)]
struct NewFeed<'a> {
    id: Uuid,
    name: &'a str,
    url: &'a str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

pub fn create(conn: &mut PgConnection, name: &str, url: &str) -> Result<Feed, Error> {
    let new_feed = NewFeed {
        id: Uuid::new_v4(),
        name,
        url: url.trim(),
        created_at: db::current_time(),
        updated_at: db::current_time(),
    };

    diesel::insert_into(feeds::table)
        .values(&new_feed)
        .get_result::<Feed>(conn)
}

pub fn find(conn: &mut PgConnection, id: Uuid) -> Option<Feed> {
    match feeds::table.find(id).first::<Feed>(conn) {
        Ok(record) => Some(record),
        _ => None,
    }
}

// Never-fetched feeds sort first, then the ones that have waited longest.
pub fn find_due_feeds(conn: &mut PgConnection, limit: i64) -> Result<Vec<Feed>, Error> {
    feeds::table
        .order(feeds::last_fetched_at.asc().nulls_first())
        .limit(limit)
        .load::<Feed>(conn)
}

pub fn mark_fetched(conn: &mut PgConnection, id: Uuid) -> Result<Feed, Error> {
    diesel::update(feeds::table.find(id))
        .set((
            feeds::last_fetched_at.eq(db::current_time()),
            feeds::updated_at.eq(db::current_time()),
        ))
        .get_result::<Feed>(conn)
}

#[cfg(test)]
mod tests {
    use crate::db;
    use crate::models::feed::Feed;
    use crate::schema::feeds;
    use chrono::Duration;
    use diesel::prelude::*;
    use diesel::result::Error;

    #[test]
    #[ignore]
    fn create_creates_new_feed() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let feed = super::create(connection, "Boot.dev Blog", "https://blog.boot.dev/index.xml")
                .unwrap();

            assert_eq!(feed.name, "Boot.dev Blog");
            assert_eq!(feed.url, "https://blog.boot.dev/index.xml");
            assert!(feed.last_fetched_at.is_none());

            Ok(())
        });
    }

    #[test]
    #[ignore]
    fn create_trims_url() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let feed = super::create(connection, "Feed", " https://example.com/rss ").unwrap();

            assert_eq!(feed.url, "https://example.com/rss");

            Ok(())
        });
    }

    #[test]
    #[ignore]
    fn find_finds_feed() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let feed = super::create(connection, "Feed", "https://example.com/rss").unwrap();

            let found_feed = super::find(connection, feed.id).unwrap();

            assert_eq!(found_feed, feed);

            Ok(())
        });
    }

    #[test]
    #[ignore]
    fn find_cant_find_feed() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let found_feed = super::find(connection, uuid::Uuid::new_v4());

            assert_eq!(found_feed, None);

            Ok(())
        });
    }

    #[test]
    #[ignore]
    fn mark_fetched_sets_last_fetched_at() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let feed = super::create(connection, "Feed", "https://example.com/rss").unwrap();
            assert!(feed.last_fetched_at.is_none());

            let marked_feed = super::mark_fetched(connection, feed.id).unwrap();

            assert!(marked_feed.last_fetched_at.is_some());

            Ok(())
        });
    }

    #[test]
    #[ignore]
    fn mark_fetched_never_decreases_last_fetched_at() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let feed = super::create(connection, "Feed", "https://example.com/rss").unwrap();

            let first_mark = super::mark_fetched(connection, feed.id).unwrap();
            let second_mark = super::mark_fetched(connection, feed.id).unwrap();

            assert!(second_mark.last_fetched_at >= first_mark.last_fetched_at);

            Ok(())
        });
    }

    #[test]
    #[ignore]
    fn mark_fetched_fails_for_unknown_feed() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let result = super::mark_fetched(connection, uuid::Uuid::new_v4());

            match result {
                Err(Error::NotFound) => (),
                other => panic!("Error doesn't match: {:?}", other),
            };

            Ok(())
        });
    }

    #[test]
    #[ignore]
    fn find_due_feeds_returns_empty_batch_for_empty_table() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            clear_feeds(connection);

            let due_feeds = super::find_due_feeds(connection, 2).unwrap();

            assert!(due_feeds.is_empty());

            Ok(())
        });
    }

    #[test]
    #[ignore]
    fn find_due_feeds_prefers_never_fetched_then_stalest() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            clear_feeds(connection);

            let feed_a = super::create(connection, "A", "https://a.example.com/rss").unwrap();
            let feed_b = super::create(connection, "B", "https://b.example.com/rss").unwrap();
            let feed_c = super::create(connection, "C", "https://c.example.com/rss").unwrap();

            set_last_fetched_at(connection, &feed_b, Duration::hours(1));
            set_last_fetched_at(connection, &feed_c, Duration::minutes(1));

            let due_feeds = super::find_due_feeds(connection, 2).unwrap();

            assert_eq!(due_feeds.len(), 2);
            assert_eq!(due_feeds[0].id, feed_a.id);
            assert_eq!(due_feeds[1].id, feed_b.id);

            Ok(())
        });
    }

    fn set_last_fetched_at(connection: &mut PgConnection, feed: &Feed, age: Duration) {
        diesel::update(feed)
            .set(feeds::last_fetched_at.eq(db::current_time() - age))
            .execute(connection)
            .unwrap();
    }

    // Selection reads the whole table; scrub it inside the rolled-back
    // transaction so leftovers from other tests can not skew the batch.
    fn clear_feeds(connection: &mut PgConnection) {
        diesel::delete(crate::schema::posts::table)
            .execute(connection)
            .unwrap();
        diesel::delete(feeds::table).execute(connection).unwrap();
    }
}
