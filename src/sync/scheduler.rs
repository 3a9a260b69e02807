use crate::db::{feeds, Pool};
use crate::sync::sync_feed_job::SyncFeedJob;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

pub struct Scheduler {
    pool: Pool,
    concurrency: usize,
    interval: Duration,
}

impl Scheduler {
    pub fn new(pool: Pool, concurrency: usize, interval: Duration) -> Self {
        assert!(concurrency > 0, "concurrency must be positive");
        assert!(!interval.is_zero(), "interval must be positive");

        Self {
            pool,
            concurrency,
            interval,
        }
    }

    pub async fn run(self) {
        log::info!(
            "Syncing up to {} feeds every {:?}",
            self.concurrency,
            self.interval
        );

        // The first batch runs right away; every later one waits for the
        // timer. A batch that overruns the interval pushes the next tick
        // out instead of letting iterations pile up.
        let mut timer = time::interval_at(Instant::now() + self.interval, self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            self.run_iteration().await;
            timer.tick().await;
        }
    }

    async fn run_iteration(&self) {
        let due_feeds = {
            let mut connection = match self.pool.get() {
                Ok(connection) => connection,
                Err(error) => {
                    log::error!("Failed to check out a db connection: {:?}", error);
                    return;
                }
            };

            match feeds::find_due_feeds(&mut connection, self.concurrency as i64) {
                Ok(due_feeds) => due_feeds,
                Err(error) => {
                    log::error!("Failed to load the feeds batch: {:?}", error);
                    return;
                }
            }
        };

        if due_feeds.is_empty() {
            return;
        }

        let mut tasks = Vec::with_capacity(due_feeds.len());

        for feed in due_feeds {
            let pool = self.pool.clone();

            tasks.push(tokio::spawn(SyncFeedJob::new(feed).run(pool)));
        }

        // Join barrier: the next tick can not start until every task in
        // this batch has returned, successfully or not.
        for task in tasks {
            if let Err(error) = task.await {
                log::error!("Feed sync task aborted: {:?}", error);
            }
        }
    }
}
