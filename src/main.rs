use dotenv::dotenv;
use rss_aggregator::config::Config;
use rss_aggregator::db;
use rss_aggregator::sync::Scheduler;
use std::time::Duration;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let scheduler = Scheduler::new(
        db::pool().clone(),
        Config::sync_concurrency(),
        Duration::from_secs(Config::sync_interval_in_seconds()),
    );

    scheduler.run().await;
}
