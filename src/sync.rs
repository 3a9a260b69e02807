pub mod reader;
pub mod scheduler;
pub mod sync_feed_job;

pub use reader::{FetchedFeed, FetchedFeedItem};
pub use scheduler::Scheduler;
pub use sync_feed_job::SyncFeedJob;
