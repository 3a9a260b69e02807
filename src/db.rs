use crate::config::Config;
use chrono::prelude::*;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::r2d2;
use once_cell::sync::OnceCell;

#[cfg(test)]
use diesel::connection::Connection;

#[cfg(test)]
use dotenv::dotenv;

pub mod feeds;
pub mod posts;

pub type Pool = r2d2::Pool<r2d2::ConnectionManager<PgConnection>>;

static POOL: OnceCell<Pool> = OnceCell::new();

pub fn pool() -> &'static Pool {
    POOL.get_or_init(create_connection_pool)
}

pub fn create_connection_pool() -> Pool {
    let manager = r2d2::ConnectionManager::<PgConnection>::new(Config::database_url());

    r2d2::Pool::builder()
        .max_size(Config::database_pool_size())
        .build(manager)
        .unwrap()
}

pub fn current_time() -> DateTime<Utc> {
    Utc::now().round_subsecs(0)
}

#[cfg(test)]
pub fn establish_test_connection() -> PgConnection {
    dotenv().ok();

    let url = Config::database_url();

    PgConnection::establish(&url).unwrap_or_else(|_| panic!("Error connecting to {}", url))
}
