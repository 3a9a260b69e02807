use std::env;
use std::fmt;
use std::str::FromStr;

pub struct Config;

impl Config {
    pub fn database_url() -> String {
        env::var("DATABASE_URL").expect("DATABASE_URL must be set")
    }

    pub fn database_pool_size() -> u32 {
        Self::read_var_with_default("DATABASE_POOL_SIZE", "5")
    }

    pub fn sync_concurrency() -> usize {
        Self::read_var_with_default("SYNC_CONCURRENCY", "10")
    }

    pub fn sync_interval_in_seconds() -> u64 {
        Self::read_var_with_default("SYNC_INTERVAL_SECONDS", "60")
    }

    pub fn request_timeout_in_seconds() -> u64 {
        Self::read_var_with_default("REQUEST_TIMEOUT_SECONDS", "10")
    }

    fn read_var_with_default<T: FromStr>(name: &str, default_value: &str) -> T
    where
        <T as FromStr>::Err: fmt::Debug,
    {
        env::var(name)
            .unwrap_or_else(|_| default_value.to_string())
            .parse()
            .unwrap_or_else(|error| {
                panic!(
                    "{} environment variable should parse to an integer: {:?}",
                    name, error
                )
            })
    }
}
