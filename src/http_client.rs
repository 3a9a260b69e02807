use crate::config::Config;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

static CLIENT: OnceLock<Client> = OnceLock::new();

pub fn client() -> &'static Client {
    CLIENT.get_or_init(init_client)
}

fn init_client() -> Client {
    Client::builder()
        .redirect(Policy::limited(10))
        .timeout(request_timeout())
        .build()
        .unwrap()
}

// Covers connection time, redirects and the full body read.
fn request_timeout() -> Duration {
    Duration::from_secs(Config::request_timeout_in_seconds())
}
