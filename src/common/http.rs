use std::time::Duration;

use reqwest::{Client, Error};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36";

/// Shared client construction for the title-lookup APIs. The 10s timeout is
/// the only transport policy this crate applies; callers needing tighter
/// deadlines wrap the resolution future themselves.
pub fn client() -> Result<Client, Error> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()
}
