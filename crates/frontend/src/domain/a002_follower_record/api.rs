use contracts::domain::a002_follower_record::FollowerFeed;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, follower_records_path};

/// Records recently added by the people `username` follows
pub async fn fetch_follower_records(username: &str) -> Result<FollowerFeed, String> {
    let response = Request::get(&api_url(&follower_records_path(username)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Follower records failed: {}", response.status()));
    }

    response
        .json::<FollowerFeed>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
