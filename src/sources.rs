use anyhow::Context;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::types::Fetch;

pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

pub trait Source {
    async fn pull(&self, limit: usize) -> Result<Fetch, anyhow::Error>;
}

/// A JSON array endpoint queried with a single GET per pull. The client has
/// no timeout, so a stalled connection blocks the pull indefinitely.
pub struct Endpoint {
    client: Client,
    url: String,
}

impl Source for Endpoint {
    async fn pull(&self, limit: usize) -> Result<Fetch, anyhow::Error> {
        info!("GET {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Error while requesting {}", self.url))?;

        let status = resp.status();
        debug!("{} answered {}", self.url, status);

        if status != StatusCode::OK {
            return Ok(Fetch::Failed(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .context("Error while reading the response body")?;
        let mut posts: Vec<Value> =
            serde_json::from_str(&body).context("Response body is not a JSON array")?;

        info!(
            "received {} entries, keeping {}",
            posts.len(),
            posts.len().min(limit)
        );
        posts.truncate(limit);

        Ok(Fetch::Posts(posts))
    }
}

impl Endpoint {
    pub(crate) fn new(url: impl Into<String>) -> Endpoint {
        Endpoint {
            client: Client::new(),
            url: url.into(),
        }
    }
}
