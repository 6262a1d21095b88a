// src/core/net.rs
//
// Blocking HTTP GET with a hard timeout. Only a 200 counts as success;
// redirects are followed first.

use reqwest::{StatusCode, blocking::Client};
use thiserror::Error;

use crate::config::options::FetchOptions;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error {status} from {url}")]
    Status { status: u16, url: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport(e) if e.is_timeout())
    }
}

pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String, FetchError> {
    let client = Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
    }

    // Charset comes from Content-Type when present, UTF-8 otherwise.
    Ok(resp.text()?)
}
