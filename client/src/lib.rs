//! HTTP client for the Castanet taxonomy server.
//!
//! Two operations, matching the legacy wire contract exactly:
//! `navigate` POSTs a comma-joined `pathway` to `castanet.do`, and
//! `summarize` GETs `autosummary.do` with `file` and `selectedKeywords`
//! query parameters. Bodies are fetched as text and decoded explicitly so
//! transport failures, bad statuses, and malformed JSON stay distinct.

mod error;

pub use error::ClientError;
pub use error::Result;

use castanet_protocol::FILE_PARAM;
use castanet_protocol::FileSummary;
use castanet_protocol::KeywordContext;
use castanet_protocol::NAVIGATE_ENDPOINT;
use castanet_protocol::NavPath;
use castanet_protocol::NavigateResponse;
use castanet_protocol::PATHWAY_PARAM;
use castanet_protocol::SELECTED_KEYWORDS_PARAM;
use castanet_protocol::SUMMARY_ENDPOINT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const BODY_SNIPPET_LEN: usize = 200;

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct CastanetClient {
    http: reqwest::Client,
    base_url: String,
}

impl CastanetClient {
    pub fn new(opts: ClientOptions) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(opts.timeout).build()?;
        Ok(Self {
            http,
            base_url: opts.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests the hierarchy node at `path`. The empty path is the root.
    pub async fn navigate(&self, path: &NavPath) -> Result<NavigateResponse> {
        let pathway = path.to_pathway();
        debug!(%pathway, "navigate");
        let url = format!("{}/{NAVIGATE_ENDPOINT}", self.base_url);
        let resp = self
            .http
            .post(url)
            .form(&[(PATHWAY_PARAM, pathway.as_str())])
            .send()
            .await?;
        decode(NAVIGATE_ENDPOINT, resp).await
    }

    /// Requests a summary of `file` restricted to `keywords`.
    pub async fn summarize(&self, file: &str, keywords: &KeywordContext) -> Result<FileSummary> {
        debug!(file, "summarize");
        let url = format!("{}/{SUMMARY_ENDPOINT}", self.base_url);
        let resp = self
            .http
            .get(url)
            .query(&[
                (FILE_PARAM, file),
                (SELECTED_KEYWORDS_PARAM, keywords.to_param().as_str()),
            ])
            .send()
            .await?;
        decode(SUMMARY_ENDPOINT, resp).await
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &'static str, resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::Status {
            endpoint,
            status,
            body: snippet(&body),
        });
    }
    serde_json::from_str(&body).map_err(|source| ClientError::Decode { endpoint, source })
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
