use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    errors::CmsError,
    infrastructure::utils::sanitize::sanitize_error,
    settings::SanityConfig,
};

const MAX_ERROR_BODY: usize = 512;

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Read-only GROQ client for one Sanity project and dataset.
#[derive(Clone)]
pub struct SanityClient {
    http: Client,
    config: SanityConfig,
    endpoint: Option<Url>,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self, CmsError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let endpoint = if config.is_configured() {
            Some(query_endpoint(config)?)
        } else {
            None
        };

        Ok(SanityClient { http, config: config.clone(), endpoint })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Runs a GROQ query and decodes its `result`.
    ///
    /// `params` are bound as `$name` variables and sent JSON encoded.
    /// Transport failures, throttling and 5xx responses are retried with a
    /// capped linear backoff.
    #[instrument(skip(self, query, params), fields(query = %query.trim()))]
    pub async fn fetch<T: DeserializeOwned>(&self, query: &str, params: &[(&str, String)]) -> Result<T, CmsError> {
        let endpoint = self.endpoint.as_ref().ok_or(CmsError::NotConfigured)?;
        let url = with_query(endpoint, query, params)?;

        let mut attempt = 0;
        loop {
            match self.send::<T>(&url).await {
                Ok(result) => return Ok(result),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.config.retry_delay(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %sanitize_error(&err),
                        "Sanity query failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send<T: DeserializeOwned>(&self, url: &Url) -> Result<T, CmsError> {
        // Anonymous reads only: published documents, never the write token.
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
                body.truncate(cut);
            }
            return Err(CmsError::Status { status: status.as_u16(), body });
        }

        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "Sanity query succeeded");

        let envelope: QueryResponse<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.result)
    }
}

fn query_endpoint(config: &SanityConfig) -> Result<Url, CmsError> {
    let project_id = config.project_id.as_deref().unwrap_or_default().trim();
    let dataset = config.dataset.as_deref().unwrap_or_default().trim();

    let host = match &config.api_host {
        Some(host) => host.trim_end_matches('/').to_string(),
        None if config.use_cdn => format!("https://{project_id}.apicdn.sanity.io"),
        None => format!("https://{project_id}.api.sanity.io"),
    };

    let raw = format!(
        "{host}/v{}/data/query/{}",
        config.api_version.trim_start_matches('v'),
        urlencoding::encode(dataset)
    );
    Url::parse(&raw).map_err(|e| CmsError::InvalidEndpoint(format!("{raw}: {e}")))
}

fn with_query(endpoint: &Url, query: &str, params: &[(&str, String)]) -> Result<Url, CmsError> {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("query", query.trim());
        for (name, value) in params {
            pairs.append_pair(&format!("${name}"), &serde_json::to_string(value)?);
        }
    }
    Ok(url)
}
