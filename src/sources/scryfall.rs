//! Scryfall card-name autocomplete
//!
//! `GET <endpoint>?q=<query>` answers with a catalog object whose `data`
//! field lists up to 20 card names. A 404 or a catalog without `data` is
//! treated as "no cards".

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::config::SourceConfig;
use crate::error::TypeaheadError;
use crate::query::{FetchError, FetchResult, SuggestionSource};
use crate::suggestions::Suggestion;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    data: Option<Vec<String>>,
}

/// Card names from a catalog response body
pub fn parse_catalog(body: &str) -> Result<Vec<String>, FetchError> {
    let catalog: CatalogResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if catalog.status == Some(StatusCode::NOT_FOUND.as_u16()) {
        return Ok(Vec::new());
    }
    Ok(catalog.data.unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct ScryfallSource {
    client: Client,
    endpoint: String,
    cancel_token: CancellationToken,
}

impl ScryfallSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TypeaheadError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            cancel_token: CancellationToken::new(),
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, TypeaheadError> {
        Self::new(config.scryfall_url.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fail every pending and future lookup with [`FetchError::Cancelled`]
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

async fn request_names(client: Client, endpoint: String, query: String) -> Result<Vec<String>, FetchError> {
    let response = client
        .get(&endpoint)
        .query(&[("q", query.as_str())])
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        log::debug!("No cards for {:?}", query);
        return Ok(Vec::new());
    }
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    parse_catalog(&body)
}

impl SuggestionSource for ScryfallSource {
    type Value = ();

    fn fetch(&self, query: &str) -> BoxFuture<'static, FetchResult<()>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let query = query.to_string();
        let cancel_token = self.cancel_token.clone();

        Box::pin(async move {
            if query.is_empty() {
                return Ok(Vec::new());
            }

            let names = tokio::select! {
                biased;
                _ = cancel_token.cancelled() => Err(FetchError::Cancelled),
                names = request_names(client, endpoint, query) => names,
            }?;
            Ok(names.into_iter().map(Suggestion::new).collect())
        })
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod scryfall_tests;
