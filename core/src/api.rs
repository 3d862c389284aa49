//! Remote API adapter for the upstream joke service.
//!
//! # Design
//! `JokeApi` is the single seam between this library and the network: four
//! GET operations returning wire records. Everything above the trait is
//! offline-testable against a substitute implementation. `HttpJokeApi` is
//! the one real implementation, built on a shared `reqwest::Client`; it
//! interprets status codes (404 becomes `NotFound`, other non-2xx becomes
//! `Status`) and leaves query-parameter encoding to reqwest.

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use crate::dto::{JokeDto, SearchResponseDto};
use crate::error::Error;

/// Production endpoint of the upstream API.
pub const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io/jokes";

/// Remote operations offered by the upstream joke API.
///
/// One HTTP GET per call, no retries, transport-default timeouts.
/// `category` and `query` are passed through verbatim as query parameters.
#[async_trait]
pub trait JokeApi: Send + Sync {
    async fn random_joke(&self) -> Result<JokeDto, Error>;
    async fn random_joke_by_category(&self, category: &str) -> Result<JokeDto, Error>;
    async fn categories(&self) -> Result<Vec<String>, Error>;
    async fn search(&self, query: &str) -> Result<SearchResponseDto, Error>;
}

/// `JokeApi` implementation performing real HTTP round-trips.
#[derive(Debug, Clone)]
pub struct HttpJokeApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpJokeApi {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = format!("{}/{path}", self.base_url);
        debug!("GET {url} {query:?}");
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl JokeApi for HttpJokeApi {
    async fn random_joke(&self) -> Result<JokeDto, Error> {
        self.get_json("random", &[]).await
    }

    async fn random_joke_by_category(&self, category: &str) -> Result<JokeDto, Error> {
        self.get_json("random", &[("category", category)]).await
    }

    async fn categories(&self) -> Result<Vec<String>, Error> {
        self.get_json("categories", &[]).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponseDto, Error> {
        self.get_json("search", &[("query", query)]).await
    }
}
