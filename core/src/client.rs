//! Public facade aggregating the four use cases.
//!
//! # Design
//! `ChuckNorrisClient` wires adapter → repository → use cases by explicit
//! construction; embedders that want a different transport (or an offline
//! one, in tests) inject it through `with_api`. There is no service locator.
//! The only process-wide state is the shared `reqwest::Client`, which owns
//! the connection pool and is initialized at most once even under
//! concurrent first use.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::api::{HttpJokeApi, JokeApi, DEFAULT_BASE_URL};
use crate::error::Error;
use crate::repository::JokeRepository;
use crate::types::Joke;
use crate::usecase::{GetCategories, GetRandomJoke, GetRandomJokeByCategory, SearchJokes};

static SHARED_HTTP: OnceCell<reqwest::Client> = OnceCell::new();

#[cfg(test)]
static INIT_RUNS: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

/// Hand out the process-wide HTTP client, building it on first use.
///
/// A build failure surfaces as `Error::Init`, distinct from request
/// failures, and leaves the cell empty so a later call may retry.
fn shared_http() -> Result<reqwest::Client, Error> {
    SHARED_HTTP
        .get_or_try_init(|| {
            #[cfg(test)]
            INIT_RUNS.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            reqwest::Client::builder().build().map_err(Error::Init)
        })
        .cloned()
}

/// Entry point for embedding applications.
///
/// Aggregates the four operations behind one object. Every method returns
/// the `Result` produced by its use case unchanged; nothing is re-wrapped,
/// so failure causes stay reachable through `std::error::Error::source`.
pub struct ChuckNorrisClient {
    get_random_joke: GetRandomJoke,
    get_random_joke_by_category: GetRandomJokeByCategory,
    get_categories: GetCategories,
    search_jokes: SearchJokes,
}

impl ChuckNorrisClient {
    /// Client against the production endpoint, on the shared transport.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate endpoint, still on the shared transport.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = shared_http()?;
        Ok(Self::with_api(Box::new(HttpJokeApi::new(http, base_url))))
    }

    /// Client over an explicit transport implementation.
    pub fn with_api(api: Box<dyn JokeApi>) -> Self {
        let repository = Arc::new(JokeRepository::new(api));
        Self {
            get_random_joke: GetRandomJoke::new(Arc::clone(&repository)),
            get_random_joke_by_category: GetRandomJokeByCategory::new(Arc::clone(&repository)),
            get_categories: GetCategories::new(Arc::clone(&repository)),
            search_jokes: SearchJokes::new(repository),
        }
    }

    /// One random joke.
    pub async fn get_random_joke(&self) -> Result<Joke, Error> {
        self.get_random_joke.execute().await
    }

    /// One random joke from the given category.
    pub async fn get_random_joke_by_category(&self, category: &str) -> Result<Joke, Error> {
        self.get_random_joke_by_category.execute(category).await
    }

    /// All available categories.
    pub async fn get_categories(&self) -> Result<Vec<String>, Error> {
        self.get_categories.execute().await
    }

    /// Jokes whose text matches the query (minimum three characters).
    pub async fn search_jokes(&self, query: &str) -> Result<Vec<Joke>, Error> {
        self.search_jokes.execute(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn repeated_construction_initializes_shared_transport_once() {
        let _first = ChuckNorrisClient::new().unwrap();
        let _second = ChuckNorrisClient::new().unwrap();
        let _third = ChuckNorrisClient::with_base_url("http://localhost:3000/jokes").unwrap();
        assert_eq!(INIT_RUNS.load(Ordering::SeqCst), 1);
    }
}
