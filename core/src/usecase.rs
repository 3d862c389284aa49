//! Use cases: one per client operation.
//!
//! # Design
//! Thin pass-throughs over the repository, mirrored one-to-one by the facade
//! methods. `SearchJokes` owns the single business rule in the library: the
//! upstream rejects queries shorter than three characters, so the use case
//! refuses them before any network traffic happens.

use std::sync::Arc;

use crate::error::Error;
use crate::repository::JokeRepository;
use crate::types::Joke;

/// Minimum accepted search query length, in characters.
pub const MIN_QUERY_LEN: usize = 3;

/// Fetch one random joke.
pub struct GetRandomJoke {
    repository: Arc<JokeRepository>,
}

impl GetRandomJoke {
    pub fn new(repository: Arc<JokeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Joke, Error> {
        self.repository.random_joke().await
    }
}

/// Fetch one random joke from a given category.
///
/// The category is not validated here; an empty or unknown category is
/// passed through and the upstream decides (typically a 404).
pub struct GetRandomJokeByCategory {
    repository: Arc<JokeRepository>,
}

impl GetRandomJokeByCategory {
    pub fn new(repository: Arc<JokeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, category: &str) -> Result<Joke, Error> {
        self.repository.random_joke_by_category(category).await
    }
}

/// List the available joke categories.
pub struct GetCategories {
    repository: Arc<JokeRepository>,
}

impl GetCategories {
    pub fn new(repository: Arc<JokeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<String>, Error> {
        self.repository.categories().await
    }
}

/// Search jokes by free-text query.
pub struct SearchJokes {
    repository: Arc<JokeRepository>,
}

impl SearchJokes {
    pub fn new(repository: Arc<JokeRepository>) -> Self {
        Self { repository }
    }

    /// Queries shorter than [`MIN_QUERY_LEN`] characters are rejected
    /// without touching the repository. Length is counted in characters,
    /// not bytes, so a three-character multibyte query is accepted.
    pub async fn execute(&self, query: &str) -> Result<Vec<Joke>, Error> {
        let len = query.chars().count();
        if len < MIN_QUERY_LEN {
            return Err(Error::QueryTooShort {
                query: query.to_string(),
                len,
            });
        }
        self.repository.search(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::JokeApi;
    use crate::dto::{JokeDto, SearchResponseDto};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport spy recording every search query it receives.
    struct SpyApi {
        search_calls: Arc<Mutex<Vec<String>>>,
    }

    fn sample_dto() -> JokeDto {
        serde_json::from_str(r#"{"id":"abc","value":"v","url":"https://x/abc"}"#).unwrap()
    }

    #[async_trait]
    impl JokeApi for SpyApi {
        async fn random_joke(&self) -> Result<JokeDto, Error> {
            Ok(sample_dto())
        }

        async fn random_joke_by_category(&self, _category: &str) -> Result<JokeDto, Error> {
            Ok(sample_dto())
        }

        async fn categories(&self) -> Result<Vec<String>, Error> {
            Ok(Vec::new())
        }

        async fn search(&self, query: &str) -> Result<SearchResponseDto, Error> {
            self.search_calls.lock().unwrap().push(query.to_string());
            Ok(SearchResponseDto {
                total: 1,
                result: vec![sample_dto()],
            })
        }
    }

    fn spy_use_case() -> (SearchJokes, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let api = SpyApi {
            search_calls: Arc::clone(&calls),
        };
        let repository = Arc::new(JokeRepository::new(Box::new(api)));
        (SearchJokes::new(repository), calls)
    }

    #[tokio::test]
    async fn two_char_query_is_rejected_without_transport_call() {
        let (search, calls) = spy_use_case();
        let err = search.execute("ab").await.unwrap_err();
        assert!(matches!(err, Error::QueryTooShort { len: 2, .. }));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_query_is_rejected_without_transport_call() {
        let (search, calls) = spy_use_case();
        let err = search.execute("").await.unwrap_err();
        assert!(matches!(err, Error::QueryTooShort { len: 0, .. }));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn three_char_query_reaches_transport_exactly_once() {
        let (search, calls) = spy_use_case();
        search.execute("dev").await.unwrap();
        assert_eq!(*calls.lock().unwrap(), vec!["dev".to_string()]);
    }

    #[tokio::test]
    async fn query_length_counts_characters_not_bytes() {
        // Three characters, nine bytes.
        let (search, calls) = spy_use_case();
        search.execute("ノリス").await.unwrap();
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn category_is_passed_through_unvalidated() {
        let repository = Arc::new(JokeRepository::new(Box::new(SpyApi {
            search_calls: Arc::new(Mutex::new(Vec::new())),
        })));
        let by_category = GetRandomJokeByCategory::new(repository);
        // Empty category is upstream's problem, not ours.
        assert!(by_category.execute("").await.is_ok());
    }
}
