//! Repository: wire records in, domain records out.

use crate::api::JokeApi;
use crate::error::Error;
use crate::types::Joke;

/// Converts transport outcomes into domain values.
///
/// Each method delegates to the transport adapter and applies the
/// DTO-to-domain mapping. Errors pass through untouched, with their
/// original cause intact.
pub struct JokeRepository {
    api: Box<dyn JokeApi>,
}

impl JokeRepository {
    pub fn new(api: Box<dyn JokeApi>) -> Self {
        Self { api }
    }

    pub async fn random_joke(&self) -> Result<Joke, Error> {
        Ok(self.api.random_joke().await?.into())
    }

    pub async fn random_joke_by_category(&self, category: &str) -> Result<Joke, Error> {
        Ok(self.api.random_joke_by_category(category).await?.into())
    }

    pub async fn categories(&self) -> Result<Vec<String>, Error> {
        self.api.categories().await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Joke>, Error> {
        Ok(self.api.search(query).await?.into_jokes())
    }
}
