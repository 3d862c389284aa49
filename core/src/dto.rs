//! Wire records mirroring the upstream JSON schema.
//!
//! # Design
//! DTOs are defined independently from the domain `Joke` so the public
//! surface stays stable if the upstream grows fields. The optional metadata
//! (`created_at`, `updated_at`, `icon_url`) survives deserialization but is
//! dropped by the domain mapping. `categories` defaults to an empty list
//! when absent from the payload.

use serde::Deserialize;

use crate::types::Joke;

/// A single joke as returned by the upstream API.
#[derive(Debug, Clone, Deserialize)]
pub struct JokeDto {
    pub id: String,
    pub value: String,
    pub url: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// Envelope returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponseDto {
    /// Hit count as reported by the upstream. Not checked against
    /// `result.len()`; whether the two always agree is unverified upstream
    /// behavior, so a mismatch is tolerated.
    pub total: u64,
    pub result: Vec<JokeDto>,
}

impl From<JokeDto> for Joke {
    fn from(dto: JokeDto) -> Self {
        Joke {
            id: dto.id,
            value: dto.value,
            url: dto.url,
            categories: dto.categories,
        }
    }
}

impl SearchResponseDto {
    /// Map the result list to domain jokes, preserving order. `total` is
    /// upstream bookkeeping and is dropped here.
    pub fn into_jokes(self) -> Vec<Joke> {
        self.result.into_iter().map(Joke::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_maps_to_joke() {
        let dto: JokeDto = serde_json::from_str(
            r#"{
                "id": "abc",
                "value": "Chuck Norris can divide by zero.",
                "url": "https://x/abc",
                "categories": ["math"],
                "created_at": "2020-01-05 13:42:19.104863",
                "updated_at": "2020-01-05 13:42:19.104863",
                "icon_url": "https://x/icon.png"
            }"#,
        )
        .unwrap();
        let joke = Joke::from(dto);
        assert_eq!(joke.id, "abc");
        assert_eq!(joke.value, "Chuck Norris can divide by zero.");
        assert_eq!(joke.url, "https://x/abc");
        assert_eq!(joke.categories, vec!["math".to_string()]);
    }

    #[test]
    fn missing_categories_defaults_to_empty() {
        let dto: JokeDto =
            serde_json::from_str(r#"{"id":"a","value":"v","url":"https://x/a"}"#).unwrap();
        assert!(dto.categories.is_empty());
        assert!(dto.created_at.is_none());
        let joke = Joke::from(dto);
        assert!(joke.categories.is_empty());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result: Result<JokeDto, _> = serde_json::from_str(r#"{"id":"a","value":"v"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn search_mapping_preserves_order_and_length() {
        let dto: SearchResponseDto = serde_json::from_str(
            r#"{
                "total": 2,
                "result": [
                    {"id":"a","value":"first","url":"https://x/a"},
                    {"id":"b","value":"second","url":"https://x/b","categories":["dev"]}
                ]
            }"#,
        )
        .unwrap();
        let jokes = dto.into_jokes();
        assert_eq!(jokes.len(), 2);
        assert_eq!(jokes[0].id, "a");
        assert_eq!(jokes[1].id, "b");
        assert_eq!(jokes[1].categories, vec!["dev".to_string()]);
    }

    #[test]
    fn total_mismatch_is_tolerated() {
        let dto: SearchResponseDto = serde_json::from_str(
            r#"{"total": 99, "result": [{"id":"a","value":"v","url":"https://x/a"}]}"#,
        )
        .unwrap();
        assert_eq!(dto.total, 99);
        assert_eq!(dto.into_jokes().len(), 1);
    }
}
