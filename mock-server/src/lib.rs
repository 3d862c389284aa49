//! In-process stand-in for `api.chucknorris.io`, used by integration tests.
//!
//! Serves a small fixed joke corpus over the same routes and wire shapes as
//! the real API: `/jokes/random` (optional `category` filter, 404 with a
//! plain-text body when nothing matches), `/jokes/categories`, and
//! `/jokes/search?query=`. `/jokes/random` rotates through the matching
//! jokes so repeated calls vary deterministically.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    pub value: String,
    pub url: String,
    pub categories: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub icon_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total: usize,
    pub result: Vec<Joke>,
}

struct AppState {
    jokes: Vec<Joke>,
    next: AtomicUsize,
}

type SharedState = Arc<AppState>;

const ICON_URL: &str = "https://api.chucknorris.io/img/avatar/chuck-norris.png";

fn joke(id: &str, value: &str, categories: &[&str]) -> Joke {
    Joke {
        id: id.to_string(),
        value: value.to_string(),
        url: format!("https://api.chucknorris.io/jokes/{id}"),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        created_at: "2020-01-05 13:42:19.104863".to_string(),
        updated_at: "2020-01-05 13:42:19.104863".to_string(),
        icon_url: ICON_URL.to_string(),
    }
}

/// The fixed corpus served by [`app`].
pub fn sample_jokes() -> Vec<Joke> {
    vec![
        joke("abc", "Chuck Norris can divide by zero.", &["math"]),
        joke(
            "def",
            "Chuck Norris writes code that optimizes itself.",
            &["dev"],
        ),
        joke(
            "ghi",
            "When Chuck Norris throws exceptions, it's across the room.",
            &["dev"],
        ),
        joke(
            "jkl",
            "Chuck Norris knows the last digit of pi.",
            &["math", "science"],
        ),
        joke("mno", "Chuck Norris's keyboard has no escape key.", &[]),
    ]
}

pub fn app() -> Router {
    app_with_jokes(sample_jokes())
}

pub fn app_with_jokes(jokes: Vec<Joke>) -> Router {
    let state: SharedState = Arc::new(AppState {
        jokes,
        next: AtomicUsize::new(0),
    });
    Router::new()
        .route("/jokes/random", get(random_joke))
        .route("/jokes/categories", get(categories))
        .route("/jokes/search", get(search))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[derive(Deserialize)]
struct RandomParams {
    category: Option<String>,
}

async fn random_joke(
    State(state): State<SharedState>,
    Query(params): Query<RandomParams>,
) -> Result<Json<Joke>, (StatusCode, String)> {
    let pool: Vec<&Joke> = match &params.category {
        Some(category) => state
            .jokes
            .iter()
            .filter(|j| j.categories.iter().any(|c| c == category))
            .collect(),
        None => state.jokes.iter().collect(),
    };
    if pool.is_empty() {
        let category = params.category.as_deref().unwrap_or("");
        return Err((
            StatusCode::NOT_FOUND,
            format!("No jokes for category \"{category}\" found."),
        ));
    }
    let index = state.next.fetch_add(1, Ordering::Relaxed) % pool.len();
    Ok(Json(pool[index].clone()))
}

async fn categories(State(state): State<SharedState>) -> Json<Vec<String>> {
    let mut categories: Vec<String> = state
        .jokes
        .iter()
        .flat_map(|j| j.categories.iter().cloned())
        .collect();
    categories.sort();
    categories.dedup();
    Json(categories)
}

#[derive(Deserialize)]
struct SearchParams {
    query: Option<String>,
}

async fn search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let Some(query) = params.query else {
        return Err((
            StatusCode::BAD_REQUEST,
            "search.query: must not be null".to_string(),
        ));
    };
    let needle = query.to_lowercase();
    let result: Vec<Joke> = state
        .jokes
        .iter()
        .filter(|j| j.value.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    Ok(Json(SearchResponse {
        total: result.len(),
        result,
    }))
}
