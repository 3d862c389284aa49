//! Asynchronous client library for the Chuck Norris joke API
//! (<https://api.chucknorris.io>).
//!
//! # Overview
//! Four operations: random joke, random joke by category, list categories,
//! and free-text search. Each issues exactly one HTTP GET and returns a
//! `Result` carrying either a normalized domain value or a typed error.
//!
//! # Design
//! - `JokeApi` is the only seam that touches the network; everything above
//!   it is offline-testable against a substitute implementation.
//! - Wire records (`dto`) mirror the upstream JSON and are mapped into the
//!   stable domain `Joke` at the repository boundary.
//! - `ChuckNorrisClient` wires adapter → repository → use cases by explicit
//!   construction; the process-wide `reqwest::Client` is shared and
//!   initialized at most once.
//! - Failures keep their original cause reachable through
//!   `std::error::Error::source` — no string-only errors.

pub mod api;
pub mod client;
pub mod dto;
pub mod error;
pub mod repository;
pub mod types;
pub mod usecase;

pub use api::{HttpJokeApi, JokeApi, DEFAULT_BASE_URL};
pub use client::ChuckNorrisClient;
pub use dto::{JokeDto, SearchResponseDto};
pub use error::Error;
pub use repository::JokeRepository;
pub use types::Joke;
pub use usecase::{
    GetCategories, GetRandomJoke, GetRandomJokeByCategory, SearchJokes, MIN_QUERY_LEN,
};
