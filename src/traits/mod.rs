//! Trait seams between the API clients and the outside world.
//!
//! - [`HttpClient`] - HTTP operations (GET, POST, PATCH), implemented by
//!   the reqwest adapter in production and by a mock in tests.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
