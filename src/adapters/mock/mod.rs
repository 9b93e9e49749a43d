//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and a
//!   recorded-request log

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
