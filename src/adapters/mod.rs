//! Implementations of the `crate::traits` seams.
//!
//! [`ReqwestHttpClient`] is the production transport; the [`mock`]
//! submodule provides [`mock::MockHttpClient`], a test double with
//! configurable responses and a recorded-request log.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
