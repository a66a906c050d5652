//! NFL stats API integration: HTTP client and response types.

pub mod http;
pub mod types;

pub use http::NflApi;
