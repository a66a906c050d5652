//! Command implementations for the NFL Stats CLI

pub mod player;
pub mod roster_filters;
pub mod team;
pub mod teams;

use crate::error::{NflError, Result};
use crate::API_URL_ENV_VAR;

/// Resolve the API base URL from the CLI flag, falling back to the
/// `NFL_API_URL` environment variable.
pub fn resolve_api_url(api_url: Option<String>) -> Result<String> {
    api_url
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
        .ok_or_else(|| NflError::MissingApiUrl {
            env_var: API_URL_ENV_VAR.to_string(),
        })
}
