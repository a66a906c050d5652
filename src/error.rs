//! Error types for the NFL Stats CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NflError>;

#[derive(Error, Debug)]
pub enum NflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("API URL not provided and {env_var} environment variable not set")]
    MissingApiUrl { env_var: String },

    #[error("Failed to parse numeric ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid position group: {group}")]
    InvalidPositionGroup { group: String },
}
