//! NFL Stats CLI Library
//!
//! A Rust client for an NFL statistics HTTP API, providing team listings,
//! team rosters with position and name filtering, and player career, season,
//! and game log stats views.
//!
//! ## Features
//!
//! - **Teams List**: Fetch all teams and filter by name or abbreviation
//! - **Team Rosters**: Position-group and name filters that combine with AND
//! - **Player Stats**: Career, single-season, and per-game views with
//!   empty-category suppression and adaptive game log columns
//! - **Flexible Output**: Human-readable text tables or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_stats::{commands::teams::handle_teams, NflApi};
//!
//! # async fn example() -> nfl_stats::Result<()> {
//! let api = NflApi::new("http://localhost:3000/nfl")?;
//! handle_teams(&api, Some("packers".to_string()), false).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the API base URL to avoid passing it in every command:
//! ```bash
//! export NFL_API_URL=http://localhost:3000/nfl
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod nfl;
pub mod output;

// Re-export commonly used types
pub use cli::types::{PlayerId, PositionGroup, Season, StatTab, TeamId};
pub use error::{NflError, Result};
pub use nfl::NflApi;

pub const API_URL_ENV_VAR: &str = "NFL_API_URL";
