//! Type-safe wrappers and enums for NFL stats data.

pub mod ids;
pub mod position;
pub mod tabs;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use position::PositionGroup;
pub use tabs::StatTab;
pub use time::Season;
