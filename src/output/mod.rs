//! Display shaping: label/value formatting, stat cards, game log columns,
//! and text tables.

pub mod format;
pub mod game_log;
pub mod stat_cards;
pub mod table;

pub use game_log::GameLogColumns;
pub use stat_cards::{build_cards, StatCard};
pub use table::TextTable;
