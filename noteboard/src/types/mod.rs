//! Core types for the board engine

mod board;
mod card;
mod ids;

// Re-export all types
pub use board::{Board, Column};
pub use card::{Card, Item};
pub use ids::{CardId, ColumnIndex};
