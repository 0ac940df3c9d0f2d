//! # Noteboard Operations
//!
//! This crate provides the `Operation` and `Execute` traits used by every
//! noteboard command. Commands are structs where the fields ARE the
//! parameters - the struct is the payload the presentation layer sends.
//!
//! ## Example
//!
//! ```ignore
//! use noteboard_operations::*;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! pub struct RemoveCard {
//!     /// The card to remove
//!     pub id: CardId,
//! }
//!
//! impl Operation for RemoveCard {
//!     fn verb(&self) -> &'static str { "remove" }
//!     fn noun(&self) -> &'static str { "card" }
//!     fn description(&self) -> &'static str { "Remove a card from the board" }
//! }
//!
//! impl Execute<BoardContext, BoardError> for RemoveCard {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
//!         // returns ExecutionResult::Changed, Unchanged or Failed
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};

// Re-export for use in implementations
pub use serde_json::Value;
