//! Card commands

mod add;
mod edit;
mod remove;

pub use add::AddCard;
pub use edit::{EditCard, ItemPatch};
pub use remove::RemoveCard;
