//! Item commands

mod update;

pub use update::UpdateItem;
