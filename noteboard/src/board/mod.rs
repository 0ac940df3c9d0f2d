//! Board commands (read-only)

mod get;
mod lock;

pub use get::GetBoard;
pub use lock::GetLockStatus;
