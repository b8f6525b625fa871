//! Command-line argument parsing and the one-shot modes.

pub mod definition;
pub mod search;
pub mod show;
pub mod suggest;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, apply_overrides, process_args};
pub use utils::determine_log_level;
