//! Recipe finder application: terminal runtime, background workers and the search session.

/// Event loop and channel wiring.
mod runtime;
/// Per-query fallback scheduling.
pub mod session;
/// Terminal setup and restoration utilities.
mod terminal;
/// Search and detail workers.
pub mod workers;

pub use runtime::run;
