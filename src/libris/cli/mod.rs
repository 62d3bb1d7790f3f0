//! Terminal-facing layer: output routing and the interactive loop.
//!
//! This is the only place that knows about stdout/stderr. Everything from
//! the command layer inward returns structured results.

pub mod print;
pub mod repl;
