//! # Hourmap - hour-of-day activity breakdown
//!
//! Turns timestamped activity durations (as logged by a time-tracking
//! service) into per-hour, per-category breakdowns, merges them across team
//! members and summarizes the result.
//!
//! ## Features
//!
//! - **Allocation**: Splits each record across the hours it actually spans
//! - **Aggregation**: Sums the breakdowns of several people
//! - **Summaries**: Unit conversion, category totals, most active category and hour
//! - **Reporting**: Terminal tables, JSON and CSV export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hourmap::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;

#[doc(hidden)]
pub mod __private {
    pub use anyhow;
    pub use tracing;
}
