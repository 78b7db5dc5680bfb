//! Core library modules for hourmap.
//!
//! The pipeline runs one way:
//!
//! ```text
//! records ──▶ allocator ──▶ (aggregator) ──▶ formatter / summary ──▶ view / export
//! ```
//!
//! Every stage is a pure function of its inputs; nothing is kept between
//! calls.
//!
//! ## Usage
//!
//! ```rust
//! use hourmap::libs::allocator::Allocator;
//! use hourmap::libs::record::DurationRecord;
//! use hourmap::libs::summary::most_active;
//!
//! let records = vec![DurationRecord::new(1_741_511_700.0, 1200.0, "coding")];
//! let set = Allocator::new(chrono::Utc).allocate(&records)?;
//! assert_eq!(set[9].seconds("coding"), 1200.0);
//! assert_eq!(most_active(&set).hour, Some(9));
//! # Ok::<(), hourmap::libs::error::ActivityError>(())
//! ```

pub mod activity;
pub mod aggregator;
pub mod allocator;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod record;
pub mod summary;
pub mod view;
pub mod zone;
