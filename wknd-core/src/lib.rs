//! Core types and calculations for the wknd planner.
//!
//! This crate provides the shared types used by the wknd CLI:
//! - `Event` and related types for weekend events
//! - `weekend` module for weekend enumeration and status classification
//! - `calendar` module for grouping events into a rolling month window

pub mod calendar;
pub mod error;
pub mod event;
pub mod weekend;

// Re-export the common types at crate root for convenience
pub use error::{WkndError, WkndResult};
pub use event::{Event, EventKind};
pub use weekend::{Weekend, WeekendStatus};
