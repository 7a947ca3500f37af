//! # dayoff
//!
//! Regional day-off calendars: which dates are non-working in a given
//! region and year, built from a nationwide calendar plus per-region
//! overrides.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the month-grid renderer used by the `dayoff` binary.
//!
//! ## Quick start
//!
//! ```rust
//! use dayoff::time::{is_day_off, Date, Month};
//!
//! let d = Date::from_ymd(2025, Month::November, 1).unwrap();
//! // A Saturday worked in exchange for the Unity Day bridge.
//! assert!(!is_day_off(d, 78));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use dayoff_core as core;

/// Dates, exception calendars and day-off resolution.
pub use dayoff_time as time;

/// Month grid rendering.
pub mod render;

pub use render::{GridCell, MonthGrid, RenderOptions};
