//! # dayoff-core
//!
//! Core type aliases and error definitions for dayoff.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: the primitive aliases used as calendar keys and the
//! error hierarchy.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year (Gregorian).
pub type Year = u16;

/// Day of the month, 1–31.
pub type DayOfMonth = u8;

/// Opaque administrative region identifier.
///
/// Any value is accepted; codes without configured overrides resolve to the
/// main calendar of the year.
pub type RegionCode = i32;

/// Count of days (used for spans and arithmetic offsets).
pub type Days = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
