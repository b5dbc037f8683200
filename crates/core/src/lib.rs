//! Core search for the pairsum workspace.
//!
//! This crate defines a single search and the types around it:
//!
//! - [`pair::find`] — scans a sequence once for two distinct positions whose
//!   values add up to a target
//! - [`IndexPair`] — the positions returned on success
//! - [`pair::Error`] — the typed failure returned when no such pair exists

pub mod pair;

pub use pair::IndexPair;
