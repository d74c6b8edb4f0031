//! In-memory query layer over loaded collections.
//!
//! # Responsibility
//! - Sort, filter and count immutable snapshots for the presentation layer.
//! - Keep every query synchronous and infallible.
//!
//! # Invariants
//! - Date ordering is newest first by string comparison, stable on ties.
//! - Counts are computed over unfiltered snapshots.
//! - Empty input is a valid steady state and yields empty results.

pub mod gallery;
pub mod projects;
pub mod timeline;
pub mod writings;
