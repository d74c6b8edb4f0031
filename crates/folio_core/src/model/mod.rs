//! Typed records for the static portfolio bundle.
//!
//! # Responsibility
//! - Define the record shapes loaded from the bundled JSON collections.
//! - Keep wire field names aligned with the bundle (`hasDetail`, `externalLink`).
//!
//! # Invariants
//! - Records are immutable once loaded; aggregators only reorder or select.
//! - `id` uniqueness is assumed within each collection, never validated.
//! - `date` fields share the `YYYY-MM` shape so that string order is
//!   chronological order.

pub mod category;
pub mod date;
pub mod detail;
pub mod gallery;
pub mod project;
pub mod timeline;
pub mod writing;
