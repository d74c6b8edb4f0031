//! Detail records: typed key-value stores and the stale-safe resolver.
//!
//! # Responsibility
//! - Load optional detail records by timeline entry id.
//! - Track the lifecycle of the current lookup and drop superseded results.
//!
//! # Invariants
//! - Not-found is a value (`Ok(None)` / `DetailState::NotFound`), never an error
//!   surfaced to the presentation layer.
//! - A completed lookup only applies when it belongs to the current request.

pub mod preview;
pub mod resolver;
pub mod shared;
pub mod sqlite_store;
pub mod store;
