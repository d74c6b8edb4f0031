//! Content use-case services.
//!
//! # Responsibility
//! - Wire loaded collections into aggregators for presentation callers.
//! - Keep callers decoupled from loader and store details.

pub mod portfolio_service;
