//! Detail lookup lifecycle for the currently selected entry.
//!
//! # Responsibility
//! - Track which identifier the presentation layer currently wants.
//! - Hand out tickets for lookups and apply only the current one.
//!
//! # Invariants
//! - `request(None)` settles to `Idle` in the same call; no ticket is issued.
//! - Every identifier change bumps the generation and resets to `Pending`.
//! - `complete` ignores tickets whose generation or id is not current.
//! - Store errors settle to `NotFound`; they are logged, never returned.

use crate::detail::store::{DetailStore, StoreResult};
use crate::model::detail::DetailRecord;
use log::{debug, warn};

/// Observable state of the detail slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    /// No identifier: no data, not loading.
    #[default]
    Idle,
    Pending { id: String },
    Found { id: String, record: DetailRecord },
    NotFound { id: String },
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn record(&self) -> Option<&DetailRecord> {
        match self {
            Self::Found { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Identifier this state belongs to; `None` when idle.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Pending { id } | Self::Found { id, .. } | Self::NotFound { id } => Some(id.as_str()),
        }
    }
}

/// Proof of one issued lookup; required to apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    id: String,
    generation: u64,
}

impl DetailTicket {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Single-slot detail resolver.
#[derive(Debug, Default)]
pub struct DetailResolver {
    state: DetailState,
    generation: u64,
}

impl DetailResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Selects the identifier whose detail should be shown.
    ///
    /// Returns a ticket when a lookup must be started. Re-requesting the
    /// current identifier keeps the existing state and issues no ticket.
    pub fn request(&mut self, id: Option<&str>) -> Option<DetailTicket> {
        let Some(id) = id else {
            if self.state != DetailState::Idle {
                self.generation += 1;
                self.state = DetailState::Idle;
            }
            return None;
        };

        if self.state.id() == Some(id) {
            return None;
        }

        self.generation += 1;
        self.state = DetailState::Pending { id: id.to_string() };
        debug!(
            "event=detail_request module=detail status=pending id={} generation={}",
            id, self.generation
        );
        Some(DetailTicket {
            id: id.to_string(),
            generation: self.generation,
        })
    }

    /// Applies the outcome of `ticket`'s lookup.
    ///
    /// Returns `false` when the ticket was superseded and the outcome was
    /// discarded.
    pub fn complete(
        &mut self,
        ticket: DetailTicket,
        outcome: StoreResult<Option<DetailRecord>>,
    ) -> bool {
        let is_current = ticket.generation == self.generation
            && matches!(&self.state, DetailState::Pending { id } if *id == ticket.id);
        if !is_current {
            debug!(
                "event=detail_complete module=detail status=stale id={} generation={} current_generation={}",
                ticket.id, ticket.generation, self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(Some(record)) => DetailState::Found {
                id: ticket.id,
                record,
            },
            Ok(None) => DetailState::NotFound { id: ticket.id },
            Err(err) => {
                warn!(
                    "event=detail_complete module=detail status=degraded id={} error={}",
                    ticket.id, err
                );
                DetailState::NotFound { id: ticket.id }
            }
        };
        true
    }

    /// Requests `id` and completes it synchronously against `store`.
    pub fn resolve_now(&mut self, store: &dyn DetailStore, id: Option<&str>) -> &DetailState {
        if let Some(ticket) = self.request(id) {
            let outcome = store.load(ticket.id());
            self.complete(ticket, outcome);
        }
        &self.state
    }
}
