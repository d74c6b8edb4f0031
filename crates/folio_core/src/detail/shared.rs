//! Async driver for [`DetailResolver`].
//!
//! Lookups run on the tokio blocking pool so file and SQLite stores never
//! stall the event loop. The lock is never held across an await point.
//!
//! # Invariants
//! - Every state change is published on the watch channel while the lock is held.
//! - A call for the id already in flight joins that lookup; it never loads again.
//! - Results are applied by the blocking task, so dropping a caller future
//!   does not strand joined callers on a pending state.

use crate::detail::resolver::{DetailResolver, DetailState, DetailTicket};
use crate::detail::store::{DetailStore, StoreResult};
use crate::model::detail::DetailRecord;
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Cloneable handle sharing one resolver slot and one store.
#[derive(Clone)]
pub struct SharedDetailResolver {
    resolver: Arc<Mutex<DetailResolver>>,
    updates: Arc<watch::Sender<DetailState>>,
    store: Arc<dyn DetailStore>,
}

impl SharedDetailResolver {
    pub fn new(store: Arc<dyn DetailStore>) -> Self {
        let (updates, _) = watch::channel(DetailState::Idle);
        Self {
            resolver: Arc::new(Mutex::new(DetailResolver::new())),
            updates: Arc::new(updates),
            store,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DetailState {
        self.lock().state().clone()
    }

    /// Selects `id` and waits until the slot settles.
    ///
    /// Never returns a loading state. Selecting the id that is already in
    /// flight waits for that lookup instead of starting another one. When a
    /// newer request supersedes this one, the late outcome is dropped and the
    /// returned state is whatever the newest request settled to.
    pub async fn resolve(&self, id: Option<String>) -> DetailState {
        let (ticket, updates) = {
            let mut resolver = self.lock();
            let ticket = resolver.request(id.as_deref());
            self.updates.send_replace(resolver.state().clone());
            (ticket, self.updates.subscribe())
        };
        let Some(ticket) = ticket else {
            if let Some(id) = id.as_deref() {
                debug!("event=detail_load module=detail status=reused id={id}");
            }
            return Self::wait_settled(updates).await;
        };

        let task = {
            let shared = self.clone();
            let ticket = ticket.clone();
            tokio::task::spawn_blocking(move || {
                let outcome = shared.store.load(ticket.id());
                shared.settle(ticket, outcome);
            })
        };
        if let Err(err) = task.await {
            warn!(
                "event=detail_load module=detail status=error id={} error_code=join_failed error={}",
                ticket.id(),
                err
            );
            self.settle(ticket, Ok(None));
        }
        Self::wait_settled(updates).await
    }

    fn settle(&self, ticket: DetailTicket, outcome: StoreResult<Option<DetailRecord>>) {
        let mut resolver = self.lock();
        resolver.complete(ticket, outcome);
        self.updates.send_replace(resolver.state().clone());
    }

    async fn wait_settled(mut updates: watch::Receiver<DetailState>) -> DetailState {
        loop {
            let state = updates.borrow_and_update().clone();
            if !state.is_loading() {
                return state;
            }
            if updates.changed().await.is_err() {
                return state;
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, DetailResolver> {
        self.resolver.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
