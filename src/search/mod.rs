//! Debounced search over the public contract listing.
//!
//! [`ContractSearch`] owns the current [`FilterSet`] and a shared
//! [`FetchState`], and keeps the two in sync through a background pipeline:
//! every filter change is debounced, deduplicated against the last value
//! acted upon, and resolved into at most one live fetch. Consumers read
//! snapshots and subscribe for change notifications; they never see the
//! pipeline itself.

mod pipeline;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::filters::{FilterPatch, FilterSet};
use crate::gateway::ContractGateway;
use crate::types::ContractPage;

use pipeline::{Pipeline, PipelineEvent};

/// Tunables for the fetch pipeline.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Quiet window between the last filter change and the fetch it
    /// settles into.
    pub debounce: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
        }
    }
}

/// Loading/error/data snapshot of the most recent fetch.
///
/// After a completed fetch exactly one of `data` and `error` is present.
/// While `loading` is set the previous `data` is retained so a consumer
/// can keep stale rows on screen during a refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<ContractPage>,
}

/// Owns filter state for browsing public contracts and exposes the fetch
/// lifecycle as observable snapshots.
pub struct ContractSearch {
    filters: Mutex<FilterSet>,
    shared: Arc<Shared>,
    events: Sender<PipelineEvent>,
    worker: Option<JoinHandle<()>>,
}

impl ContractSearch {
    /// Spawn the pipeline. The initial filter value is itself a pipeline
    /// event, so a coordinator left alone fetches the first default page
    /// once the debounce window elapses.
    pub fn new(gateway: Arc<dyn ContractGateway>, options: SearchOptions) -> Self {
        let shared = Arc::new(Shared::new());
        let (events_tx, events_rx) = mpsc::channel();
        let pipeline = Pipeline::new(
            gateway,
            Arc::clone(&shared),
            events_rx,
            events_tx.clone(),
            options.debounce,
        );
        let worker = thread::spawn(move || pipeline.run());

        let filters = FilterSet::default();
        let _ = events_tx.send(PipelineEvent::Filters(filters.clone()));

        Self {
            filters: Mutex::new(filters),
            shared,
            events: events_tx,
            worker: Some(worker),
        }
    }

    /// Merge `patch` into the current filters and signal the pipeline.
    ///
    /// Never fetches synchronously; failures surface later through
    /// [`FetchState::error`]. A patch that produces no net change is
    /// dropped by the pipeline after the debounce window.
    pub fn update_filters(&self, patch: FilterPatch) {
        let next = {
            let mut filters = lock(&self.filters);
            filters.apply(patch);
            filters.clone()
        };
        let _ = self.events.send(PipelineEvent::Filters(next));
    }

    /// Replace the filters wholesale, typically with state parsed from a
    /// pasted link. Meant to run once before any [`update_filters`] call;
    /// the seed and the construction-time event settle into a single
    /// fetch.
    ///
    /// [`update_filters`]: ContractSearch::update_filters
    pub fn set_initial_filters(&self, initial: FilterSet) {
        let mut initial = initial;
        initial.normalize();
        {
            let mut filters = lock(&self.filters);
            *filters = initial.clone();
        }
        let _ = self.events.send(PipelineEvent::Filters(initial));
    }

    /// Snapshot of the current filter value.
    pub fn filters(&self) -> FilterSet {
        lock(&self.filters).clone()
    }

    /// Snapshot of the current fetch state.
    pub fn state(&self) -> FetchState {
        self.shared.snapshot()
    }

    /// Register for change notifications. Every state transition delivers
    /// a fresh [`FetchState`] snapshot; a receiver that goes away is
    /// pruned on the next notification.
    pub fn subscribe(&self) -> Receiver<FetchState> {
        let (tx, rx) = mpsc::channel();
        lock(&self.shared.subscribers).push(tx);
        rx
    }
}

impl Drop for ContractSearch {
    fn drop(&mut self) {
        let _ = self.events.send(PipelineEvent::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// State cell shared between the coordinator handle, the pipeline thread
/// and its request threads.
pub(crate) struct Shared {
    state: Mutex<FetchState>,
    subscribers: Mutex<Vec<Sender<FetchState>>>,
    latest_ticket: AtomicU64,
}

impl Shared {
    fn new() -> Self {
        Self {
            state: Mutex::new(FetchState::default()),
            subscribers: Mutex::new(Vec::new()),
            latest_ticket: AtomicU64::new(0),
        }
    }

    /// Apply `edit` under the lock and fan the resulting snapshot out to
    /// subscribers.
    pub(crate) fn mutate(&self, edit: impl FnOnce(&mut FetchState)) {
        let snapshot = {
            let mut state = lock(&self.state);
            edit(&mut state);
            state.clone()
        };
        let mut subscribers = lock(&self.subscribers);
        subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    pub(crate) fn snapshot(&self) -> FetchState {
        lock(&self.state).clone()
    }

    pub(crate) fn next_ticket(&self) -> u64 {
        self.latest_ticket.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub(crate) fn is_latest(&self, ticket: u64) -> bool {
        self.latest_ticket.load(Ordering::Acquire) == ticket
    }
}

/// Lock a mutex, recovering the inner data if a panicking thread poisoned
/// it. The pipeline only stores plain values behind its locks, so the data
/// is always safe to reuse.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayError;

    struct NeverGateway;

    impl ContractGateway for NeverGateway {
        fn fetch(&self, _filters: &FilterSet) -> Result<ContractPage, GatewayError> {
            Err(GatewayError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            })
        }
    }

    fn search() -> ContractSearch {
        // A day-long debounce keeps the pipeline from fetching while these
        // tests poke at the synchronous surface.
        ContractSearch::new(
            Arc::new(NeverGateway),
            SearchOptions {
                debounce: Duration::from_secs(86_400),
            },
        )
    }

    #[test]
    fn initial_state_is_idle() {
        let search = search();
        let state = search.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.data.is_none());
        assert_eq!(search.filters(), FilterSet::default());
    }

    #[test]
    fn update_filters_merges_synchronously() {
        let search = search();
        search.update_filters(FilterPatch::new().search("jita").page(4));
        search.update_filters(FilterPatch::new().page(2));

        let filters = search.filters();
        assert_eq!(filters.search.as_deref(), Some("jita"));
        assert_eq!(filters.page, 2);
    }

    #[test]
    fn set_initial_filters_replaces_wholesale() {
        let search = search();
        search.update_filters(FilterPatch::new().search("jita"));
        search.set_initial_filters(FilterSet {
            page: 3,
            size: 50,
            ..FilterSet::default()
        });

        let filters = search.filters();
        assert_eq!(filters.page, 3);
        assert_eq!(filters.size, 50);
        assert!(filters.search.is_none());
    }
}
