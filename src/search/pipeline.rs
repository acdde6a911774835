use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::filters::FilterSet;
use crate::gateway::{ContractGateway, GatewayError};
use crate::types::ContractPage;

use super::Shared;

/// Input events for the pipeline worker.
pub(super) enum PipelineEvent {
    /// The filter value changed; debounce and maybe fetch.
    Filters(FilterSet),
    /// A request thread finished.
    Response {
        ticket: u64,
        outcome: Result<ContractPage, GatewayError>,
    },
    Shutdown,
}

/// The debounce/fetch state machine, run on a dedicated thread.
///
/// Filter changes open (or extend) a quiet window. When it elapses the
/// settled value is fetched unless it equals the last value acted upon.
/// Each fetch takes a fresh ticket from the shared counter, and only a
/// response presenting the latest ticket may touch the shared state, so a
/// superseded response can never clobber a newer one regardless of
/// arrival order. Failures are recorded and logged; the loop itself never
/// exits on them.
pub(super) struct Pipeline {
    gateway: Arc<dyn ContractGateway>,
    shared: Arc<Shared>,
    events: Receiver<PipelineEvent>,
    responses: Sender<PipelineEvent>,
    debounce: Duration,
    pending: Option<FilterSet>,
    deadline: Option<Instant>,
    last_issued: Option<FilterSet>,
}

impl Pipeline {
    pub(super) fn new(
        gateway: Arc<dyn ContractGateway>,
        shared: Arc<Shared>,
        events: Receiver<PipelineEvent>,
        responses: Sender<PipelineEvent>,
        debounce: Duration,
    ) -> Self {
        Self {
            gateway,
            shared,
            events,
            responses,
            debounce,
            pending: None,
            deadline: None,
            last_issued: None,
        }
    }

    pub(super) fn run(mut self) {
        loop {
            let event = if let Some(deadline) = self.deadline {
                let now = Instant::now();
                if deadline <= now {
                    self.settle();
                    continue;
                }
                match self.events.recv_timeout(deadline - now) {
                    Ok(event) => event,
                    Err(RecvTimeoutError::Timeout) => {
                        self.settle();
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            } else {
                match self.events.recv() {
                    Ok(event) => event,
                    Err(_) => return,
                }
            };

            match event {
                PipelineEvent::Filters(filters) => {
                    self.pending = Some(filters);
                    self.deadline = Some(Instant::now() + self.debounce);
                }
                PipelineEvent::Response { ticket, outcome } => {
                    self.apply_response(ticket, outcome);
                }
                PipelineEvent::Shutdown => return,
            }
        }
    }

    fn settle(&mut self) {
        self.deadline = None;
        let Some(filters) = self.pending.take() else {
            return;
        };
        if self.last_issued.as_ref() == Some(&filters) {
            log::debug!("filters settled unchanged; skipping fetch");
            return;
        }
        self.issue(filters);
    }

    fn issue(&mut self, filters: FilterSet) {
        let ticket = self.shared.next_ticket();
        self.last_issued = Some(filters.clone());
        // Keep whatever is on screen while the refresh is in flight.
        self.shared.mutate(|state| state.loading = true);
        log::debug!(
            "fetch #{ticket}: page={} size={} search={:?}",
            filters.page,
            filters.size,
            filters.search
        );

        let gateway = Arc::clone(&self.gateway);
        let responses = self.responses.clone();
        thread::spawn(move || {
            let outcome = gateway.fetch(&filters);
            let _ = responses.send(PipelineEvent::Response { ticket, outcome });
        });
    }

    fn apply_response(&mut self, ticket: u64, outcome: Result<ContractPage, GatewayError>) {
        if !self.shared.is_latest(ticket) {
            log::debug!("fetch #{ticket} superseded; dropping response");
            return;
        }

        match outcome {
            Ok(page) => self.shared.mutate(|state| {
                state.loading = false;
                state.error = None;
                state.data = Some(page);
            }),
            Err(err) => {
                log::warn!("fetch #{ticket} failed: {err}");
                // Let an identical re-search act as the retry path.
                self.last_issued = None;
                let message = err.to_string();
                self.shared.mutate(|state| {
                    state.loading = false;
                    state.error = Some(message);
                    state.data = None;
                });
            }
        }
    }
}
