//! Panel dispatcher
//!
//! Fans a question out to every seat on a panel and collects the results.
//! Calls run concurrently (bounded by a semaphore), but each result is
//! written into the slot matching its role's panel index, never appended in
//! completion order. One role's failure never aborts or delays the others;
//! there are no retries at this layer.

use crate::ports::backend_gateway::{BackendError, BackendGateway};
use crate::ports::progress::ProgressNotifier;
use council_domain::{PanelSeat, Question, RoleResult};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default cap on in-flight backend calls per dispatch
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Executes a tier's panel against the backend gateway.
pub struct PanelDispatcher<G: BackendGateway + 'static> {
    gateway: Arc<G>,
    max_concurrency: usize,
}

impl<G: BackendGateway + 'static> PanelDispatcher<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Bound the number of in-flight backend calls. A limit of 0 is treated
    /// as 1.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit.max(1);
        self
    }

    /// Dispatch the question to every seat, returning one result per seat
    /// in panel order.
    ///
    /// The returned vector always has exactly `seats.len()` entries. A
    /// cancelled token turns still-pending calls into failed results with
    /// the cancellation detail; seats that already completed keep their
    /// results.
    pub async fn dispatch(
        &self,
        question: &Question,
        seats: &[PanelSeat],
        cancel: &CancellationToken,
        progress: &dyn ProgressNotifier,
    ) -> Vec<RoleResult> {
        info!(roles = seats.len(), "dispatching panel");

        // Disjoint result slots, indexed by panel position.
        let mut slots: Vec<Option<RoleResult>> = (0..seats.len()).map(|_| None).collect();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut join_set = JoinSet::new();

        for (index, seat) in seats.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let semaphore = Arc::clone(&semaphore);
            let cancel = cancel.clone();
            let seat = seat.clone();
            let prompt = council_domain::PromptTemplate::role_query(question.content());

            join_set.spawn(async move {
                let outcome = tokio::select! {
                    _ = cancel.cancelled() => Err(BackendError::Cancelled),
                    result = async {
                        match semaphore.acquire_owned().await {
                            Ok(_permit) => {
                                gateway
                                    .generate(
                                        &seat.backend,
                                        council_domain::PromptTemplate::role_system(&seat.role.directive),
                                        &prompt,
                                    )
                                    .await
                            }
                            // Semaphore closed only on shutdown.
                            Err(_) => Err(BackendError::Cancelled),
                        }
                    } => result,
                };
                (index, seat.role, outcome)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, role, Ok(output))) => {
                    debug!(role = %role.id, "role responded");
                    progress.on_role_complete(&role, true);
                    slots[index] = Some(RoleResult::success(role, output));
                }
                Ok((index, role, Err(error))) => {
                    warn!(role = %role.id, %error, "role failed");
                    progress.on_role_complete(&role, false);
                    slots[index] = Some(RoleResult::failure(role, error.to_string()));
                }
                Err(join_error) => {
                    warn!(%join_error, "panel task aborted");
                }
            }
        }

        // A panicked task leaves its slot empty; record it as a failure so
        // the panel-size invariant holds.
        slots
            .into_iter()
            .zip(seats)
            .map(|(slot, seat)| {
                slot.unwrap_or_else(|| {
                    RoleResult::failure(seat.role.clone(), "panel task aborted")
                })
            })
            .collect()
    }
}
