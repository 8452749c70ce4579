//! Non-blocking lookup execution
//!
//! [`LookupExecutor`] runs resolutions on the async runtime so the caller's
//! interactive loop never waits on the network. Each submission gets a
//! ticket id; ids increase monotonically, so a caller that only cares about
//! the latest input can drop completions whose ticket is older than the one
//! it is waiting for.
//!
//! Submissions are not serialized: completions may arrive in any order.
//! In-flight lookups can be abandoned individually ([`LookupTicket::abort`])
//! or all at once ([`LookupExecutor::shutdown`]); an abandoned lookup never
//! invokes its callback.

use crate::config::LookupConfig;
use crate::use_cases::resolve_definition::ResolutionPipeline;
use carcino_domain::{DefinitionResult, Term};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::runtime::Handle;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A finished lookup delivered through a channel
#[derive(Debug, Clone)]
pub struct LookupCompletion {
    pub ticket: u64,
    pub result: DefinitionResult,
}

/// Handle to a submitted lookup
#[derive(Debug)]
pub struct LookupTicket {
    id: u64,
    term: Term,
    handle: JoinHandle<()>,
}

impl LookupTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Abandon the lookup; its callback will not run
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Runs [`ResolutionPipeline::resolve`] off the caller's context
pub struct LookupExecutor {
    pipeline: Arc<ResolutionPipeline>,
    runtime: Handle,
    permits: Arc<Semaphore>,
    shutdown: CancellationToken,
    next_ticket: AtomicU64,
}

impl LookupExecutor {
    /// Create an executor spawning onto `runtime`
    pub fn new(pipeline: Arc<ResolutionPipeline>, runtime: Handle, config: &LookupConfig) -> Self {
        Self {
            pipeline,
            runtime,
            permits: Arc::new(Semaphore::new(config.max_in_flight.max(1))),
            shutdown: CancellationToken::new(),
            next_ticket: AtomicU64::new(0),
        }
    }

    pub fn pipeline(&self) -> &Arc<ResolutionPipeline> {
        &self.pipeline
    }

    /// Resolve `term` in the background and hand the result to `on_complete`.
    ///
    /// `on_complete` runs on a runtime worker. Callers that need the result
    /// on their own thread should use [`submit_to`](Self::submit_to).
    pub fn submit<F>(&self, term: Term, on_complete: F) -> LookupTicket
    where
        F: FnOnce(DefinitionResult) + Send + 'static,
    {
        let id = self.next_id();
        self.spawn(id, term, on_complete)
    }

    /// Resolve `term` in the background and send the completion over `sender`.
    pub fn submit_to(
        &self,
        term: Term,
        sender: mpsc::UnboundedSender<LookupCompletion>,
    ) -> LookupTicket {
        let id = self.next_id();
        self.spawn(id, term, move |result| {
            if sender.send(LookupCompletion { ticket: id, result }).is_err() {
                debug!("Lookup #{} finished after its receiver was dropped", id);
            }
        })
    }

    /// Abandon every in-flight lookup. Later submissions are abandoned too.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    fn next_id(&self) -> u64 {
        self.next_ticket.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn spawn<F>(&self, id: u64, term: Term, on_complete: F) -> LookupTicket
    where
        F: FnOnce(DefinitionResult) + Send + 'static,
    {
        let pipeline = Arc::clone(&self.pipeline);
        let permits = Arc::clone(&self.permits);
        let shutdown = self.shutdown.clone();
        let task_term = term.clone();

        let handle = self.runtime.spawn(async move {
            let resolve = async {
                let _permit = permits.acquire_owned().await.ok();
                pipeline.resolve(&task_term).await
            };

            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("Lookup #{} for '{}' abandoned", id, task_term);
                }
                result = resolve => {
                    debug!("Lookup #{} for '{}' complete", id, task_term);
                    on_complete(result);
                }
            }
        });

        LookupTicket { id, term, handle }
    }
}
