//! Bounded FIFO intake for emission requests.
//!
//! [`Dispatcher`] wraps the sending half of a bounded MPSC channel. A single
//! long-lived consumer task drains the channel in submission order and starts
//! one detached emission task per request, so request submission stays fast
//! while emission runs for as long as each request asked for.
//!
//! Bounding the queue converts sustained overload into backpressure on
//! submitters instead of unbounded memory growth: [`Dispatcher::submit`]
//! suspends while the queue is full.

use crate::server::dispatch::emitter::emission_loop;
use logsynth_core::{EmissionRequest, Error, PayloadSource, Result};
use tokio::sync::mpsc;

/// Handle for submitting emission requests to the background consumer.
///
/// Cloneable; all clones feed the same queue. Constructed once at process
/// startup and handed to the HTTP state.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::Sender<EmissionRequest>,
}

impl Dispatcher {
    /// Wraps the sending half of an existing request queue.
    ///
    /// Used directly by tests that want to observe the receiving half; the
    /// binary goes through [`Dispatcher::spawn`].
    pub const fn new(tx: mpsc::Sender<EmissionRequest>) -> Self {
        Self { tx }
    }

    /// Creates the bounded request queue and spawns the consumer task.
    ///
    /// The consumer runs for the life of the process: it exits only when
    /// every [`Dispatcher`] handle has been dropped.
    ///
    /// # Panics
    ///
    /// Panics if `queue_capacity` is zero (enforced earlier by config
    /// validation).
    pub fn spawn(queue_capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(queue_capacity);
        tokio::spawn(consume(rx));
        Self::new(tx)
    }

    /// Enqueues a request for the consumer.
    ///
    /// Suspends while the queue is full: a slow consumer is visible to
    /// submitters as latency, never as a drop or an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Channel`] if the consumer task is gone, which does
    /// not happen in normal operation.
    pub async fn submit(&self, request: EmissionRequest) -> Result<()> {
        self.tx.send(request).await.map_err(|_| Error::Channel {
            context: "emission consumer is gone".to_string(),
        })
    }
}

/// Drains the queue in FIFO order, starting one detached emission task per
/// request.
///
/// Tasks are fire-and-forget: each is deadline-bounded and stops on its own,
/// so no handle is kept for cancellation or join. The consumer never awaits a
/// task; requests start in submission order but run concurrently.
async fn consume(mut rx: mpsc::Receiver<EmissionRequest>) {
    let source = PayloadSource::new();
    while let Some(request) = rx.recv().await {
        tracing::debug!(
            rate = request.rate(),
            lifetime = ?request.lifetime(),
            "starting emission task"
        );
        tokio::spawn(emission_loop(request, source));
    }
    tracing::debug!("emission consumer stopped");
}
