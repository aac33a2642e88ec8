//! Roster view model: one fetch per mount, applied at most once
//!
//! State Diagram:
//!
//! ```text
//!   mount ──▶ [Loading] ──Ok──▶ [Loaded]
//!                 │
//!                 └────Err───▶ [Error]
//! ```
//!
//! Both terminal states stay put for the lifetime of the mount. Unmounting
//! cancels the fetch task through a [`CancellationToken`] and drops the
//! result channel, so an outcome that settles late has nowhere to land.

use super::{FetchFuture, Roster, RosterError, RosterSource, RosterState};
use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

type Outcome = Result<Roster, RosterError>;

/// Cancellation signal shared between a mount and its fetch task
///
/// Cancelled when the owning mount signals it or goes away entirely.
#[derive(Debug, Clone)]
pub struct CancellationToken(watch::Receiver<bool>);

impl CancellationToken {
    /// Create a token and the sender that cancels it
    pub fn new() -> (watch::Sender<bool>, Self) {
        let (tx, rx) = watch::channel(false);
        (tx, Self(rx))
    }

    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow() || self.0.has_changed().is_err()
    }

    /// Resolve once the token is cancelled
    pub async fn cancelled(mut self) {
        loop {
            if *self.0.borrow_and_update() {
                return;
            }
            if self.0.changed().await.is_err() {
                // Sender dropped: the mount is gone
                return;
            }
        }
    }
}

/// Live half of a mount: everything that dies on unmount
struct Mount {
    cancel: watch::Sender<bool>,
    outcome: oneshot::Receiver<Outcome>,
    task: JoinHandle<()>,
}

/// Owns the roster fetch lifecycle and its tri-state result
pub struct RosterViewModel {
    state: RosterState,
    mount: Option<Mount>,
}

impl RosterViewModel {
    /// Mount the view model and issue the one and only roster request
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn RosterSource>) -> Self {
        let (cancel, token) = CancellationToken::new();
        let (outcome_tx, outcome_rx) = oneshot::channel();

        tracing::debug!("Roster view mounted, fetching");
        let task = tokio::spawn(run_fetch(source.fetch(), token, outcome_tx));

        Self {
            state: RosterState::Loading,
            mount: Some(Mount {
                cancel,
                outcome: outcome_rx,
                task,
            }),
        }
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Apply a settled outcome without blocking
    ///
    /// Returns true if the state changed. Call once per UI tick.
    pub fn poll(&mut self) -> bool {
        if self.state.is_settled() {
            return false;
        }
        let Some(mount) = self.mount.as_mut() else {
            return false;
        };

        let outcome = match mount.outcome.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => {
                // Task ended without reporting while still mounted (panicked)
                tracing::warn!("Roster fetch task ended without an outcome");
                Err(RosterError::Transport(None))
            }
        };

        self.apply(outcome);
        true
    }

    /// Wait for the fetch to settle and return the resulting state
    ///
    /// Returns immediately when already settled or unmounted.
    pub async fn settle(&mut self) -> &RosterState {
        if !self.state.is_settled() {
            if let Some(mount) = self.mount.as_mut() {
                let outcome = (&mut mount.outcome).await.unwrap_or_else(|_| {
                    tracing::warn!("Roster fetch task ended without an outcome");
                    Err(RosterError::Transport(None))
                });
                self.apply(outcome);
            }
        }
        &self.state
    }

    /// Tear down the mount; later outcomes are dropped on the floor
    pub fn unmount(&mut self) {
        if let Some(mount) = self.mount.take() {
            let _ = mount.cancel.send(true);
            mount.task.abort();
            tracing::debug!("Roster view unmounted");
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        match &outcome {
            Ok(roster) => tracing::info!(
                mentors = roster.mentors.len(),
                mentees = roster.mentees.len(),
                "Roster loaded"
            ),
            Err(err) => tracing::warn!("{}", err),
        }
        self.state = RosterState::from_outcome(outcome);
    }
}

impl Drop for RosterViewModel {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn run_fetch(fetch: FetchFuture, token: CancellationToken, tx: oneshot::Sender<Outcome>) {
    tokio::select! {
        // Fetch first: a fetch that is already done still checks the token
        biased;

        outcome = fetch => {
            if token.is_cancelled() {
                tracing::debug!("Roster settled after unmount, discarding");
                return;
            }
            // Receiver gone means unmounted in the meantime
            let _ = tx.send(outcome);
        }
        _ = token.clone().cancelled() => {
            tracing::debug!("Roster fetch cancelled before settling");
        }
    }
}
