//! # Core Session Framework
//!
//! This module defines the generic building blocks that host wizard sessions.
//!
//! ## Key Types
//!
//! - [`WorkflowEntity`]: The trait every wizard state must implement.
//! - [`SessionHost`]: The generic task that owns all live sessions of one wizard kind.
//! - [`SessionClient`]: The generic client for talking to a host.
//! - [`FrameworkError`]: Common errors (e.g., HostClosed, NotFound, Rejected).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Reducer + Guard + Hooks)
// =============================================================================

/// Trait that any wizard state must implement to be hosted by [`SessionHost`].
///
/// # Architecture Note
/// The state itself is a plain value. Every change goes through [`WorkflowEntity::reduce`],
/// a pure `(state, event) -> state` function. The host owns the current snapshot and swaps
/// it for the reduced one, so no caller ever mutates a session in place.
///
/// Associated types keep each wizard honest: an MVP session only accepts `MvpEvent`s and a
/// website session only accepts `WebsiteEvent`s.
///
/// # Provided Methods (Hooks)
/// - [`WorkflowEntity::guard`] runs before an event is applied and may reject it.
/// - [`WorkflowEntity::on_finish`] runs right before the session is discarded.
///
/// Both default to accepting everything.
#[async_trait]
pub trait WorkflowEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for a session (e.g., `"mvp_1"`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to start a new session.
    type StartParams: Send + Sync + Debug;

    /// Tagged transition events accepted by this wizard.
    type Event: Send + Sync + Debug;

    /// The runtime context (e.g., transition policy) injected into the host.
    type Context: Send + Sync;

    /// Short label used in log lines.
    const KIND: &'static str;

    /// Build the initial state for a new session.
    fn start(id: Self::Id, params: Self::StartParams) -> Result<Self, String>;

    /// Compute the next state. Must be total and free of side effects.
    fn reduce(&self, event: Self::Event) -> Self;

    /// Inspect an event before it is applied.
    fn guard(&self, _event: &Self::Event, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called immediately before the session is discarded.
    async fn on_finish(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the session framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Session host closed")]
    HostClosed,
    #[error("Session host dropped response channel")]
    HostDropped,
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Event rejected: {0}")]
    Rejected(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by hosts.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a host.
///
/// The variants mirror a wizard's lifetime: a session is started with fixed defaults,
/// observed through snapshots, changed only by dispatched events, and finished when the
/// user leaves the flow.
#[derive(Debug)]
pub enum SessionRequest<T: WorkflowEntity> {
    Start {
        params: T::StartParams,
        respond_to: Response<T::Id>,
    },
    Snapshot {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Dispatch {
        id: T::Id,
        event: T::Event,
        respond_to: Response<T>,
    },
    /// Applies all events or none. With `dry_run` set the result is returned but not stored.
    DispatchBatch {
        id: T::Id,
        events: Vec<T::Event>,
        dry_run: bool,
        respond_to: Response<T>,
    },
    Finish {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC SESSION HOST
// =============================================================================

/// The generic task that owns every live session of one wizard kind.
///
/// **Concurrency Model**:
/// Requests are processed one at a time inside a single Tokio task, so each dispatched
/// event synchronously produces the next snapshot. The `sessions` map needs no lock.
pub struct SessionHost<T: WorkflowEntity> {
    receiver: mpsc::Receiver<SessionRequest<T>>,
    sessions: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: WorkflowEntity> SessionHost<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, SessionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let host = Self {
            receiver,
            sessions: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = SessionClient::new(sender);
        (host, client)
    }

    /// Runs the host's event loop until every client has been dropped.
    ///
    /// The `context` is handed to [`WorkflowEntity::guard`] and
    /// [`WorkflowEntity::on_finish`] for every session.
    pub async fn run(mut self, context: T::Context) {
        let workflow = T::KIND;
        info!(workflow, "Session host started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Start { params, respond_to } => {
                    debug!(workflow, ?params, "Start");
                    let id = (self.next_id_fn)();
                    match T::start(id.clone(), params) {
                        Ok(state) => {
                            self.sessions.insert(id.clone(), state);
                            info!(workflow, %id, live = self.sessions.len(), "Started");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(workflow, error = %e, "Start failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                SessionRequest::Snapshot { id, respond_to } => {
                    let state = self.sessions.get(&id).cloned();
                    debug!(workflow, %id, found = state.is_some(), "Snapshot");
                    let _ = respond_to.send(Ok(state));
                }
                SessionRequest::Dispatch { id, event, respond_to } => {
                    debug!(workflow, %id, ?event, "Dispatch");
                    let Some(current) = self.sessions.get_mut(&id) else {
                        warn!(workflow, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = current.guard(&event, &context) {
                        warn!(workflow, %id, error = %e, "Event rejected");
                        let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        continue;
                    }
                    *current = current.reduce(event);
                    info!(workflow, %id, "Applied");
                    let _ = respond_to.send(Ok(current.clone()));
                }
                SessionRequest::DispatchBatch { id, events, dry_run, respond_to } => {
                    debug!(workflow, %id, count = events.len(), dry_run, "Dispatch batch");
                    let Some(current) = self.sessions.get_mut(&id) else {
                        warn!(workflow, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    match fold_events(current, events, &context) {
                        Ok(next) => {
                            if !dry_run {
                                *current = next.clone();
                                info!(workflow, %id, "Applied batch");
                            }
                            let _ = respond_to.send(Ok(next));
                        }
                        Err(e) => {
                            warn!(workflow, %id, error = %e, dry_run, "Batch rejected");
                            let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        }
                    }
                }
                SessionRequest::Finish { id, respond_to } => {
                    debug!(workflow, %id, "Finish");
                    let Some(state) = self.sessions.get(&id) else {
                        warn!(workflow, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = state.on_finish(&context).await {
                        warn!(workflow, %id, error = %e, "on_finish failed");
                        let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        continue;
                    }
                    self.sessions.remove(&id);
                    info!(workflow, %id, live = self.sessions.len(), "Finished");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(workflow, live = self.sessions.len(), "Shutdown");
    }
}

/// Guards and reduces each event against the state produced by the previous one.
fn fold_events<T: WorkflowEntity>(state: &T, events: Vec<T::Event>, context: &T::Context) -> Result<T, String> {
    events.into_iter().try_fold(state.clone(), |acc, event| {
        acc.guard(&event, context)?;
        Ok(acc.reduce(event))
    })
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`SessionHost`].
pub struct SessionClient<T: WorkflowEntity> {
    sender: mpsc::Sender<SessionRequest<T>>,
}

// Derived Clone would require `T: Clone` on the request type, not just the sender.
impl<T: WorkflowEntity> Clone for SessionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: WorkflowEntity> SessionClient<T> {
    pub fn new(sender: mpsc::Sender<SessionRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn start(&self, params: T::StartParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Start { params, respond_to })
            .await
            .map_err(|_| FrameworkError::HostClosed)?;
        response.await.map_err(|_| FrameworkError::HostDropped)?
    }

    pub async fn snapshot(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { id, respond_to })
            .await
            .map_err(|_| FrameworkError::HostClosed)?;
        response.await.map_err(|_| FrameworkError::HostDropped)?
    }

    pub async fn dispatch(&self, id: T::Id, event: T::Event) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Dispatch { id, event, respond_to })
            .await
            .map_err(|_| FrameworkError::HostClosed)?;
        response.await.map_err(|_| FrameworkError::HostDropped)?
    }

    /// Dispatches events as one unit: either every event is applied, or none is.
    pub async fn dispatch_all(&self, id: T::Id, events: Vec<T::Event>) -> Result<T, FrameworkError> {
        self.batch(id, events, false).await
    }

    /// Runs the same guards as [`dispatch_all`](Self::dispatch_all) and returns the state the
    /// batch would produce, without storing it.
    pub async fn check_all(&self, id: T::Id, events: Vec<T::Event>) -> Result<T, FrameworkError> {
        self.batch(id, events, true).await
    }

    async fn batch(&self, id: T::Id, events: Vec<T::Event>, dry_run: bool) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::DispatchBatch {
                id,
                events,
                dry_run,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::HostClosed)?;
        response.await.map_err(|_| FrameworkError::HostDropped)?
    }

    pub async fn finish(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Finish { id, respond_to })
            .await
            .map_err(|_| FrameworkError::HostClosed)?;
        response.await.map_err(|_| FrameworkError::HostDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
