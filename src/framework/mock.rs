//! # Mock Framework
//!
//! Utilities for testing domain clients without spawning a real [`SessionHost`](super::SessionHost).
//!
//! Use [`MockClient`] to queue expectations (`expect_start`, `expect_snapshot`,
//! `expect_dispatch`, `expect_dispatch_all`, `expect_check_all`, `expect_finish`) and hand its [`SessionClient`] to the code under test.
//! Every dispatched event is recorded so tests can assert the exact sequence a client sent.
//! For raw channel access use [`create_mock_client`] with [`expect_dispatch`].

use crate::framework::{FrameworkError, SessionClient, SessionRequest, WorkflowEntity};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: WorkflowEntity> {
    Start {
        response: Result<T::Id, FrameworkError>,
    },
    Snapshot {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Dispatch {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Batch {
        id: T::Id,
        dry_run: bool,
        response: Result<T, FrameworkError>,
    },
    Finish {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<MvpState>::new();
/// mock.expect_snapshot("mvp_1".to_string()).return_ok(Some(MvpState::default()));
/// mock.expect_dispatch("mvp_1".to_string()).return_ok(next_state);
///
/// let client = MvpClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: WorkflowEntity> {
    client: SessionClient<T>,
    expectations: Queue<T>,
    dispatched: Arc<Mutex<Vec<T::Event>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: WorkflowEntity> MockClient<T>
where
    T::Event: Clone,
{
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let dispatched_clone = dispatched.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&expectations_clone).pop_front();

                match (request, expectation) {
                    (SessionRequest::Start { respond_to, .. }, Some(Expectation::Start { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Snapshot { id, respond_to },
                        Some(Expectation::Snapshot { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "snapshot requested for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Dispatch { id, event, respond_to },
                        Some(Expectation::Dispatch { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "event dispatched to unexpected session");
                        lock(&dispatched_clone).push(event);
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::DispatchBatch { id, events, dry_run, respond_to },
                        Some(Expectation::Batch { id: expected, dry_run: expected_dry_run, response }),
                    ) => {
                        assert_eq!(id, expected, "batch dispatched to unexpected session");
                        assert_eq!(dry_run, expected_dry_run, "batch dry-run flag mismatch");
                        if !dry_run {
                            lock(&dispatched_clone).extend(events);
                        }
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Finish { id, respond_to },
                        Some(Expectation::Finish { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "finish requested for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: SessionClient::new(sender),
            expectations,
            dispatched,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SessionClient<T> {
        self.client.clone()
    }

    /// Expects a `start` operation.
    pub fn expect_start(&mut self) -> StartExpectationBuilder<T> {
        StartExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self, id: T::Id) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `dispatch` operation.
    pub fn expect_dispatch(&mut self, id: T::Id) -> DispatchExpectationBuilder<T> {
        DispatchExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `dispatch_all` operation. Its events are recorded like single dispatches.
    pub fn expect_dispatch_all(&mut self, id: T::Id) -> BatchExpectationBuilder<T> {
        BatchExpectationBuilder {
            id,
            dry_run: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `check_all` operation. Nothing is recorded.
    pub fn expect_check_all(&mut self, id: T::Id) -> BatchExpectationBuilder<T> {
        BatchExpectationBuilder {
            id,
            dry_run: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `finish` operation.
    pub fn expect_finish(&mut self, id: T::Id) -> FinishExpectationBuilder<T> {
        FinishExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Events received so far, in dispatch order.
    pub fn dispatched(&self) -> Vec<T::Event> {
        lock(&self.dispatched).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: WorkflowEntity> Default for MockClient<T>
where
    T::Event: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `start` expectations.
pub struct StartExpectationBuilder<T: WorkflowEntity> {
    expectations: Queue<T>,
}

impl<T: WorkflowEntity> StartExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        lock(&self.expectations).push_back(Expectation::Start { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Start { response: Err(error) });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: WorkflowEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: WorkflowEntity> SnapshotExpectationBuilder<T> {
    pub fn return_ok(self, state: Option<T>) {
        lock(&self.expectations).push_back(Expectation::Snapshot {
            id: self.id,
            response: Ok(state),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Snapshot {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<T: WorkflowEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: WorkflowEntity> DispatchExpectationBuilder<T> {
    /// Sets the state the mock hands back after the event.
    pub fn return_ok(self, state: T) {
        lock(&self.expectations).push_back(Expectation::Dispatch {
            id: self.id,
            response: Ok(state),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Dispatch {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `dispatch_all` and `check_all` expectations.
pub struct BatchExpectationBuilder<T: WorkflowEntity> {
    id: T::Id,
    dry_run: bool,
    expectations: Queue<T>,
}

impl<T: WorkflowEntity> BatchExpectationBuilder<T> {
    pub fn return_ok(self, state: T) {
        lock(&self.expectations).push_back(Expectation::Batch {
            id: self.id,
            dry_run: self.dry_run,
            response: Ok(state),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Batch {
            id: self.id,
            dry_run: self.dry_run,
            response: Err(error),
        });
    }
}

/// Builder for `finish` expectations.
pub struct FinishExpectationBuilder<T: WorkflowEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: WorkflowEntity> FinishExpectationBuilder<T> {
    pub fn return_ok(self) {
        lock(&self.expectations).push_back(Expectation::Finish {
            id: self.id,
            response: Ok(()),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Finish {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Useful when a test wants to hold a reply back, or inspect a request before answering.
pub fn create_mock_client<T: WorkflowEntity>(
    buffer_size: usize,
) -> (SessionClient<T>, mpsc::Receiver<SessionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request.
pub async fn expect_dispatch<T: WorkflowEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, T::Event, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Dispatch { id, event, respond_to }) => Some((id, event, respond_to)),
        _ => None,
    }
}
