//! MVP idea wizard: reducer, submission checks and host factory.

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;
pub use validation::*;

use crate::clients::MvpClient;
use crate::framework::SessionHost;
use crate::model::MvpState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new MVP session host and its client.
pub fn new(buffer_size: usize) -> (SessionHost<MvpState>, MvpClient) {
    let session_counter = Arc::new(AtomicU64::new(1));
    let next_session_id = move || {
        let id = session_counter.fetch_add(1, Ordering::SeqCst);
        format!("mvp_{}", id)
    };

    let (host, generic_client) = SessionHost::new(buffer_size, next_session_id);
    let client = MvpClient::new(generic_client);

    (host, client)
}
