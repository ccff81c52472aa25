//! Business-website configuration wizard: reducer, step gating and host factory.

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;
pub use validation::*;

use crate::clients::WebsiteClient;
use crate::framework::SessionHost;
use crate::model::WebsiteState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new website session host and its client.
pub fn new(buffer_size: usize) -> (SessionHost<WebsiteState>, WebsiteClient) {
    let session_counter = Arc::new(AtomicU64::new(1));
    let next_session_id = move || {
        let id = session_counter.fetch_add(1, Ordering::SeqCst);
        format!("website_{}", id)
    };

    let (host, generic_client) = SessionHost::new(buffer_size, next_session_id);
    let client = WebsiteClient::new(generic_client);

    (host, client)
}
