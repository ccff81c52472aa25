//! Type-safe wrappers around [`SessionClient`](crate::framework::SessionClient).

pub mod mvp_client;
pub mod website_client;
pub mod workflow_client;

pub use mvp_client::*;
pub use website_client::*;
pub use workflow_client::*;
