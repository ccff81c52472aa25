//! Runtime orchestration and lifecycle management.
//!
//! - [`WorkflowSystem`] - Starts one host per wizard kind and shuts them down together
//! - [`WorkflowConfig`] - Buffer size, transition policy and checkout settings
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;
pub mod workflow_system;

pub use config::*;
pub use self::tracing::setup_tracing;
pub use workflow_system::*;
