//! Generic session framework for hosting wizard state machines.
//!
//! This module provides the building blocks for running any number of independent
//! wizard sessions behind a single task, with every state change expressed as a
//! pure reducer step.
//!
//! # Main Components
//!
//! - [`WorkflowEntity`] - Trait that wizard states implement to be hosted
//! - [`SessionHost`] - Generic task that owns sessions and applies events
//! - [`SessionClient`] - Type-safe handle for starting, observing and driving sessions
//! - [`FrameworkError`] - Common error types
//! - [`StepPolicy`] - Permissive or forward-only step changes
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning a host.

pub mod core;
pub mod mock;
pub mod policy;

pub use self::core::*;
pub use policy::StepPolicy;
