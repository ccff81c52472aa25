//! # IdeaLaunch Workflow
//!
//! > **Wizard state machines for a productized agency service.**
//!
//! Customers reach the agency through linear, multi-step wizards: submitting an MVP idea,
//! picking a preview package, or configuring a business website. This crate holds the
//! state behind those screens. Presentation code renders the current step and dispatches
//! events; everything else lives here.
//!
//! ## How a session works
//!
//! 1. A host task for each wizard kind ([`framework::SessionHost`]) owns every live session.
//!    [`lifecycle::WorkflowSystem`] spawns one host for MVP sessions and one for website
//!    sessions.
//! 2. Presentation code talks to [`clients::MvpClient`] or [`clients::WebsiteClient`]. Each
//!    named operation becomes one event from [`model`].
//! 3. The host runs the state's `guard` and then its pure `reduce`
//!    ([`framework::WorkflowEntity`]), and stores the new snapshot. A refused event changes
//!    nothing. A batch of events is applied whole or not at all.
//!
//! Field rules such as [`mvp_workflow::validate_idea`] and
//! [`website_workflow::step_requirements`] run in the clients before a step change is sent.
//! [`framework::StepPolicy`] decides whether steps may be skipped or rewound.
//!
//! Paid previews go through a [`checkout::CheckoutGateway`]. The session is checked before
//! the dialog opens, and its state changes only after a successful payment.
//!
//! Static data such as packages, niches, templates and features lives in [`catalog`].
//!
//! ```bash
//! RUST_LOG=info cargo run   # demo of both wizards
//! cargo test
//! ```

pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod mvp_workflow;
pub mod website_workflow;
