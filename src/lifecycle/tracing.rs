//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by the
//! `RUST_LOG` environment variable. Calling it more than once is harmless, so tests and
//! the demo binary can both use it.
//!
//! ## What Gets Traced
//!
//! - **Host Lifecycle**: startup, shutdown and the number of live sessions
//! - **Session Operations**: Start, Snapshot, Dispatch and Finish, keyed by session id
//! - **Client Calls**: one span per client method via `#[instrument]`
//! - **Rejections & Checkout**: refused transitions, failed validations, dismissed payments
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show every dispatched event with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework internals
//! RUST_LOG=idealaunch_workflow::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Session host started workflow="mvp"
//! INFO Started workflow="mvp" id=mvp_1 live=1
//! INFO Applied workflow="mvp" id=mvp_1
//! INFO submit_idea: Idea accepted id=mvp_1
//! INFO purchase_preview: Payment succeeded id=mvp_1 payment_id=pay_1 tier=Interactive
//! ```
//!
//! **With `RUST_LOG=debug`** the same run also shows each payload once:
//!
//! ```text
//! DEBUG Dispatch workflow="mvp" id=mvp_1 event=SetStep(Preview)
//! ```
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the `workflow` field names the wizard
        .compact() // Compact format shows spans inline (e.g., "submit_idea:snapshot")
        .try_init();
}
