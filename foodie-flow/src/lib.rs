//! # foodie-flow
//!
//! Order/reservation submission flow for the Foodie restaurant front-of-house.
//!
//! ## Scope
//!
//! This crate handles the whole submit-to-handoff cycle:
//! - Field reading (trimming the raw form values into a [`Submission`])
//! - Per-field validation with tunable limits
//! - Message composition (fixed template, order vs reservation framing)
//! - Deep-link construction (`wa.me` URL or `sms:` URI, percent-encoded)
//! - Render instructions for the host UI (no direct UI mutation here)
//! - The timed flow itself: confirmation banner, delayed hand-off, form reset
//!
//! Presentation (HOW the instructions are applied) stays in the host:
//! - Terminal rendering → foodie-kiosk
//!
//! ## Example
//!
//! ```ignore
//! use foodie_flow::{FlowConfig, FlowController, FormInput, SubmitOutcome};
//!
//! let (controller, mut ops) = FlowController::new(FlowConfig::default());
//! let input = FormInput {
//!     name: "Jo".into(),
//!     phone: "+1 816-908-5572".into(),
//!     details: "Two large pizzas with extra cheese".into(),
//!     ..Default::default()
//! };
//! if let SubmitOutcome::Accepted(pending) = controller.submit(&input) {
//!     pending.settled().await;
//! }
//! while let Ok(op) = ops.try_recv() {
//!     println!("{op:?}");
//! }
//! ```

mod compose;
mod config;
mod deeplink;
mod error;
mod flow;
mod render;
mod submission;
mod validate;

// Re-exports
pub use compose::{GREETING, compose, guest_noun, kind_label};
pub use config::{DEFAULT_RECIPIENT, FlowConfig};
pub use deeplink::{Channel, HandoffMode, Platform};
pub use error::{FlowError, FlowResult};
pub use flow::{FlowController, PendingHandoff, SubmitOutcome};
pub use render::{FormDefaults, ORDER_PLACEHOLDER, RenderOp, error_ops};
pub use submission::{Field, FormInput, Submission};
pub use validate::{ValidationReport, ValidationRules, is_valid_phone, normalize_phone, validate};
