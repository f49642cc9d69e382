//! Submission flow controller
//!
//! Drives one submission through validate → compose → hand-off and emits
//! [`RenderOp`]s for the host to apply:
//!
//! ```text
//! Idle → Validating → Invalid: error ops, back to Idle
//!                   → Valid:   banner op → (delay) hand-off ops → Idle
//! ```
//!
//! Submissions are independent; the UI only has one form, so there is no
//! queue and no double-submit guard. The composer is only reached after a
//! clean validation report.

use chrono::Local;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, info};

use crate::compose::{compose, kind_label};
use crate::config::FlowConfig;
use crate::deeplink::Channel;
use crate::render::{FormDefaults, RenderOp, error_ops};
use crate::submission::{Field, FormInput, Submission};
use crate::validate::validate;

/// Outcome of one submit event.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; error ops were emitted, nothing was scheduled.
    Rejected,
    /// Validation passed; banner shown, hand-off timers running.
    Accepted(PendingHandoff),
}

/// The two delayed callbacks of one accepted submission.
///
/// Unlike the fire-and-forget timers this replaces, both are cancellable:
/// abort before the delay elapses and the op is never emitted.
#[derive(Debug)]
pub struct PendingHandoff {
    banner: JoinHandle<()>,
    handoff: JoinHandle<()>,
}

impl PendingHandoff {
    /// Abort both timers, e.g. when the host unmounts the form.
    pub fn cancel(&self) {
        self.banner.abort();
        self.handoff.abort();
    }

    /// Wait for both timers to fire (or to be cancelled).
    pub async fn settled(self) {
        let _ = self.banner.await;
        let _ = self.handoff.await;
    }
}

/// Event-driven controller for the order/reservation form.
pub struct FlowController {
    config: FlowConfig,
    ops: mpsc::UnboundedSender<RenderOp>,
}

impl FlowController {
    /// Create a controller and the render-op stream the host drains.
    pub fn new(config: FlowConfig) -> (Self, mpsc::UnboundedReceiver<RenderOp>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { config, ops: tx }, rx)
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Handle one submit event.
    pub fn submit(&self, input: &FormInput) -> SubmitOutcome {
        let sub = Submission::from_input(input);
        let today = Local::now().date_naive();
        let report = validate(&sub, &self.config.rules, today);

        if !report.is_valid() {
            debug!(errors = report.len(), "submission rejected");
            for op in error_ops(&report) {
                let _ = self.ops.send(op);
            }
            return SubmitOutcome::Rejected;
        }

        let message = compose(&sub);
        let url = self.config.channel.deep_link(&self.config.recipient, &message);
        let mode = self.config.platform.handoff_mode(self.config.channel);
        info!(
            kind = kind_label(sub.is_reservation),
            channel = ?self.config.channel,
            "submission accepted"
        );

        let _ = self.ops.send(RenderOp::ClearAllErrors);
        let _ = self.ops.send(RenderOp::ShowBanner {
            text: banner_text(self.config.channel),
        });

        let banner_tx = self.ops.clone();
        let banner_ms = self.config.banner_ms;
        let banner = tokio::spawn(async move {
            sleep(Duration::from_millis(banner_ms)).await;
            let _ = banner_tx.send(RenderOp::RemoveBanner);
        });

        let handoff_tx = self.ops.clone();
        let handoff_ms = self.config.handoff_delay_ms;
        let handoff = tokio::spawn(async move {
            sleep(Duration::from_millis(handoff_ms)).await;
            let _ = handoff_tx.send(RenderOp::OpenLink { url, mode });
            let _ = handoff_tx.send(RenderOp::ResetForm {
                defaults: FormDefaults::at(Local::now().naive_local()),
            });
        });

        SubmitOutcome::Accepted(PendingHandoff { banner, handoff })
    }

    /// The user started editing a field: clear its error display.
    pub fn field_edited(&self, field: Field) {
        let _ = self.ops.send(RenderOp::ClearFieldError { field });
    }
}

/// Banner wording per channel.
fn banner_text(channel: Channel) -> String {
    let app = match channel {
        Channel::WhatsApp => "WhatsApp",
        Channel::Sms => "your messages app",
    };
    format!("Redirecting to {app}... You'll be able to review before sending")
}
