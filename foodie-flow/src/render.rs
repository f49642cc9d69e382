//! Render instructions for the host UI
//!
//! Validation and flow results are mapped to plain data the host applies in
//! its own rendering step. The flow never touches UI state directly, so the
//! whole decision path stays unit-testable.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::deeplink::HandoffMode;
use crate::submission::Field;
use crate::validate::ValidationReport;

/// Placeholder wording for the details box on the plain order form.
pub const ORDER_PLACEHOLDER: &str = "Tell us what you'd like to order";

/// One UI effect for the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenderOp {
    /// Show `message` in the field's error slot and highlight the field
    ShowFieldError { field: Field, message: String },
    /// Clear one field's error slot and highlight
    ClearFieldError { field: Field },
    /// Clear every error slot and highlight
    ClearAllErrors,
    /// Show the transient confirmation banner
    ShowBanner { text: String },
    /// Remove the confirmation banner
    RemoveBanner,
    /// Open the deep-link
    OpenLink { url: String, mode: HandoffMode },
    /// Reset the form to its default state
    ResetForm { defaults: FormDefaults },
}

/// Default form state restored after a successful hand-off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormDefaults {
    /// Today's date
    pub date: NaiveDate,
    /// Next full hour
    pub time: NaiveTime,
    /// Reservation flag cleared
    pub is_reservation: bool,
    /// Details placeholder back to the order wording
    pub details_placeholder: &'static str,
}

impl FormDefaults {
    /// Defaults as of `now`: today's date and the next full hour.
    pub fn at(now: NaiveDateTime) -> Self {
        let next_hour = (now.hour() + 1) % 24;
        Self {
            date: now.date(),
            time: NaiveTime::from_hms_opt(next_hour, 0, 0).unwrap_or(NaiveTime::MIN),
            is_reservation: false,
            details_placeholder: ORDER_PLACEHOLDER,
        }
    }
}

/// Map a validation report to the ops that display it.
///
/// Stale messages from the previous attempt are cleared first, then one
/// show-op per failed field.
pub fn error_ops(report: &ValidationReport) -> Vec<RenderOp> {
    let mut ops = vec![RenderOp::ClearAllErrors];
    for (field, message) in report.errors() {
        ops.push(RenderOp::ShowFieldError {
            field: *field,
            message: message.clone(),
        });
    }
    ops
}
