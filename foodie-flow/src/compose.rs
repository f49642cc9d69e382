//! Message composition
//!
//! Renders the fixed message template for one validated submission. The text
//! produced here is plain; percent-encoding for URL embedding happens in the
//! deep-link builder so any customer text survives an encode/decode
//! round-trip.

use crate::submission::Submission;
use crate::validate::normalize_phone;

/// Greeting line opening every message.
pub const GREETING: &str = "Hello Foodie Restaurant!";

/// Framing label for the message type, mirrored in the closing phrase.
pub fn kind_label(is_reservation: bool) -> &'static str {
    if is_reservation {
        "Table Reservation"
    } else {
        "Food Order"
    }
}

/// "person" for exactly one guest, "people" for any other count.
pub fn guest_noun(guests: &str) -> &'static str {
    if guests == "1" { "person" } else { "people" }
}

/// Render the message text for a validated submission.
///
/// The phone section carries the normalized (digit-only) value, not the raw
/// input.
pub fn compose(sub: &Submission) -> String {
    let header = format!(
        "{GREETING}\n\n*{}*\n\n*Name:* {}\n*Phone:* {}",
        kind_label(sub.is_reservation),
        sub.name,
        normalize_phone(&sub.phone),
    );

    if sub.is_reservation {
        format!(
            "{header}\n*Date:* {}\n*Time:* {}\n*Guests:* {} {}\n*Details:* {}\n\nPlease confirm my reservation.",
            sub.date,
            sub.time,
            sub.guests,
            guest_noun(&sub.guests),
            sub.details,
        )
    } else {
        format!(
            "{header}\n*Order Details:* {}\n\nPlease confirm my order.",
            sub.details,
        )
    }
}
