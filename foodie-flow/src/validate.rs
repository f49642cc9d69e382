//! Per-field validation rules
//!
//! Every field is checked unconditionally and the failures merged into one
//! report, so evaluation order never affects the result. Reservation-only
//! fields (date, time, guests) are checked only when the reservation form
//! variant is active.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::submission::{Field, Submission};

/// Tunable validation limits.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRules {
    /// Minimum name length in characters
    pub min_name_len: usize,
    /// Minimum order/notes length in characters (UX heuristic, host-tunable)
    pub min_details_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_name_len: 2,
            min_details_len: 10,
        }
    }
}

/// Validation outcome: failed fields with their messages.
///
/// An empty report means the submission is valid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message recorded for `field`, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Strip everything but ASCII digits from a raw phone value.
///
/// Idempotent: a digit-only string comes back unchanged.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Pattern for a normalized phone: first digit 1-9, digits only, at most 16
/// digits total (a leading `+` is consumed by normalization).
pub fn is_valid_phone(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some('1'..='9') => {}
        _ => return false,
    }
    digits.len() <= 16 && chars.all(|c| c.is_ascii_digit())
}

/// Parse a calendar date (`YYYY-MM-DD`); `None` when absent or malformed.
fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Validate one submission against the rules.
///
/// `today` is passed in by the caller so the date rule compares calendar
/// dates only; a reservation for today always passes.
pub fn validate(sub: &Submission, rules: &ValidationRules, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::default();

    if sub.name.is_empty() {
        report.add(Field::Name, "Please enter your name");
    } else if sub.name.chars().count() < rules.min_name_len {
        report.add(
            Field::Name,
            format!("Name must be at least {} characters", rules.min_name_len),
        );
    }

    if sub.phone.is_empty() {
        report.add(Field::Phone, "Please enter your phone number");
    } else if !is_valid_phone(&normalize_phone(&sub.phone)) {
        report.add(Field::Phone, "Please enter a valid phone number");
    }

    if sub.details.is_empty() {
        report.add(Field::Details, "Please enter your order details");
    } else if sub.details.chars().count() < rules.min_details_len {
        report.add(Field::Details, "Please provide more details about your order");
    }

    if sub.is_reservation {
        match parse_date(&sub.date) {
            None => report.add(Field::Date, "Please choose a date"),
            Some(date) if date < today => report.add(Field::Date, "Date cannot be in the past"),
            Some(_) => {}
        }

        if sub.time.is_empty() {
            report.add(Field::Time, "Please choose a time");
        }

        match sub.guests.parse::<u32>() {
            Ok(n) if n >= 1 => {}
            _ => report.add(Field::Guests, "Guest count must be at least 1"),
        }
    }

    report
}
