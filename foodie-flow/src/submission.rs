//! Form field model
//!
//! [`FormInput`] is the form exactly as the host read it; [`Submission`] is
//! the trimmed value bag one submit produces. A submission lives for exactly
//! one submit-to-handoff cycle and is never stored.

use serde::{Deserialize, Serialize};

/// Form fields, keyed the way the host form names them.
///
/// The order form calls the free-text box `order` and the reservation form
/// calls it `notes`; both map to [`Field::Details`] here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Phone,
    Details,
    Date,
    Time,
    Guests,
}

impl Field {
    /// Form control name for this field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Details => "details",
            Self::Date => "date",
            Self::Time => "time",
            Self::Guests => "guests",
        }
    }

    /// Element id of the error slot paired with this field (`<field>Error`)
    pub fn error_id(&self) -> String {
        format!("{}Error", self.name())
    }

    /// Label used when the field is shown to the customer
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Details => "Details",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Guests => "Guests",
        }
    }
}

/// Raw form values exactly as read from the host form.
///
/// Absent controls come through as empty strings, the same shape a form
/// submit event delivers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormInput {
    pub name: String,
    pub phone: String,
    /// Free-text box (`order` on the order form, `notes` on the reservation form)
    pub details: String,
    /// Calendar date, `YYYY-MM-DD` (reservation form only)
    pub date: String,
    /// Wall-clock time (reservation form only)
    pub time: String,
    /// Guest count (reservation form only)
    pub guests: String,
    /// Switches message framing and label wording
    pub is_reservation: bool,
}

/// One submission: the trimmed value bag the validator and composer work on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    pub details: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub is_reservation: bool,
}

impl Submission {
    /// Field reader: trim every value the host handed over.
    pub fn from_input(input: &FormInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            phone: input.phone.trim().to_string(),
            details: input.details.trim().to_string(),
            date: input.date.trim().to_string(),
            time: input.time.trim().to_string(),
            guests: input.guests.trim().to_string(),
            is_reservation: input.is_reservation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_trims_every_field() {
        let input = FormInput {
            name: "  Jo  ".to_string(),
            phone: " +1 816-908-5572\n".to_string(),
            details: "\tTwo large pizzas with extra cheese ".to_string(),
            ..Default::default()
        };

        let sub = Submission::from_input(&input);
        assert_eq!(sub.name, "Jo");
        assert_eq!(sub.phone, "+1 816-908-5572");
        assert_eq!(sub.details, "Two large pizzas with extra cheese");
        assert!(!sub.is_reservation);
    }

    #[test]
    fn test_error_ids_match_dom_contract() {
        assert_eq!(Field::Name.error_id(), "nameError");
        assert_eq!(Field::Guests.error_id(), "guestsError");
    }

    #[test]
    fn test_form_input_from_json_with_missing_controls() {
        // The order form has no date/time/guests controls at all
        let input: FormInput = serde_json::from_str(
            r#"{"name":"Jo","phone":"5551234","details":"Two large pizzas with extra cheese"}"#,
        )
        .expect("Failed to decode form payload");

        assert_eq!(input.name, "Jo");
        assert!(input.date.is_empty());
        assert!(!input.is_reservation);
    }
}
