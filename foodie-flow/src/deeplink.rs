//! Deep-link construction and platform hand-off mode
//!
//! The two deployed form variants (chat redirect vs SMS redirect) collapse
//! into one [`Channel`] value; validation and composition never branch on it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::error::FlowError;

/// Messaging destination the hand-off opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    /// `wa.me` chat link
    #[default]
    WhatsApp,
    /// `sms:` URI
    Sms,
}

impl Channel {
    /// Build the deep-link carrying `message` to `recipient`.
    pub fn deep_link(&self, recipient: &str, message: &str) -> String {
        let text = encode(message);
        match self {
            Self::WhatsApp => format!("https://wa.me/{recipient}?text={text}"),
            Self::Sms => format!("sms:{recipient}?body={text}"),
        }
    }
}

impl FromStr for Channel {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whatsapp" | "wa" | "chat" => Ok(Self::WhatsApp),
            "sms" | "text" => Ok(Self::Sms),
            other => Err(FlowError::InvalidConfig(format!("Unknown channel: {other}"))),
        }
    }
}

/// Host platform family, as far as the hand-off cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Ios,
    #[default]
    Other,
}

impl Platform {
    /// How the host should navigate to the deep-link.
    ///
    /// iOS does not honor `sms:` navigation in a new browsing context, so the
    /// hand-off replaces the current location there; every other combination
    /// opens a new context.
    pub fn handoff_mode(&self, channel: Channel) -> HandoffMode {
        match (self, channel) {
            (Self::Ios, Channel::Sms) => HandoffMode::ReplaceLocation,
            _ => HandoffMode::NewContext,
        }
    }
}

impl FromStr for Platform {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" | "desktop" | "other" => Ok(Self::Other),
            other => Err(FlowError::InvalidConfig(format!("Unknown platform: {other}"))),
        }
    }
}

/// Navigation mode for opening the deep-link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandoffMode {
    /// Replace the current page location
    ReplaceLocation,
    /// Open a new browsing context
    NewContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_deep_link() {
        let url = Channel::WhatsApp.deep_link("8169085572", "Hello Foodie Restaurant!");
        assert_eq!(
            url,
            "https://wa.me/8169085572?text=Hello%20Foodie%20Restaurant%21"
        );
    }

    #[test]
    fn test_sms_deep_link() {
        let url = Channel::Sms.deep_link("8169085572", "hi there");
        assert_eq!(url, "sms:8169085572?body=hi%20there");
    }

    #[test]
    fn test_encoding_round_trips_customer_text() {
        let original = "O'Brien & Sons";
        let encoded = encode(original);
        let decoded = urlencoding::decode(&encoded).expect("Failed to decode");
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_handoff_mode_only_diverges_for_ios_sms() {
        assert_eq!(
            Platform::Ios.handoff_mode(Channel::Sms),
            HandoffMode::ReplaceLocation
        );
        assert_eq!(
            Platform::Ios.handoff_mode(Channel::WhatsApp),
            HandoffMode::NewContext
        );
        assert_eq!(
            Platform::Other.handoff_mode(Channel::Sms),
            HandoffMode::NewContext
        );
        assert_eq!(
            Platform::Other.handoff_mode(Channel::WhatsApp),
            HandoffMode::NewContext
        );
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!("whatsapp".parse::<Channel>().ok(), Some(Channel::WhatsApp));
        assert_eq!("SMS".parse::<Channel>().ok(), Some(Channel::Sms));
        assert!("carrier-pigeon".parse::<Channel>().is_err());
    }
}
