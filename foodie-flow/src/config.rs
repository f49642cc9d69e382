//! Flow configuration
//!
//! Env-driven in the usual `FOODIE_*` scheme, with the deployed site's
//! hardcoded values as defaults.

use crate::deeplink::{Channel, Platform};
use crate::validate::ValidationRules;

/// Fixed recipient every submission is addressed to.
pub const DEFAULT_RECIPIENT: &str = "8169085572";

/// Confirmation banner window (ms)
const DEFAULT_BANNER_MS: u64 = 3000;

/// Delay before the deep-link opens (ms)
const DEFAULT_HANDOFF_DELAY_MS: u64 = 1500;

/// Configuration for one submission flow.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Destination phone number
    pub recipient: String,
    pub channel: Channel,
    pub platform: Platform,
    /// How long the confirmation banner stays up (ms)
    pub banner_ms: u64,
    /// How long after acceptance the hand-off fires (ms)
    pub handoff_delay_ms: u64,
    pub rules: ValidationRules,
}

impl FlowConfig {
    pub fn from_env() -> Self {
        Self {
            recipient: std::env::var("FOODIE_RECIPIENT")
                .unwrap_or_else(|_| DEFAULT_RECIPIENT.into()),
            channel: std::env::var("FOODIE_CHANNEL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            platform: std::env::var("FOODIE_PLATFORM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            banner_ms: std::env::var("FOODIE_BANNER_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BANNER_MS),
            handoff_delay_ms: std::env::var("FOODIE_HANDOFF_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HANDOFF_DELAY_MS),
            rules: ValidationRules {
                min_name_len: std::env::var("FOODIE_MIN_NAME_LEN")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| ValidationRules::default().min_name_len),
                min_details_len: std::env::var("FOODIE_MIN_DETAILS_LEN")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| ValidationRules::default().min_details_len),
            },
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.into(),
            channel: Channel::default(),
            platform: Platform::default(),
            banner_ms: DEFAULT_BANNER_MS,
            handoff_delay_ms: DEFAULT_HANDOFF_DELAY_MS,
            rules: ValidationRules::default(),
        }
    }
}
