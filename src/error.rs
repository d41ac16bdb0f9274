//! # Fulfillment Error Types
//!
//! Structured error handling for the fulfillment core using thiserror.
//! Every failure is surfaced immediately to the hosting platform, which
//! owns retry policy; nothing here retries.

use thiserror::Error;

/// Errors surfaced to the hosting dialog platform.
///
/// Missing or malformed slot values are deliberately not represented here:
/// they drive the validation state machine's re-prompt behavior instead of
/// failing the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FulfillmentError {
    #[error("Intent with name {intent_name} not supported")]
    UnsupportedIntent { intent_name: String },

    #[error("Invalid bot name: {bot_name} does not start with {expected_prefix}")]
    BotMismatch {
        bot_name: String,
        expected_prefix: String,
    },

    #[error("Invalid intent request: {message}")]
    InvalidRequest { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl FulfillmentError {
    /// Create an unsupported intent error
    pub fn unsupported_intent(intent_name: impl Into<String>) -> Self {
        Self::UnsupportedIntent {
            intent_name: intent_name.into(),
        }
    }

    /// Create a bot name mismatch error
    pub fn bot_mismatch(bot_name: impl Into<String>, expected_prefix: impl Into<String>) -> Self {
        Self::BotMismatch {
            bot_name: bot_name.into(),
            expected_prefix: expected_prefix.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FulfillmentError>;
