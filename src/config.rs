//! # Bot Configuration
//!
//! Identifier prefixes the entry point and dispatcher match inbound events
//! against. Defaults suit the stock deployment; `from_env` lets a host
//! override them per environment.

use crate::constants::defaults;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Events whose bot name does not start with this prefix are rejected
    pub bot_name_prefix: String,
    /// Intent names starting with this prefix route to the order handler
    pub order_intent_prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_name_prefix: defaults::BOT_NAME_PREFIX.to_string(),
            order_intent_prefix: defaults::ORDER_INTENT_PREFIX.to_string(),
        }
    }
}

impl BotConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(prefix) = std::env::var("BREWBOT_BOT_NAME_PREFIX") {
            config.bot_name_prefix = prefix;
        }

        if let Ok(prefix) = std::env::var("BREWBOT_ORDER_INTENT_PREFIX") {
            config.order_intent_prefix = prefix;
        }

        config
    }
}
