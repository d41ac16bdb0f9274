//! # Event Entry Point
//!
//! Unwraps the hosting platform's raw JSON event, checks that it is
//! addressed to this bot, and hands it to the dispatcher. The platform's
//! `(error, response)` callback pair maps onto the returned `Result`.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::BotConfig;
use crate::dispatcher::IntentDispatcher;
use crate::error::{FulfillmentError, Result};
use crate::menu::Menu;
use crate::request::IntentRequest;
use crate::response::LexResponse;

pub struct EventProcessor {
    config: BotConfig,
    dispatcher: IntentDispatcher,
}

impl EventProcessor {
    pub fn new(config: BotConfig, menu: Menu) -> Self {
        let dispatcher = IntentDispatcher::new(config.order_intent_prefix.clone(), menu);
        Self { config, dispatcher }
    }

    /// Process one inbound event end to end.
    ///
    /// Events addressed to a different bot are rejected outright; no
    /// dispatch happens for them.
    pub fn process(&self, event: &Value) -> Result<LexResponse> {
        debug!(event = %event, "received event");

        let request: IntentRequest = serde_json::from_value(event.clone())
            .map_err(|e| FulfillmentError::invalid_request(e.to_string()))?;

        if !request.bot.name.starts_with(&self.config.bot_name_prefix) {
            warn!(bot_name = %request.bot.name, "event addressed to an unexpected bot");
            return Err(FulfillmentError::bot_mismatch(
                request.bot.name.as_str(),
                self.config.bot_name_prefix.as_str(),
            ));
        }

        self.dispatcher.dispatch(&request)
    }
}

impl Default for EventProcessor {
    fn default() -> Self {
        Self::new(BotConfig::default(), Menu::today())
    }
}
