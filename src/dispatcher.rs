//! # Intent Dispatcher
//!
//! Routes a validated intent request to its handler by intent-name prefix.
//! Unrecognized intents are a fatal error; this bot only takes beverage
//! orders.

use tracing::info;

use crate::error::{FulfillmentError, Result};
use crate::handlers::OrderBeverageHandler;
use crate::menu::Menu;
use crate::request::IntentRequest;
use crate::response::LexResponse;

pub struct IntentDispatcher {
    order_intent_prefix: String,
    order_handler: OrderBeverageHandler,
}

impl IntentDispatcher {
    pub fn new(order_intent_prefix: impl Into<String>, menu: Menu) -> Self {
        Self {
            order_intent_prefix: order_intent_prefix.into(),
            order_handler: OrderBeverageHandler::new(menu),
        }
    }

    pub fn dispatch(&self, request: &IntentRequest) -> Result<LexResponse> {
        let intent_name = request.current_intent.name.as_str();
        info!(
            user_id = %request.user_id,
            intent = %intent_name,
            "dispatching intent"
        );

        if intent_name.starts_with(&self.order_intent_prefix) {
            return Ok(self.order_handler.handle(request));
        }

        Err(FulfillmentError::unsupported_intent(intent_name))
    }
}
