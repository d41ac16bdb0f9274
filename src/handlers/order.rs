//! # Beverage Order Handler
//!
//! Dialog management and fulfillment for ordering a beverage. In dialog
//! mode the collected slots run through a sequence of validation gates,
//! each an early return that re-prompts for one slot; when every gate
//! passes, slot-filling control is delegated back to the platform. In
//! fulfillment mode the order is unconditionally confirmed.

use tracing::debug;

use crate::constants::slots;
use crate::menu::Menu;
use crate::request::{IntentRequest, InvocationSource};
use crate::response::{Button, FulfillmentState, LexResponse, Message, ResponseCard};
use crate::validation::{is_allowed_size_word, is_allowed_temperature, slot_value};

pub struct OrderBeverageHandler {
    menu: Menu,
}

impl OrderBeverageHandler {
    pub fn new(menu: Menu) -> Self {
        Self { menu }
    }

    pub fn handle(&self, request: &IntentRequest) -> LexResponse {
        match request.invocation_source {
            InvocationSource::DialogCodeHook => self.validate_order(request),
            InvocationSource::FulfillmentCodeHook => self.fulfill_order(request),
        }
    }

    /// Validate the slot values collected so far, re-prompting for the
    /// first slot that is missing or invalid.
    fn validate_order(&self, request: &IntentRequest) -> LexResponse {
        let session_attributes = request.output_session_attributes();
        let slot_map = request.current_intent.slot_map();
        let intent_name = request.current_intent.name.as_str();

        let beverage_type = slot_value(&slot_map, slots::BEVERAGE_TYPE).map(str::to_string);
        let beverage_size = slot_value(&slot_map, slots::BEVERAGE_SIZE).map(str::to_string);
        let beverage_temperature =
            slot_value(&slot_map, slots::BEVERAGE_TEMPERATURE).map(str::to_string);

        let beverage_type = match beverage_type {
            Some(value) if self.menu.contains_type(&value) => value,
            other => {
                debug!(slot = ?other, "beverage type missing or not on the menu");
                let type_names = self.menu.type_names();
                let message = Message::plain(format!(
                    "Sorry, but we can only do a {}. What kind of beverage would you like?",
                    type_names.join(" or a ")
                ));
                let card = ResponseCard::generic(
                    "Menu",
                    "Today's Menu",
                    Some(Button::from_labels(&type_names)),
                );
                return LexResponse::elicit_slot(
                    session_attributes,
                    intent_name,
                    slot_map,
                    slots::BEVERAGE_TYPE,
                    Some(message),
                    Some(card),
                );
            }
        };

        match beverage_size {
            Some(size)
                if is_allowed_size_word(&size) && self.menu.has_size(&beverage_type, &size) => {}
            Some(size) => {
                debug!(slot = %size, "size not available for the selected beverage");
                let message = Message::plain(
                    "Sorry, but we don't have this size; consider a small. What size?",
                );
                let card = ResponseCard::generic(
                    beverage_type.as_str(),
                    "available sizes",
                    Some(Button::from_labels(&self.menu.sizes_for(&beverage_type))),
                );
                return LexResponse::elicit_slot(
                    session_attributes,
                    intent_name,
                    slot_map,
                    slots::BEVERAGE_SIZE,
                    Some(message),
                    Some(card),
                );
            }
            None => {
                return LexResponse::elicit_slot(
                    session_attributes,
                    intent_name,
                    slot_map,
                    slots::BEVERAGE_SIZE,
                    None,
                    None,
                );
            }
        }

        if !beverage_temperature
            .as_deref()
            .is_some_and(is_allowed_temperature)
        {
            return LexResponse::elicit_slot(
                session_attributes,
                intent_name,
                slot_map,
                slots::BEVERAGE_TEMPERATURE,
                None,
                None,
            );
        }

        // every slot checks out; defer the next dialog step to the platform
        LexResponse::delegate(session_attributes, slot_map)
    }

    /// Final confirmation; the platform has decided the dialog is complete.
    fn fulfill_order(&self, request: &IntentRequest) -> LexResponse {
        let session_attributes = request.output_session_attributes();
        let slot_map = request.current_intent.slot_map();
        let beverage_type = slot_value(&slot_map, slots::BEVERAGE_TYPE).unwrap_or_default();

        let message = Message::plain(format!(
            "Great news! Your {beverage_type} is on its way. Thanks for your order!"
        ));
        LexResponse::close(session_attributes, FulfillmentState::Fulfilled, message, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::DialogAction;
    use serde_json::{json, Map, Value};

    fn handler() -> OrderBeverageHandler {
        OrderBeverageHandler::new(Menu::today())
    }

    fn dialog_request(slots: Value) -> IntentRequest {
        serde_json::from_value(json!({
            "bot": {"name": "BrewBot"},
            "invocationSource": "DialogCodeHook",
            "userId": "user-1",
            "sessionAttributes": {"visit": "2"},
            "currentIntent": {"name": "OrderBeverage", "slots": slots}
        }))
        .unwrap()
    }

    fn fulfillment_request(slots: Value) -> IntentRequest {
        serde_json::from_value(json!({
            "bot": {"name": "BrewBot"},
            "invocationSource": "FulfillmentCodeHook",
            "currentIntent": {"name": "OrderBeverage", "slots": slots}
        }))
        .unwrap()
    }

    fn card_button_texts(card: &ResponseCard) -> Vec<&str> {
        card.generic_attachments[0]
            .buttons
            .as_ref()
            .unwrap()
            .iter()
            .map(|button| button.text.as_str())
            .collect()
    }

    #[test]
    fn missing_type_elicits_type_with_menu_card() {
        let response = handler().handle(&dialog_request(json!({})));

        match response.dialog_action {
            DialogAction::ElicitSlot {
                slot_to_elicit,
                message,
                response_card,
                ..
            } => {
                assert_eq!(slot_to_elicit, "type");
                assert_eq!(
                    message.unwrap().content,
                    "Sorry, but we can only do a rulanda or a chai. \
                     What kind of beverage would you like?"
                );
                let card = response_card.unwrap();
                assert_eq!(card.generic_attachments[0].title, "Menu");
                assert_eq!(card.generic_attachments[0].sub_title, "Today's Menu");
                assert_eq!(card_button_texts(&card), vec!["rulanda", "chai"]);
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_elicits_type() {
        let response = handler().handle(&dialog_request(json!({"type": "latte"})));
        match response.dialog_action {
            DialogAction::ElicitSlot { slot_to_elicit, .. } => {
                assert_eq!(slot_to_elicit, "type");
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn invalid_size_elicits_size_with_type_sizes_card() {
        let response =
            handler().handle(&dialog_request(json!({"type": "chai", "size": "venti"})));

        match response.dialog_action {
            DialogAction::ElicitSlot {
                slot_to_elicit,
                message,
                response_card,
                ..
            } => {
                assert_eq!(slot_to_elicit, "size");
                assert_eq!(
                    message.unwrap().content,
                    "Sorry, but we don't have this size; consider a small. What size?"
                );
                let card = response_card.unwrap();
                assert_eq!(card.generic_attachments[0].title, "chai");
                assert_eq!(card.generic_attachments[0].sub_title, "available sizes");
                assert_eq!(card_button_texts(&card), vec!["small", "short"]);
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_size_word_elicits_size() {
        let response =
            handler().handle(&dialog_request(json!({"type": "rulanda", "size": "huge"})));
        match response.dialog_action {
            DialogAction::ElicitSlot { slot_to_elicit, .. } => {
                assert_eq!(slot_to_elicit, "size");
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn missing_size_elicits_size_without_message_or_card() {
        let response = handler().handle(&dialog_request(json!({"type": "chai"})));

        match response.dialog_action {
            DialogAction::ElicitSlot {
                slot_to_elicit,
                message,
                response_card,
                ..
            } => {
                assert_eq!(slot_to_elicit, "size");
                assert!(message.is_none());
                assert!(response_card.is_none());
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn invalid_temperature_elicits_temperature_bare() {
        for slots in [
            json!({"type": "chai", "size": "small"}),
            json!({"type": "chai", "size": "small", "temperature": "lukewarm"}),
            json!({"type": "chai", "size": "small", "temperature": "Hot"}),
        ] {
            let response = handler().handle(&dialog_request(slots));
            match response.dialog_action {
                DialogAction::ElicitSlot {
                    slot_to_elicit,
                    message,
                    response_card,
                    ..
                } => {
                    assert_eq!(slot_to_elicit, "temperature");
                    assert!(message.is_none());
                    assert!(response_card.is_none());
                }
                other => panic!("expected ElicitSlot, got {other:?}"),
            }
        }
    }

    #[test]
    fn valid_slots_delegate_with_slots_and_session_unchanged() {
        let slots = json!({
            "type": "rulanda",
            "size": "medium",
            "temperature": "hot",
            "extra": "kept-as-is"
        });
        let response = handler().handle(&dialog_request(slots.clone()));

        assert_eq!(response.session_attributes["visit"], json!("2"));
        match response.dialog_action {
            DialogAction::Delegate { slots: echoed } => {
                let expected: Map<String, Value> = serde_json::from_value(slots).unwrap();
                assert_eq!(echoed, expected);
            }
            other => panic!("expected Delegate, got {other:?}"),
        }
    }

    #[test]
    fn fulfillment_mode_always_closes_fulfilled() {
        for slots in [json!({}), json!({"type": "chai", "size": "small"})] {
            let response = handler().handle(&fulfillment_request(slots));
            match response.dialog_action {
                DialogAction::Close {
                    fulfillment_state, ..
                } => assert_eq!(fulfillment_state, FulfillmentState::Fulfilled),
                other => panic!("expected Close, got {other:?}"),
            }
        }
    }

    #[test]
    fn fulfillment_message_names_the_beverage() {
        let response = handler().handle(&fulfillment_request(json!({"type": "chai"})));
        match response.dialog_action {
            DialogAction::Close { message, .. } => {
                assert_eq!(
                    message.content,
                    "Great news! Your chai is on its way. Thanks for your order!"
                );
            }
            other => panic!("expected Close, got {other:?}"),
        }
    }
}
