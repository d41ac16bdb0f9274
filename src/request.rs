//! # Inbound Event Types
//!
//! Deserialized shape of the dialog platform's per-turn event. Slot values
//! and session attributes are opaque to this crate beyond the slots the
//! order handler validates; both are echoed back unchanged in every
//! response, unknown keys included.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One turn's worth of dialog state, as submitted by the hosting platform
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub bot: Bot,
    pub invocation_source: InvocationSource,
    pub current_intent: CurrentIntent,
    /// Opaque caller state, absent or null on the first turn
    #[serde(default)]
    pub session_attributes: Option<Map<String, Value>>,
    /// For logging only
    #[serde(default)]
    pub user_id: String,
}

impl IntentRequest {
    /// Session attributes to echo back, defaulting to an empty map
    pub fn output_session_attributes(&self) -> Map<String, Value> {
        self.session_attributes.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bot {
    pub name: String,
}

/// Why the platform invoked us this turn: mid-dialog slot validation or
/// final fulfillment. Unrecognized sources are treated as fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InvocationSource {
    DialogCodeHook,
    #[serde(other)]
    FulfillmentCodeHook,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    /// Slot name to collected value; values are strings or null
    #[serde(default)]
    pub slots: Option<Map<String, Value>>,
}

impl CurrentIntent {
    /// The slot map to validate and echo back, defaulting to an empty map
    pub fn slot_map(&self) -> Map<String, Value> {
        self.slots.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_full_event() {
        let event = json!({
            "bot": {"name": "BrewBot_dev"},
            "invocationSource": "DialogCodeHook",
            "userId": "user-42",
            "sessionAttributes": {"visit": "3"},
            "currentIntent": {
                "name": "OrderBeverage_dev",
                "slots": {"type": "chai", "size": null}
            }
        });

        let request: IntentRequest = serde_json::from_value(event).unwrap();
        assert_eq!(request.bot.name, "BrewBot_dev");
        assert_eq!(request.invocation_source, InvocationSource::DialogCodeHook);
        assert_eq!(request.user_id, "user-42");
        assert_eq!(request.current_intent.name, "OrderBeverage_dev");
        assert_eq!(request.current_intent.slot_map()["type"], json!("chai"));
        assert_eq!(request.output_session_attributes()["visit"], json!("3"));
    }

    #[test]
    fn missing_or_null_maps_default_to_empty() {
        let event = json!({
            "bot": {"name": "BrewBot"},
            "invocationSource": "DialogCodeHook",
            "sessionAttributes": null,
            "currentIntent": {"name": "OrderBeverage"}
        });

        let request: IntentRequest = serde_json::from_value(event).unwrap();
        assert!(request.output_session_attributes().is_empty());
        assert!(request.current_intent.slot_map().is_empty());
        assert_eq!(request.user_id, "");
    }

    #[test]
    fn unknown_invocation_sources_mean_fulfillment() {
        let event = json!({
            "bot": {"name": "BrewBot"},
            "invocationSource": "FulfillmentCodeHook",
            "currentIntent": {"name": "OrderBeverage", "slots": {}}
        });
        let request: IntentRequest = serde_json::from_value(event).unwrap();
        assert_eq!(
            request.invocation_source,
            InvocationSource::FulfillmentCodeHook
        );

        let event = json!({
            "bot": {"name": "BrewBot"},
            "invocationSource": "SomethingElse",
            "currentIntent": {"name": "OrderBeverage", "slots": {}}
        });
        let request: IntentRequest = serde_json::from_value(event).unwrap();
        assert_eq!(
            request.invocation_source,
            InvocationSource::FulfillmentCodeHook
        );
    }
}
