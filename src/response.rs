//! # Outbound Response Types
//!
//! The four dialog actions the hosting platform understands, plus the
//! message and response-card shapes they may carry. All constructors are
//! pure; the entry point serializes the finished response for the wire.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{content_types, CARD_VERSION, MAX_CARD_BUTTONS};

/// A complete per-turn response for the dialog platform
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    pub session_attributes: Map<String, Value>,
    pub dialog_action: DialogAction,
}

/// What the platform should do next, tagged on the wire by `type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    /// Prompt the user for one specific slot
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Map<String, Value>,
        slot_to_elicit: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<Message>,
        #[serde(skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    /// Ask the user to confirm the intent before fulfilling it
    #[serde(rename_all = "camelCase")]
    ConfirmIntent {
        intent_name: String,
        slots: Map<String, Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<Message>,
        #[serde(skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    /// Terminal response; ends the dialog
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
        #[serde(skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    /// Hand slot-filling control back to the platform
    #[serde(rename_all = "camelCase")]
    Delegate { slots: Map<String, Value> },
}

/// Terminal outcome of a completed intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// A plain-text message attached to a dialog action
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: String,
    pub content: String,
}

impl Message {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content_type: content_types::PLAIN_TEXT.to_string(),
            content: content.into(),
        }
    }
}

/// A structured UI suggestion: title, subtitle, and up to
/// [`MAX_CARD_BUTTONS`] selectable buttons
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCard {
    pub content_type: String,
    pub version: u32,
    pub generic_attachments: Vec<CardAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAttachment {
    pub title: String,
    pub sub_title: String,
    /// Null on the wire when the card was built without options
    pub buttons: Option<Vec<Button>>,
}

impl ResponseCard {
    /// Build a single-attachment generic card. `options` beyond the button
    /// limit are dropped in input order; `None` attaches no buttons.
    pub fn generic(
        title: impl Into<String>,
        sub_title: impl Into<String>,
        options: Option<Vec<Button>>,
    ) -> Self {
        let buttons =
            options.map(|options| options.into_iter().take(MAX_CARD_BUTTONS).collect());
        Self {
            content_type: content_types::GENERIC_CARD.to_string(),
            version: CARD_VERSION,
            generic_attachments: vec![CardAttachment {
                title: title.into(),
                sub_title: sub_title.into(),
                buttons,
            }],
        }
    }
}

/// One selectable card button; the submitted value equals the display text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub text: String,
    pub value: String,
}

impl Button {
    /// Map labels to buttons whose text and value both equal the label
    pub fn from_labels(labels: &[String]) -> Vec<Button> {
        labels
            .iter()
            .map(|label| Button {
                text: label.clone(),
                value: label.clone(),
            })
            .collect()
    }
}

impl LexResponse {
    pub fn elicit_slot(
        session_attributes: Map<String, Value>,
        intent_name: impl Into<String>,
        slots: Map<String, Value>,
        slot_to_elicit: impl Into<String>,
        message: Option<Message>,
        response_card: Option<ResponseCard>,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit: slot_to_elicit.into(),
                message,
                response_card,
            },
        }
    }

    pub fn confirm_intent(
        session_attributes: Map<String, Value>,
        intent_name: impl Into<String>,
        slots: Map<String, Value>,
        message: Option<Message>,
        response_card: Option<ResponseCard>,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ConfirmIntent {
                intent_name: intent_name.into(),
                slots,
                message,
                response_card,
            },
        }
    }

    pub fn close(
        session_attributes: Map<String, Value>,
        fulfillment_state: FulfillmentState,
        message: Message,
        response_card: Option<ResponseCard>,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close {
                fulfillment_state,
                message,
                response_card,
            },
        }
    }

    pub fn delegate(session_attributes: Map<String, Value>, slots: Map<String, Value>) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Delegate { slots },
        }
    }
}
