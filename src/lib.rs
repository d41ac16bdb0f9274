//! # BrewBot Core
//!
//! Dialog validation and fulfillment core for a beverage-ordering chat bot,
//! designed to back a Lex-style code hook.
//!
//! ## Overview
//!
//! The hosting dialog platform invokes this crate once per conversation
//! turn with the intent recognized so far and the slot values it has
//! collected. The crate validates those slots against an in-memory menu and
//! answers with one of four dialog actions: elicit a specific slot, ask for
//! intent confirmation, close the dialog, or delegate the next step back to
//! the platform. All conversation state lives with the platform; every call
//! is synchronous, stateless, and runs to a single response or error.
//!
//! ## Module Organization
//!
//! - [`processor`] - Entry point: event unwrap, bot validation, dispatch
//! - [`dispatcher`] - Intent-name-prefix routing to handlers
//! - [`handlers`] - Per-intent dialog and fulfillment logic
//! - [`menu`] - The immutable beverage menu
//! - [`request`] / [`response`] - Wire types for inbound events and
//!   outbound dialog actions
//! - [`validation`] - Slot membership and vocabulary checks
//! - [`config`] - Bot and intent identifier prefixes
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust
//! use brewbot_core::{EventProcessor, Menu, BotConfig};
//! use serde_json::json;
//!
//! let processor = EventProcessor::new(BotConfig::default(), Menu::today());
//! let event = json!({
//!     "bot": {"name": "BrewBot"},
//!     "invocationSource": "DialogCodeHook",
//!     "currentIntent": {"name": "OrderBeverage", "slots": {"type": "chai"}}
//! });
//!
//! let response = processor.process(&event).unwrap();
//! let wire = serde_json::to_value(&response).unwrap();
//! assert_eq!(wire["dialogAction"]["type"], "ElicitSlot");
//! ```

pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod menu;
pub mod processor;
pub mod request;
pub mod response;
pub mod validation;

pub use config::BotConfig;
pub use dispatcher::IntentDispatcher;
pub use error::{FulfillmentError, Result};
pub use handlers::OrderBeverageHandler;
pub use menu::Menu;
pub use processor::EventProcessor;
pub use request::{Bot, CurrentIntent, IntentRequest, InvocationSource};
pub use response::{
    Button, CardAttachment, DialogAction, FulfillmentState, LexResponse, Message, ResponseCard,
};
