//! # System Constants
//!
//! Slot names, fixed vocabularies, and wire-protocol constants shared across
//! the fulfillment core. The slot vocabularies are exact, case-sensitive
//! sets; anything outside them re-prompts the user.

/// Slot names used by the beverage-order intent
pub mod slots {
    pub const BEVERAGE_TYPE: &str = "type";
    pub const BEVERAGE_SIZE: &str = "size";
    pub const BEVERAGE_TEMPERATURE: &str = "temperature";
}

/// Content types understood by the dialog platform
pub mod content_types {
    pub const PLAIN_TEXT: &str = "PlainText";
    pub const GENERIC_CARD: &str = "application/vnd.amazonaws.card.generic";
}

/// Default identifier prefixes, overridable through [`crate::config::BotConfig`]
pub mod defaults {
    pub const BOT_NAME_PREFIX: &str = "BrewBot";
    pub const ORDER_INTENT_PREFIX: &str = "OrderBeverage";
}

/// Size words a size slot value may use at all. Membership in the selected
/// beverage type's own size list is checked separately against the menu.
pub const SIZE_WORDS: [&str; 7] = [
    "short", "tall", "grande", "venti", "small", "medium", "large",
];

/// Accepted temperature slot values
pub const TEMPERATURE_WORDS: [&str; 3] = ["kids", "hot", "iced"];

/// Response cards carry at most this many buttons; extra options are
/// dropped in input order.
pub const MAX_CARD_BUTTONS: usize = 5;

/// Wire format version of the generic response card
pub const CARD_VERSION: u32 = 1;
