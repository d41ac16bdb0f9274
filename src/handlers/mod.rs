//! # Intent Handlers
//!
//! One handler per supported intent. The dispatcher owns handler instances
//! and routes requests to them by intent-name prefix.

pub mod order;

pub use order::OrderBeverageHandler;
