//! Shared types for the Warung voice POS
//!
//! Common types used across the relay server and the kasir client:
//! menu/cart/transaction models, the interpreted command contract, and the
//! chat-completion wire types.

pub mod cart;
pub mod chat;
pub mod command;
pub mod menu;
pub mod settings;
pub mod transaction;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartLine, cart_total};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};
pub use command::{CommandItem, InterpretedCommand, Intent, ItemAction};
pub use menu::{Menu, MenuItem};
pub use settings::Settings;
pub use transaction::{Transaction, TransactionItem};
