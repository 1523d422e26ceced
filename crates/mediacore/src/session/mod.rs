//! Per-conversation session state.
//!
//! Each chat owns one [`Conversation`]: a small state machine plus the slot
//! remembering the last file that chat downloaded.
//!
//! ```text
//! Idle ─► AwaitingFetch ─► AwaitingConfirmation ─► Delivered
//!  ▲            │                    ├──────────► SavedOnly
//!  └── failure ─┘                    └──────────► DeliveryFailed
//! ```
//!
//! [`Conversations`] owns all of them for the lifetime of the bot and is
//! handed to handlers explicitly; there is no process-global map. Two
//! overlapping requests in the same chat are last-writer-wins.

mod conversation;
mod store;

pub use conversation::{ConfirmChoice, Conversation, ConversationState, DeliveryPlan, StoredDownload};
pub use store::Conversations;
