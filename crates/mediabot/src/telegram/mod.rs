//! Telegram bot integration and handlers

pub mod bot;
pub mod delivery;
pub mod downloads;
pub mod handlers;
pub mod replies;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use delivery::handle_confirmation;
pub use downloads::{confirmation_keyboard, handle_message};
pub use handlers::{handle_start_command, schema, HandlerDeps, HandlerError};
