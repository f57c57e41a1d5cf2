//! Handlers
//!
//! HTTP request handlers.

pub mod booking_handler;
pub mod chat_handler;
pub mod destination_handler;
pub mod quiz_handler;

pub use booking_handler::*;
pub use chat_handler::*;
pub use destination_handler::*;
pub use quiz_handler::*;
