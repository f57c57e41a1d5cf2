//! Routes
//!
//! API route tables.

pub mod booking_routes;
pub mod chat_routes;
pub mod destination_routes;
pub mod quiz_routes;
