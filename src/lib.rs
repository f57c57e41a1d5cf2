//! Chronos - TimeTravel Agency concierge service
//!
//! Chat assistant backed by a language-model provider, with a local
//! knowledge base answering whenever the provider is unavailable. Also
//! serves the destination catalog, the personality quiz and bookings.

pub mod api;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod observability;
pub mod security;
pub mod services;
