//! DTOs
//!
//! Request and response bodies of the REST API.

pub mod booking_dto;
pub mod chat_dto;
pub mod destination_dto;
pub mod quiz_dto;

pub use booking_dto::*;
pub use chat_dto::*;
pub use destination_dto::*;
pub use quiz_dto::*;
