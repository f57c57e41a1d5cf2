//! Domain models

pub mod booking;
pub mod conversation;
pub mod destination;
pub mod quiz;

pub use booking::{Booking, BookingStatus, TravelClass};
pub use conversation::{ChatMessage, Role};
pub use destination::{CATALOG, Destination, DestinationId};
pub use quiz::{DestinationScores, QUESTIONS, QuizAnswer, QuizScore};
