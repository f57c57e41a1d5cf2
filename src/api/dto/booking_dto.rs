//! Booking DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::booking::{Booking, BookingStatus, TravelClass};
use crate::models::destination::DestinationId;

pub use crate::services::booking::BookingRequest;

/// Booking confirmation
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub destination: DestinationId,
    pub destination_label: &'static str,
    pub temporal_year: i64,
    pub departure_date: NaiveDate,
    pub travelers: u32,
    pub travel_class: TravelClass,
    pub travel_class_label: &'static str,
    pub name: String,
    pub email: String,
    pub estimated_price_eur: u64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            destination_label: b.destination.label(),
            travel_class_label: b.travel_class.label(),
            id: b.id,
            destination: b.destination,
            temporal_year: b.temporal_year,
            departure_date: b.departure_date,
            travelers: b.travelers,
            travel_class: b.travel_class,
            name: b.name,
            email: b.email,
            estimated_price_eur: b.estimated_price_eur,
            status: b.status,
            created_at: b.created_at,
        }
    }
}
