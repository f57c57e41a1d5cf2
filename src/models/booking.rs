//! Booking model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::destination::DestinationId;

/// Largest party accepted by the booking form
pub const MAX_TRAVELERS: u32 = 6;

/// Comfort level of the trip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelClass {
    /// Remote observation
    #[default]
    #[serde(rename = "eco")]
    Eco,
    /// Guided immersion
    #[serde(rename = "business")]
    Business,
    /// Full immersion with supervised interactions
    #[serde(rename = "chronos-first")]
    ChronosFirst,
}

impl TravelClass {
    pub const ALL: [TravelClass; 3] = [
        TravelClass::Eco,
        TravelClass::Business,
        TravelClass::ChronosFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Eco => "eco",
            TravelClass::Business => "business",
            TravelClass::ChronosFirst => "chronos-first",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelClass::Eco => "Éco",
            TravelClass::Business => "Business",
            TravelClass::ChronosFirst => "Chronos First",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TravelClass::Eco => "Observation à distance sécurisée",
            TravelClass::Business => "Immersion guidée + accès privilégié",
            TravelClass::ChronosFirst => "Immersion totale + interactions encadrées",
        }
    }

    /// Price multiplier applied to the destination base price
    pub fn multiplier(&self) -> f64 {
        match self {
            TravelClass::Eco => 1.0,
            TravelClass::Business => 2.5,
            TravelClass::ChronosFirst => 5.0,
        }
    }
}

impl FromStr for TravelClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| format!("Unknown travel class: {}", s))
    }
}

/// Estimated total in euros
pub fn estimate_price(destination: DestinationId, class: TravelClass, travelers: u32) -> u64 {
    let base = destination.destination().base_price_eur as f64;
    (base * class.multiplier() * travelers as f64).round() as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
}

/// A confirmed booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub destination: DestinationId,
    pub temporal_year: i64,
    pub departure_date: NaiveDate,
    pub travelers: u32,
    pub travel_class: TravelClass,
    pub name: String,
    pub email: String,
    pub estimated_price_eur: u64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        destination: DestinationId,
        temporal_year: i64,
        departure_date: NaiveDate,
        travelers: u32,
        travel_class: TravelClass,
        name: &str,
        email: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            destination,
            temporal_year,
            departure_date,
            travelers,
            travel_class,
            name: name.to_string(),
            email: email.to_string(),
            estimated_price_eur: estimate_price(destination, travel_class, travelers),
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}
