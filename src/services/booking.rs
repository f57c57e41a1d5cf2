//! Booking service
//!
//! Validates booking requests against the catalog and keeps confirmed
//! bookings in memory.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::booking::{Booking, MAX_TRAVELERS, TravelClass};
use crate::models::destination::DestinationId;
use crate::observability::AppMetrics;
use crate::security::validation::{RequestValidator, ValidationError};

fn default_travel_class() -> String {
    TravelClass::default().as_str().to_string()
}

/// Booking form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingRequest {
    /// Destination id, e.g. `paris-1889`
    pub destination: String,

    /// Defaults to the destination's year
    #[serde(default)]
    pub temporal_year: Option<i64>,

    pub departure_date: NaiveDate,

    #[validate(range(min = 1, max = 6))]
    pub travelers: u32,

    /// `eco`, `business` or `chronos-first`
    #[serde(default = "default_travel_class")]
    pub travel_class: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub email: String,
}

#[async_trait]
pub trait BookingService: Send + Sync {
    async fn create(&self, request: BookingRequest) -> Result<Booking>;

    async fn get(&self, id: &str) -> Result<Booking>;
}

#[derive(Default)]
pub struct InMemoryBookingService {
    bookings: DashMap<String, Booking>,
    metrics: Option<Arc<AppMetrics>>,
}

impl InMemoryBookingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(mut self, metrics: Arc<AppMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Checks the request and builds the booking without storing it
    fn build(request: &BookingRequest, today: NaiveDate) -> Result<Booking> {
        request.validate()?;

        let destination: DestinationId = request.destination.parse().map_err(|message| {
            ValidationError::Custom {
                field: "destination".to_string(),
                message,
            }
        })?;

        let travel_class: TravelClass = request.travel_class.parse().map_err(|message| {
            ValidationError::Custom {
                field: "travel_class".to_string(),
                message,
            }
        })?;

        let max_group = destination.destination().max_group_size.min(MAX_TRAVELERS);
        if request.travelers > max_group {
            return Err(ValidationError::ExceedsMax {
                field: "travelers".to_string(),
                max: max_group as i64,
                got: request.travelers as i64,
            }
            .into());
        }

        let name = RequestValidator::sanitize_string(&request.name);
        if name.is_empty() {
            return Err(ValidationError::MissingField {
                field: "name".to_string(),
            }
            .into());
        }

        let email = request.email.trim();
        RequestValidator::new().validate_email("email", email)?;

        if request.departure_date < today {
            return Err(ValidationError::Custom {
                field: "departure_date".to_string(),
                message: "Departure date is in the past".to_string(),
            }
            .into());
        }

        Ok(Booking::new(
            destination,
            request
                .temporal_year
                .unwrap_or(destination.destination().temporal_year),
            request.departure_date,
            request.travelers,
            travel_class,
            &name,
            email,
        ))
    }
}

#[async_trait]
impl BookingService for InMemoryBookingService {
    async fn create(&self, request: BookingRequest) -> Result<Booking> {
        let booking = Self::build(&request, Utc::now().date_naive())?;

        info!(
            "Booking {} confirmed: {} x{} ({}), {} EUR",
            booking.id,
            booking.destination,
            booking.travelers,
            booking.travel_class.as_str(),
            booking.estimated_price_eur
        );

        if let Some(metrics) = &self.metrics {
            metrics.record_booking();
        }
        self.bookings.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    async fn get(&self, id: &str) -> Result<Booking> {
        self.bookings
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("Booking not found: {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request() -> BookingRequest {
        BookingRequest {
            destination: "florence-1504".to_string(),
            temporal_year: None,
            departure_date: NaiveDate::from_ymd_opt(2099, 3, 14).unwrap(),
            travelers: 2,
            travel_class: "business".to_string(),
            name: "Léonie Marchand".to_string(),
            email: "leonie@example.fr".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let metrics = Arc::new(AppMetrics::default());
        let service = InMemoryBookingService::new().with_metrics(metrics.clone());

        let booking = service.create(request()).await.unwrap();
        assert_eq!(booking.destination, DestinationId::Florence1504);
        assert_eq!(booking.temporal_year, 1504);
        assert_eq!(booking.estimated_price_eur, 90_000);
        assert_eq!(service.len(), 1);
        assert!(metrics.gather().contains("bookings_total 1"));

        let stored = service.get(&booking.id).await.unwrap();
        assert_eq!(stored.email, "leonie@example.fr");
    }

    #[tokio::test]
    async fn test_unknown_booking_is_not_found() {
        let service = InMemoryBookingService::new();
        assert!(matches!(
            service.get("missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_generated_customers_are_accepted() {
        use fake::Fake;
        use fake::faker::internet::en::SafeEmail;
        use fake::faker::name::en::Name;

        let service = InMemoryBookingService::new();
        for destination in DestinationId::ALL {
            for class in TravelClass::ALL {
                let req = BookingRequest {
                    destination: destination.as_str().to_string(),
                    travel_class: class.as_str().to_string(),
                    travelers: (1..=destination.destination().max_group_size).fake(),
                    name: Name().fake(),
                    email: SafeEmail().fake(),
                    ..request()
                };

                let booking = service.create(req.clone()).await.unwrap();
                assert_eq!(booking.name, req.name.trim());
                assert_eq!(
                    booking.estimated_price_eur,
                    crate::models::booking::estimate_price(destination, class, req.travelers)
                );
            }
        }
        assert_eq!(service.len(), 9);
    }

    #[test]
    fn test_explicit_temporal_year_is_kept() {
        let mut req = request();
        req.temporal_year = Some(1505);
        let booking = InMemoryBookingService::build(&req, NaiveDate::MIN).unwrap();
        assert_eq!(booking.temporal_year, 1505);
    }

    #[test]
    fn test_departure_today_is_accepted() {
        let req = request();
        assert!(InMemoryBookingService::build(&req, req.departure_date).is_ok());
    }

    #[rstest]
    #[case::unknown_destination(|r: &mut BookingRequest| r.destination = "rome-44".into())]
    #[case::unknown_class(|r: &mut BookingRequest| r.travel_class = "first".into())]
    #[case::no_travelers(|r: &mut BookingRequest| r.travelers = 0)]
    #[case::too_many_travelers(|r: &mut BookingRequest| r.travelers = 7)]
    #[case::above_group_size(|r: &mut BookingRequest| { r.destination = "cretace".into(); r.travelers = 5; })]
    #[case::blank_name(|r: &mut BookingRequest| r.name = "   ".into())]
    #[case::long_name(|r: &mut BookingRequest| r.name = "x".repeat(101))]
    #[case::invalid_email(|r: &mut BookingRequest| r.email = "not-an-email".into())]
    #[case::past_departure(|r: &mut BookingRequest| r.departure_date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())]
    fn test_invalid_requests_are_rejected(#[case] tweak: fn(&mut BookingRequest)) {
        let mut req = request();
        tweak(&mut req);
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        assert!(matches!(
            InMemoryBookingService::build(&req, today),
            Err(AppError::Validation(_))
        ));
    }
}
