//! Destination DTOs

use serde::Serialize;

use crate::models::booking::{TravelClass, estimate_price};
use crate::models::destination::{Destination, DestinationId, format_temporal_year};

/// Travel class offered for a destination
#[derive(Debug, Serialize)]
pub struct TravelClassOffer {
    pub id: TravelClass,
    pub label: &'static str,
    pub description: &'static str,
    /// Price for one traveler
    pub price_eur: u64,
}

/// Catalog entry as returned by the API
#[derive(Debug, Serialize)]
pub struct DestinationResponse {
    pub id: DestinationId,
    pub title: &'static str,
    pub expedition_name: &'static str,
    pub epoch: &'static str,
    pub description: &'static str,
    pub base_price_eur: u32,
    pub danger: &'static str,
    pub danger_level: u8,
    pub temporal_year: i64,
    /// e.g. `68 000 000 av. J.-C.`
    pub temporal_year_label: String,
    pub climate: &'static str,
    pub language: &'static str,
    pub currency: &'static str,
    pub duration: &'static str,
    pub max_group_size: u32,
    pub highlights: &'static [&'static str],
    pub travel_classes: Vec<TravelClassOffer>,
}

impl From<&Destination> for DestinationResponse {
    fn from(d: &Destination) -> Self {
        Self {
            id: d.id,
            title: d.title,
            expedition_name: d.expedition_name,
            epoch: d.epoch,
            description: d.description,
            base_price_eur: d.base_price_eur,
            danger: d.danger,
            danger_level: d.danger_level,
            temporal_year: d.temporal_year,
            temporal_year_label: format_temporal_year(d.temporal_year),
            climate: d.climate,
            language: d.language,
            currency: d.currency,
            duration: d.duration,
            max_group_size: d.max_group_size,
            highlights: d.highlights,
            travel_classes: TravelClass::ALL
                .into_iter()
                .map(|class| TravelClassOffer {
                    id: class,
                    label: class.label(),
                    description: class.description(),
                    price_eur: estimate_price(d.id, class, 1),
                })
                .collect(),
        }
    }
}
