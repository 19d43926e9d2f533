use serde::{Deserialize, Serialize};

/// Comfort tier of an accommodation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccommodationCategory {
    Standard,
    Deluxe,
    Premium,
}

/// An orbital or surface accommodation: immutable reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    pub category: AccommodationCategory,
    pub description: String,
    /// Whole USD per traveler
    pub price: u64,
    /// Berth count; always >= 1
    pub max_occupancy: u32,
    pub amenities: Vec<String>,
    /// Ids of packages this accommodation may be booked with
    pub compatible_packages: Vec<String>,
}

impl Accommodation {
    /// Whether the given package id may be booked with this accommodation.
    pub fn supports_package(&self, package_id: &str) -> bool {
        self.compatible_packages.iter().any(|id| id == package_id)
    }
}
