use serde::{Deserialize, Serialize};

/// Physical demand tier of a travel package
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Extreme,
}

/// A space travel package: immutable reference data loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub description: String,
    pub duration_days: u32,
    /// Whole USD per traveler
    pub price: u64,
    pub features: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub difficulty: Difficulty,
    /// Ids of accommodations offered with this package
    pub available_accommodations: Vec<String>,
}

impl Package {
    /// Whether the given accommodation id is offered with this package.
    pub fn offers_accommodation(&self, accommodation_id: &str) -> bool {
        self.available_accommodations
            .iter()
            .any(|id| id == accommodation_id)
    }
}
