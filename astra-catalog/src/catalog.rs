use crate::accommodation::{Accommodation, AccommodationCategory};
use crate::package::{Difficulty, Package};
use std::collections::HashMap;

/// In-memory reference-data catalog: lookup tables keyed by id.
///
/// Packages and accommodations are loaded once at startup and never
/// mutated. Compatibility is declared on both sides; `compatible` accepts
/// a pair when either side lists the other.
pub struct Catalog {
    packages: HashMap<String, Package>,
    accommodations: HashMap<String, Accommodation>,
}

impl Catalog {
    pub fn new(packages: Vec<Package>, accommodations: Vec<Accommodation>) -> Self {
        Self {
            packages: packages.into_iter().map(|p| (p.id.clone(), p)).collect(),
            accommodations: accommodations
                .into_iter()
                .map(|a| (a.id.clone(), a))
                .collect(),
        }
    }

    pub fn package(&self, id: &str) -> Result<&Package, CatalogError> {
        self.packages
            .get(id)
            .ok_or_else(|| CatalogError::UnknownPackage(id.to_string()))
    }

    pub fn accommodation(&self, id: &str) -> Result<&Accommodation, CatalogError> {
        self.accommodations
            .get(id)
            .ok_or_else(|| CatalogError::UnknownAccommodation(id.to_string()))
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    pub fn accommodations(&self) -> impl Iterator<Item = &Accommodation> {
        self.accommodations.values()
    }

    /// Accommodations offered with the given package.
    pub fn accommodations_for<'a>(
        &'a self,
        package: &'a Package,
    ) -> impl Iterator<Item = &'a Accommodation> + 'a {
        self.accommodations
            .values()
            .filter(move |&acc| Self::compatible(package, acc))
    }

    /// A package/accommodation pair is compatible when either side lists
    /// the other.
    pub fn compatible(package: &Package, accommodation: &Accommodation) -> bool {
        package.offers_accommodation(&accommodation.id)
            || accommodation.supports_package(&package.id)
    }

    /// The mock catalog of the demo service: six packages, seven
    /// accommodations, with symmetric compatibility edges.
    pub fn seeded() -> Self {
        Self::new(seed_packages(), seed_accommodations())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    #[error("Unknown accommodation: {0}")]
    UnknownAccommodation(String),
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_packages() -> Vec<Package> {
    vec![
        Package {
            id: "lunar-odyssey".to_string(),
            name: "Lunar Odyssey".to_string(),
            destination: "Moon".to_string(),
            description: "Walk on the lunar surface, witness Earth-rise and tour the historic Apollo landing sites.".to_string(),
            duration_days: 7,
            price: 450_000,
            features: strings(&[
                "Lunar surface excursion",
                "Earth-rise viewing",
                "Historic Apollo landing sites tour",
                "Lunar sample collection",
            ]),
            rating: 4.8,
            review_count: 124,
            difficulty: Difficulty::Moderate,
            available_accommodations: strings(&[
                "orbital-suite",
                "space-station-deluxe",
                "lunar-habitat",
            ]),
        },
        Package {
            id: "mars-expedition".to_string(),
            name: "Mars Expedition".to_string(),
            destination: "Mars".to_string(),
            description: "Journey to the Red Planet: explore Martian landscapes and take part in surface research.".to_string(),
            duration_days: 180,
            price: 1_250_000,
            features: strings(&[
                "Martian surface exploration",
                "Olympus Mons expedition",
                "Mars rover operation",
                "Martian soil sampling",
            ]),
            rating: 4.9,
            review_count: 42,
            difficulty: Difficulty::Extreme,
            available_accommodations: strings(&["mars-surface-habitat"]),
        },
        Package {
            id: "orbital-luxury".to_string(),
            name: "Orbital Luxury".to_string(),
            destination: "Earth Orbit".to_string(),
            description: "Panoramic Earth views, zero-gravity spa treatments and gourmet dining among the stars.".to_string(),
            duration_days: 5,
            price: 250_000,
            features: strings(&[
                "Panoramic Earth viewing",
                "Zero-gravity spa treatments",
                "Spacewalk experience",
                "Orbital photography session",
            ]),
            rating: 4.7,
            review_count: 215,
            difficulty: Difficulty::Easy,
            available_accommodations: strings(&[
                "orbital-suite",
                "space-station-deluxe",
                "orbital-standard",
            ]),
        },
        Package {
            id: "venus-flyby".to_string(),
            name: "Venus Flyby Adventure".to_string(),
            destination: "Venus".to_string(),
            description: "Witness Venus up close, experience a gravitational slingshot and join atmospheric research.".to_string(),
            duration_days: 15,
            price: 650_000,
            features: strings(&[
                "Close-up Venus observation",
                "Gravitational slingshot experience",
                "Venus atmosphere analysis",
                "Interplanetary navigation training",
            ]),
            rating: 4.6,
            review_count: 78,
            difficulty: Difficulty::Moderate,
            available_accommodations: strings(&["space-station-deluxe", "orbital-standard"]),
        },
        Package {
            id: "asteroid-mining".to_string(),
            name: "Asteroid Mining Experience".to_string(),
            destination: "Asteroid Belt".to_string(),
            description: "Join a commercial asteroid mining operation: surface exploration, resource identification and extraction.".to_string(),
            duration_days: 21,
            price: 850_000,
            features: strings(&[
                "Asteroid surface exploration",
                "Resource extraction participation",
                "Microgravity mining techniques",
                "Sample collection and analysis",
            ]),
            rating: 4.5,
            review_count: 56,
            difficulty: Difficulty::Challenging,
            available_accommodations: strings(&["asteroid-mining-quarters"]),
        },
        Package {
            id: "jupiter-odyssey".to_string(),
            name: "Jupiter Odyssey".to_string(),
            destination: "Jupiter".to_string(),
            description: "Explore Jupiter's moons, observe the Great Red Spot and study the gas giant's storms.".to_string(),
            duration_days: 120,
            price: 950_000,
            features: strings(&[
                "Jupiter's moons exploration",
                "Great Red Spot observation",
                "Europa subsurface ocean study",
                "Gas giant atmospheric analysis",
            ]),
            rating: 4.9,
            review_count: 34,
            difficulty: Difficulty::Challenging,
            available_accommodations: strings(&["jupiter-explorer-suite"]),
        },
    ]
}

fn seed_accommodations() -> Vec<Accommodation> {
    vec![
        Accommodation {
            id: "orbital-suite".to_string(),
            name: "Orbital Suite".to_string(),
            category: AccommodationCategory::Premium,
            description: "Private suite with panoramic Earth views, zero-gravity sleeping chamber and observation deck.".to_string(),
            price: 150_000,
            max_occupancy: 2,
            amenities: strings(&[
                "Panoramic Earth viewing windows",
                "Private zero-gravity sleeping chamber",
                "Entertainment system with Earth live feed",
                "Gourmet space food menu",
            ]),
            compatible_packages: strings(&["lunar-odyssey", "orbital-luxury"]),
        },
        Accommodation {
            id: "space-station-deluxe".to_string(),
            name: "Space Station Deluxe".to_string(),
            category: AccommodationCategory::Deluxe,
            description: "Comfortable station cabin with shared lounge areas and excellent Earth views.".to_string(),
            price: 100_000,
            max_occupancy: 4,
            amenities: strings(&[
                "Semi-private sleeping quarters",
                "Shared observation lounge",
                "Communication system with Earth",
                "Standard space cuisine",
            ]),
            compatible_packages: strings(&["lunar-odyssey", "orbital-luxury", "venus-flyby"]),
        },
        Accommodation {
            id: "lunar-habitat".to_string(),
            name: "Lunar Habitat".to_string(),
            category: AccommodationCategory::Standard,
            description: "Practical surface quarters with Earth-rise views and lunar excursion access.".to_string(),
            price: 200_000,
            max_occupancy: 3,
            amenities: strings(&[
                "Lunar surface viewing ports",
                "Radiation shielding",
                "EVA suit storage",
                "Emergency life support systems",
            ]),
            compatible_packages: strings(&["lunar-odyssey"]),
        },
        Accommodation {
            id: "mars-surface-habitat".to_string(),
            name: "Mars Surface Habitat".to_string(),
            category: AccommodationCategory::Standard,
            description: "Durable Martian living quarters with research facilities and rover access.".to_string(),
            price: 350_000,
            max_occupancy: 4,
            amenities: strings(&[
                "Martian landscape viewing ports",
                "Dust filtration system",
                "Research laboratory access",
                "Advanced life support systems",
            ]),
            compatible_packages: strings(&["mars-expedition"]),
        },
        Accommodation {
            id: "asteroid-mining-quarters".to_string(),
            name: "Asteroid Mining Quarters".to_string(),
            category: AccommodationCategory::Standard,
            description: "Functional quarters aboard a mining vessel with direct access to operations.".to_string(),
            price: 250_000,
            max_occupancy: 2,
            amenities: strings(&[
                "Mining equipment access",
                "Sample analysis lab",
                "Secure sleeping quarters",
                "Emergency escape pod",
            ]),
            compatible_packages: strings(&["asteroid-mining"]),
        },
        Accommodation {
            id: "jupiter-explorer-suite".to_string(),
            name: "Jupiter Explorer Suite".to_string(),
            category: AccommodationCategory::Deluxe,
            description: "Suite aboard the Jupiter exploration vessel with views of the planet and its moons.".to_string(),
            price: 400_000,
            max_occupancy: 2,
            amenities: strings(&[
                "Jupiter viewing observatory",
                "Enhanced radiation shielding",
                "Holographic display system",
                "Artificial gravity chamber",
            ]),
            compatible_packages: strings(&["jupiter-odyssey"]),
        },
        Accommodation {
            id: "orbital-standard".to_string(),
            name: "Orbital Standard Cabin".to_string(),
            category: AccommodationCategory::Standard,
            description: "Efficient orbital cabin with essential amenities and Earth viewing opportunities.".to_string(),
            price: 75_000,
            max_occupancy: 2,
            amenities: strings(&[
                "Compact sleeping area",
                "Shared viewing port",
                "Standard space food",
                "Communication system",
            ]),
            compatible_packages: strings(&["orbital-luxury", "venus-flyby"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.package("lunar-odyssey").unwrap().duration_days, 7);
        assert_eq!(
            catalog.accommodation("orbital-suite").unwrap().max_occupancy,
            2
        );
        assert!(catalog.package("pluto-cruise").is_err());
    }

    #[test]
    fn test_seed_compatibility_edges_resolve() {
        // Every declared edge must point at an existing id on both sides.
        let catalog = Catalog::seeded();
        for pkg in catalog.packages() {
            for acc_id in &pkg.available_accommodations {
                assert!(
                    catalog.accommodation(acc_id).is_ok(),
                    "package {} lists unknown accommodation {}",
                    pkg.id,
                    acc_id
                );
            }
        }
        for acc in catalog.accommodations() {
            for pkg_id in &acc.compatible_packages {
                assert!(
                    catalog.package(pkg_id).is_ok(),
                    "accommodation {} lists unknown package {}",
                    acc.id,
                    pkg_id
                );
            }
        }
    }

    #[test]
    fn test_compatibility_is_symmetric_in_seed_data() {
        let catalog = Catalog::seeded();
        for pkg in catalog.packages() {
            for acc_id in &pkg.available_accommodations {
                let acc = catalog.accommodation(acc_id).unwrap();
                assert!(acc.supports_package(&pkg.id));
            }
        }
    }

    #[test]
    fn test_accommodations_for_package() {
        let catalog = Catalog::seeded();
        let pkg = catalog.package("mars-expedition").unwrap();
        let compatible: Vec<&str> = catalog
            .accommodations_for(pkg)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(compatible, vec!["mars-surface-habitat"]);
    }

    #[test]
    fn test_difficulty_wire_format() {
        let pkg = Catalog::seeded().package("mars-expedition").unwrap().clone();
        let json = serde_json::to_value(&pkg).unwrap();
        assert_eq!(json["difficulty"], "EXTREME");
        let back: Package = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, "mars-expedition");
    }

    #[test]
    fn test_incompatible_pair() {
        let catalog = Catalog::seeded();
        let pkg = catalog.package("lunar-odyssey").unwrap();
        let acc = catalog.accommodation("mars-surface-habitat").unwrap();
        assert!(!Catalog::compatible(pkg, acc));
    }
}
