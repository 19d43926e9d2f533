use crate::accommodation::Accommodation;
use crate::package::Package;
use astra_shared::format_usd;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price breakdown for a trip selection.
///
/// Both the package and the accommodation are priced per traveler, so the
/// total is `(package.price + accommodation.price) * passenger_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripQuote {
    pub package_price: u64,
    pub accommodation_price: u64,
    pub passenger_count: u32,
    pub total: u64,
}

impl TripQuote {
    pub fn new(package: &Package, accommodation: &Accommodation, passenger_count: u32) -> Self {
        let per_traveler = package.price + accommodation.price;
        Self {
            package_price: package.price,
            accommodation_price: accommodation.price,
            passenger_count,
            total: per_traveler * passenger_count as u64,
        }
    }

    pub fn per_traveler(&self) -> u64 {
        self.package_price + self.accommodation_price
    }
}

impl fmt::Display for TripQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} travelers = {}",
            format_usd(self.per_traveler()),
            self.passenger_count,
            format_usd(self.total)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_total_scales_with_passengers() {
        let catalog = Catalog::seeded();
        let pkg = catalog.package("lunar-odyssey").unwrap();
        let acc = catalog.accommodation("lunar-habitat").unwrap();

        let quote = TripQuote::new(pkg, acc, 3);
        assert_eq!(quote.per_traveler(), 650_000);
        assert_eq!(quote.total, 1_950_000);
    }

    #[test]
    fn test_zero_passengers_zero_total() {
        let catalog = Catalog::seeded();
        let pkg = catalog.package("orbital-luxury").unwrap();
        let acc = catalog.accommodation("orbital-standard").unwrap();

        let quote = TripQuote::new(pkg, acc, 0);
        assert_eq!(quote.total, 0);
    }

    #[test]
    fn test_display_formatting() {
        let catalog = Catalog::seeded();
        let pkg = catalog.package("lunar-odyssey").unwrap();
        let acc = catalog.accommodation("orbital-suite").unwrap();

        let quote = TripQuote::new(pkg, acc, 2);
        assert_eq!(quote.to_string(), "$600,000 x 2 travelers = $1,200,000");
    }
}
