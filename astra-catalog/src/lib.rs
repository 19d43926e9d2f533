pub mod accommodation;
pub mod catalog;
pub mod package;
pub mod pricing;

pub use accommodation::{Accommodation, AccommodationCategory};
pub use catalog::{Catalog, CatalogError};
pub use package::{Difficulty, Package};
pub use pricing::TripQuote;
