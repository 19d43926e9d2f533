pub mod draft;
pub mod passenger;
pub mod reference;

pub use draft::{Booking, BookingDraft, BookingError, PassengerValidation};
pub use passenger::{EmergencyContact, Passenger, PassengerField};
pub use reference::{generate_reference, REFERENCE_PREFIX};
