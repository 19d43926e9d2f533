use serde::{Deserialize, Serialize};
use std::fmt;

/// The six wizard stages, in booking order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStep {
    PackageSelection,
    AccommodationSelection,
    DateSelection,
    PassengerDetails,
    BookingSummary,
    BookingConfirmation,
}

impl BookingStep {
    pub const ALL: [BookingStep; 6] = [
        BookingStep::PackageSelection,
        BookingStep::AccommodationSelection,
        BookingStep::DateSelection,
        BookingStep::PassengerDetails,
        BookingStep::BookingSummary,
        BookingStep::BookingConfirmation,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Option<BookingStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<BookingStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Short progress-bar label.
    pub fn title(self) -> &'static str {
        match self {
            BookingStep::PackageSelection => "Select Package",
            BookingStep::AccommodationSelection => "Select Accommodation",
            BookingStep::DateSelection => "Select Date",
            BookingStep::PassengerDetails => "Passenger Details",
            BookingStep::BookingSummary => "Summary",
            BookingStep::BookingConfirmation => "Confirmation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BookingStep::PackageSelection => "Choose your space travel package",
            BookingStep::AccommodationSelection => "Choose your space accommodation",
            BookingStep::DateSelection => "Choose your launch date",
            BookingStep::PassengerDetails => "Enter traveler information",
            BookingStep::BookingSummary => "Review and payment",
            BookingStep::BookingConfirmation => "Booking confirmed",
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
