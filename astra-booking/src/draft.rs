use crate::passenger::{Passenger, PassengerField};
use crate::reference::generate_reference;
use astra_catalog::{Accommodation, Catalog, Package, TripQuote};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Completeness violations for one traveler on the draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerValidation {
    /// Index into the draft's passenger list
    pub passenger: usize,
    pub fields: Vec<PassengerField>,
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Adding a traveler past the accommodation's berth count, or before
    /// any accommodation is selected (capacity 0).
    #[error("Accommodation capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: u32 },

    #[error("Passenger index {index} out of range (list holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The accommodation is not offered with the currently selected
    /// package; the selection was rejected.
    #[error("Accommodation {accommodation} is not compatible with package {package}")]
    IncompatiblePair {
        package: String,
        accommodation: String,
    },

    #[error("{} passenger(s) failed completeness validation", .0.len())]
    ValidationFailed(Vec<PassengerValidation>),

    #[error("Draft is missing: {}", missing.join(", "))]
    IncompleteDraft { missing: Vec<&'static str> },
}

/// Immutable snapshot of a confirmed booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub reference: String,
    pub package_id: String,
    pub accommodation_id: String,
    pub departure_date: NaiveDate,
    pub passenger_count: u32,
    pub total_price: u64,
    pub payment_method: String,
    pub booked_at: DateTime<Utc>,
}

/// The in-progress booking selection: single source of truth for the
/// wizard session that owns it.
///
/// Mutations keep two cross-field invariants:
/// - package and accommodation, when both set, are a compatible pair;
/// - the passenger list never exceeds the accommodation's berth count.
///
/// Every operation either fully applies or rejects without touching
/// state; rejected calls surface a [`BookingError`].
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    package: Option<Package>,
    accommodation: Option<Accommodation>,
    departure_date: Option<NaiveDate>,
    passengers: Vec<Passenger>,
    reference: Option<String>,
    payment_method: Option<String>,
    confirmed_at: Option<DateTime<Utc>>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    // Read accessors

    pub fn package(&self) -> Option<&Package> {
        self.package.as_ref()
    }

    pub fn accommodation(&self) -> Option<&Accommodation> {
        self.accommodation.as_ref()
    }

    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.departure_date
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.reference.is_some()
    }

    /// Price breakdown for the current selection, once both the package
    /// and the accommodation are chosen.
    pub fn quote(&self) -> Option<TripQuote> {
        match (&self.package, &self.accommodation) {
            (Some(pkg), Some(acc)) => {
                Some(TripQuote::new(pkg, acc, self.passengers.len() as u32))
            }
            _ => None,
        }
    }

    pub fn total_price(&self) -> u64 {
        self.quote().map(|q| q.total).unwrap_or(0)
    }

    /// The confirmed booking record, if `confirm` has succeeded.
    pub fn booking(&self) -> Option<Booking> {
        let reference = self.reference.clone()?;
        Some(Booking {
            reference,
            package_id: self.package.as_ref()?.id.clone(),
            accommodation_id: self.accommodation.as_ref()?.id.clone(),
            departure_date: self.departure_date?,
            passenger_count: self.passengers.len() as u32,
            total_price: self.total_price(),
            payment_method: self.payment_method.clone()?,
            booked_at: self.confirmed_at?,
        })
    }

    // Mutations

    /// Replaces the selected package. If the current accommodation is not
    /// offered with the new package it is cleared. Idempotent.
    pub fn select_package(&mut self, package: Package) {
        if let Some(acc) = &self.accommodation {
            if !Catalog::compatible(&package, acc) {
                tracing::warn!(
                    package = %package.id,
                    accommodation = %acc.id,
                    "package change cleared incompatible accommodation"
                );
                self.accommodation = None;
            }
        }
        tracing::info!(package = %package.id, "package selected");
        self.package = Some(package);
    }

    /// Replaces the selected accommodation. Rejected when a package is
    /// selected and does not offer it. Travelers beyond the new berth
    /// count are dropped from the end of the list.
    pub fn select_accommodation(
        &mut self,
        accommodation: Accommodation,
    ) -> Result<(), BookingError> {
        if let Some(pkg) = &self.package {
            if !Catalog::compatible(pkg, &accommodation) {
                tracing::warn!(
                    package = %pkg.id,
                    accommodation = %accommodation.id,
                    "rejected incompatible accommodation"
                );
                return Err(BookingError::IncompatiblePair {
                    package: pkg.id.clone(),
                    accommodation: accommodation.id.clone(),
                });
            }
        }

        let capacity = accommodation.max_occupancy as usize;
        if self.passengers.len() > capacity {
            tracing::warn!(
                accommodation = %accommodation.id,
                dropped = self.passengers.len() - capacity,
                "truncated passenger list to new berth count"
            );
            self.passengers.truncate(capacity);
        }

        tracing::info!(accommodation = %accommodation.id, "accommodation selected");
        self.accommodation = Some(accommodation);
        Ok(())
    }

    /// Replaces the departure date unconditionally; offering only
    /// available dates is the caller's concern.
    pub fn select_departure_date(&mut self, date: NaiveDate) {
        tracing::info!(%date, "departure date selected");
        self.departure_date = Some(date);
    }

    pub fn add_passenger(&mut self, passenger: Passenger) -> Result<(), BookingError> {
        let capacity = match &self.accommodation {
            Some(acc) => acc.max_occupancy,
            None => 0,
        };
        if self.passengers.len() as u32 >= capacity {
            tracing::warn!(capacity, "rejected passenger beyond capacity");
            return Err(BookingError::CapacityExceeded { capacity });
        }
        self.passengers.push(passenger);
        Ok(())
    }

    pub fn update_passenger(
        &mut self,
        index: usize,
        passenger: Passenger,
    ) -> Result<(), BookingError> {
        let len = self.passengers.len();
        let slot = self
            .passengers
            .get_mut(index)
            .ok_or(BookingError::IndexOutOfRange { index, len })?;
        *slot = passenger;
        Ok(())
    }

    /// Removes the traveler at `index`. The primary traveler (index 0)
    /// may be removed like any other; the next traveler, if any, becomes
    /// primary.
    pub fn remove_passenger(&mut self, index: usize) -> Result<(), BookingError> {
        if index >= self.passengers.len() {
            return Err(BookingError::IndexOutOfRange {
                index,
                len: self.passengers.len(),
            });
        }
        self.passengers.remove(index);
        Ok(())
    }

    /// All completeness violations across the passenger list, validated
    /// as of `today`.
    pub fn validate_passengers(&self, today: NaiveDate) -> Vec<PassengerValidation> {
        self.passengers
            .iter()
            .enumerate()
            .filter_map(|(index, passenger)| {
                let fields = passenger.missing_fields(today);
                (!fields.is_empty()).then_some(PassengerValidation {
                    passenger: index,
                    fields,
                })
            })
            .collect()
    }

    pub fn all_passengers_complete(&self, today: NaiveDate) -> bool {
        !self.passengers.is_empty() && self.validate_passengers(today).is_empty()
    }

    /// Confirms the draft, assigning its booking reference.
    ///
    /// Requires the package, accommodation and departure date to be set
    /// and every traveler to pass completeness validation. Confirming an
    /// already-confirmed draft returns the existing reference unchanged;
    /// a reference is never regenerated within a draft's lifetime.
    pub fn confirm(&mut self, payment_method: &str) -> Result<String, BookingError> {
        self.confirm_at(payment_method, Utc::now())
    }

    /// `confirm` with an explicit validation instant, for deterministic
    /// callers.
    pub fn confirm_at(
        &mut self,
        payment_method: &str,
        now: DateTime<Utc>,
    ) -> Result<String, BookingError> {
        if let Some(reference) = &self.reference {
            return Ok(reference.clone());
        }

        let mut missing = Vec::new();
        if self.package.is_none() {
            missing.push("package");
        }
        if self.accommodation.is_none() {
            missing.push("accommodation");
        }
        if self.departure_date.is_none() {
            missing.push("departure date");
        }
        if self.passengers.is_empty() {
            missing.push("passengers");
        }
        if !missing.is_empty() {
            return Err(BookingError::IncompleteDraft { missing });
        }

        let violations = self.validate_passengers(now.date_naive());
        if !violations.is_empty() {
            tracing::warn!(passengers = violations.len(), "confirmation rejected");
            return Err(BookingError::ValidationFailed(violations));
        }

        let reference = generate_reference(&mut rand::thread_rng());
        tracing::info!(%reference, payment_method, "booking confirmed");
        self.reference = Some(reference.clone());
        self.payment_method = Some(payment_method.to_string());
        self.confirmed_at = Some(now);
        Ok(reference)
    }

    /// Clears every field back to the empty draft. The owning wizard
    /// resets its step alongside.
    pub fn reset(&mut self) {
        tracing::info!("booking draft reset");
        *self = Self::new();
    }
}
