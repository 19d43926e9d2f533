use crate::pattern::{AvailabilityPattern, PatternKind};
use chrono::{Duration, Months, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Available,
    Limited,
    SoldOut,
}

/// Offerable departure date with its booking status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub date: NaiveDate,
    pub status: SlotStatus,
    pub remaining_seats: Option<u32>,
}

/// Generates availability slots for every pattern-matching date in the
/// inclusive range.
///
/// Status is drawn from the supplied RNG; this stands in for a real
/// scheduling system, so callers that need determinism (tests, demos)
/// pass a seeded `StdRng`.
pub fn generate_slots(
    start: NaiveDate,
    end: NaiveDate,
    pattern: &AvailabilityPattern,
    max_capacity: u32,
    rng: &mut impl Rng,
) -> Vec<AvailabilitySlot> {
    let mut slots = Vec::new();
    let mut date = start;

    while date <= end {
        if pattern.offers(date) {
            slots.push(draw_slot(date, pattern.kind, max_capacity, rng));
        }
        date += Duration::days(1);
    }

    slots
}

/// Single-day availability query.
pub fn check_date(
    date: NaiveDate,
    pattern: &AvailabilityPattern,
    max_capacity: u32,
    rng: &mut impl Rng,
) -> Option<AvailabilitySlot> {
    pattern
        .offers(date)
        .then(|| draw_slot(date, pattern.kind, max_capacity, rng))
}

/// Candidate departure dates for the booking flow: the first window opens
/// `cadence_days` after `from`, then one window every `cadence_days` until
/// `months` months out.
pub fn launch_windows(from: NaiveDate, months: u32, cadence_days: u32) -> Vec<NaiveDate> {
    let end = from + Months::new(months);
    let mut windows = Vec::new();
    let mut date = from + Duration::days(cadence_days as i64);

    while date <= end {
        windows.push(date);
        date += Duration::days(cadence_days as i64);
    }

    windows
}

fn draw_slot(
    date: NaiveDate,
    kind: PatternKind,
    max_capacity: u32,
    rng: &mut impl Rng,
) -> AvailabilitySlot {
    // Per-kind odds: (available, available+limited) thresholds and the
    // capacity fraction left on a limited date.
    let (open_p, limited_p, limited_fraction) = match kind {
        PatternKind::Regular => (0.7, 0.9, 0.3),
        PatternKind::Limited => (0.4, 0.7, 0.2),
        PatternKind::Seasonal { .. } => (0.5, 0.8, 0.25),
    };

    let roll: f64 = rng.gen();
    let (status, remaining_seats) = if roll < open_p {
        (SlotStatus::Available, Some(max_capacity))
    } else if roll < limited_p {
        let remaining = (max_capacity as f64 * limited_fraction) as u32;
        (SlotStatus::Limited, Some(remaining))
    } else {
        (SlotStatus::SoldOut, None)
    };

    AvailabilitySlot {
        date,
        status,
        remaining_seats,
    }
}
