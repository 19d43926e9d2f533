pub mod calendar;
pub mod pattern;

pub use calendar::{check_date, generate_slots, launch_windows, AvailabilitySlot, SlotStatus};
pub use pattern::{AvailabilityPattern, Frequency, PatternKind, SeasonWindow};
