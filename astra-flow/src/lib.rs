pub mod gatekeeper;
pub mod step;

pub use gatekeeper::{BookingFlow, FlowError};
pub use step::BookingStep;
