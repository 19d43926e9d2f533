use crate::step::BookingStep;
use astra_booking::BookingDraft;
use chrono::Utc;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Illegal transition from {from} to {to}")]
    IllegalTransition { from: BookingStep, to: BookingStep },
}

/// The wizard's step gatekeeper.
///
/// Stores only the current step; completion and reachability are derived
/// from the draft on every query. Rejected navigation leaves the current
/// step unchanged, so the caller can render an inline error instead of
/// moving on.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    current: BookingStep,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            current: BookingStep::PackageSelection,
        }
    }

    pub fn current(&self) -> BookingStep {
        self.current
    }

    /// Completion predicate for a step against the draft's state.
    /// The confirmation step is terminal and never reports complete.
    pub fn is_complete(step: BookingStep, draft: &BookingDraft) -> bool {
        match step {
            BookingStep::PackageSelection => draft.package().is_some(),
            BookingStep::AccommodationSelection => draft.accommodation().is_some(),
            BookingStep::DateSelection => draft.departure_date().is_some(),
            BookingStep::PassengerDetails => {
                draft.all_passengers_complete(Utc::now().date_naive())
            }
            BookingStep::BookingSummary => draft.is_confirmed(),
            BookingStep::BookingConfirmation => false,
        }
    }

    /// A step is accessible when it is at or before the current step, or
    /// when every step strictly before it is complete.
    pub fn is_accessible(&self, step: BookingStep, draft: &BookingDraft) -> bool {
        if step.index() <= self.current.index() {
            return true;
        }
        BookingStep::ALL[..step.index()]
            .iter()
            .all(|prior| Self::is_complete(*prior, draft))
    }

    /// Advances to the next step, provided the current step is complete.
    pub fn go_next(&mut self, draft: &BookingDraft) -> Result<BookingStep, FlowError> {
        let Some(next) = self.current.next() else {
            return Err(FlowError::IllegalTransition {
                from: self.current,
                to: self.current,
            });
        };
        if !Self::is_complete(self.current, draft) {
            tracing::warn!(step = %self.current, "blocked advance from incomplete step");
            return Err(FlowError::IllegalTransition {
                from: self.current,
                to: next,
            });
        }
        tracing::info!(from = %self.current, to = %next, "flow advanced");
        self.current = next;
        Ok(next)
    }

    /// Steps back unconditionally; rejected only at the first step.
    pub fn go_back(&mut self) -> Result<BookingStep, FlowError> {
        let Some(previous) = self.current.previous() else {
            return Err(FlowError::IllegalTransition {
                from: self.current,
                to: self.current,
            });
        };
        self.current = previous;
        Ok(previous)
    }

    /// Jumps to an arbitrary step, subject to accessibility.
    pub fn go_to(
        &mut self,
        step: BookingStep,
        draft: &BookingDraft,
    ) -> Result<BookingStep, FlowError> {
        if !self.is_accessible(step, draft) {
            tracing::warn!(from = %self.current, to = %step, "blocked jump to unreachable step");
            return Err(FlowError::IllegalTransition {
                from: self.current,
                to: step,
            });
        }
        self.current = step;
        Ok(step)
    }

    /// Back to the first step; call alongside the draft's `reset`.
    pub fn reset(&mut self) {
        self.current = BookingStep::PackageSelection;
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_catalog::Catalog;

    fn selections_only_draft() -> BookingDraft {
        let catalog = Catalog::seeded();
        let mut draft = BookingDraft::new();
        draft.select_package(catalog.package("orbital-luxury").unwrap().clone());
        draft
            .select_accommodation(catalog.accommodation("orbital-suite").unwrap().clone())
            .unwrap();
        draft.select_departure_date(chrono::NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        draft
    }

    #[test]
    fn test_starts_at_package_selection() {
        assert_eq!(BookingFlow::new().current(), BookingStep::PackageSelection);
    }

    #[test]
    fn test_go_next_requires_completion() {
        let mut flow = BookingFlow::new();
        let draft = BookingDraft::new();

        let result = flow.go_next(&draft);
        assert_eq!(
            result,
            Err(FlowError::IllegalTransition {
                from: BookingStep::PackageSelection,
                to: BookingStep::AccommodationSelection,
            })
        );
        assert_eq!(flow.current(), BookingStep::PackageSelection);
    }

    #[test]
    fn test_go_next_through_completed_steps() {
        let mut flow = BookingFlow::new();
        let draft = selections_only_draft();

        assert_eq!(
            flow.go_next(&draft).unwrap(),
            BookingStep::AccommodationSelection
        );
        assert_eq!(flow.go_next(&draft).unwrap(), BookingStep::DateSelection);
        assert_eq!(flow.go_next(&draft).unwrap(), BookingStep::PassengerDetails);

        // No passengers entered yet
        assert!(flow.go_next(&draft).is_err());
        assert_eq!(flow.current(), BookingStep::PassengerDetails);
    }

    #[test]
    fn test_go_back_is_unconditional_except_at_start() {
        let mut flow = BookingFlow::new();
        assert!(flow.go_back().is_err());

        let draft = selections_only_draft();
        flow.go_next(&draft).unwrap();
        assert_eq!(flow.go_back().unwrap(), BookingStep::PackageSelection);
    }

    #[test]
    fn test_go_to_allows_revisit_and_gated_skip_ahead() {
        let mut flow = BookingFlow::new();
        let draft = selections_only_draft();

        // Skip ahead: package, accommodation and date are complete.
        assert_eq!(
            flow.go_to(BookingStep::PassengerDetails, &draft).unwrap(),
            BookingStep::PassengerDetails
        );

        // Summary is gated on passenger details, which are empty.
        assert!(flow.go_to(BookingStep::BookingSummary, &draft).is_err());
        assert_eq!(flow.current(), BookingStep::PassengerDetails);

        // Revisiting earlier steps is always allowed.
        assert_eq!(
            flow.go_to(BookingStep::PackageSelection, &draft).unwrap(),
            BookingStep::PackageSelection
        );
    }

    #[test]
    fn test_confirmation_step_never_reports_complete() {
        let draft = BookingDraft::new();
        assert!(!BookingFlow::is_complete(
            BookingStep::BookingConfirmation,
            &draft
        ));
    }

    #[test]
    fn test_reset_returns_to_first_step() {
        let mut flow = BookingFlow::new();
        let draft = selections_only_draft();
        flow.go_next(&draft).unwrap();
        flow.reset();
        assert_eq!(flow.current(), BookingStep::PackageSelection);
    }
}
