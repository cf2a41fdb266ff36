use std::time::Duration;

use serde::Serialize;

use super::{Fields, FormSchema, FormState};
use crate::error::{invalid_state_error, Error};

pub static BOOKING_SCHEMA: FormSchema = FormSchema {
    fields: &["name", "email", "phone", "pickupDate", "pickupLocation"],
    required: &["name", "email", "phone", "pickupDate", "pickupLocation"],
    positive_integers: &[],
};

/// How long the modal takes to fade out before its contents are wiped.
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(300);

/// Identifies one close of the modal. Only the latest ticket may reset it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Clone, Debug, Serialize)]
pub struct BookingModal {
    pub is_open: bool,
    pub vehicle: String,
    pub form: FormState,
    #[serde(skip)]
    generation: u64,
    #[serde(skip)]
    reset_pending: bool,
    /// Generation of the submission in flight, if any.
    #[serde(skip)]
    submitting: Option<u64>,
}

impl Default for BookingModal {
    fn default() -> Self {
        Self {
            is_open: false,
            vehicle: String::new(),
            form: FormState::new(&BOOKING_SCHEMA),
            generation: 0,
            reset_pending: false,
            submitting: None,
        }
    }
}

impl BookingModal {
    /// Opens the modal for `vehicle` with a clean form. Opening over an open
    /// modal, or over one still in its close transition, discards what it
    /// held.
    #[tracing::instrument(skip(self))]
    pub fn open(&mut self, vehicle: &str) {
        if self.is_open || self.reset_pending {
            self.apply_reset();
        }

        self.generation += 1;
        self.vehicle = vehicle.to_string();
        self.is_open = true;
    }

    /// First half of closing: hide the modal. The caller finishes with
    /// [`BookingModal::finish_close`] once the transition is over.
    #[tracing::instrument(skip(self))]
    pub fn close(&mut self) -> CloseTicket {
        self.generation += 1;
        self.is_open = false;
        self.reset_pending = true;

        CloseTicket(self.generation)
    }

    /// Second half of closing. Returns `false` for a stale ticket.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if ticket.0 != self.generation || self.is_open || !self.reset_pending {
            return false;
        }

        self.apply_reset();
        true
    }

    fn apply_reset(&mut self) {
        self.form.reset();
        self.reset_pending = false;
        self.submitting = None;
    }

    pub fn set_fields(&mut self, values: Fields) -> Result<(), Error> {
        if !self.is_open {
            return Err(invalid_state_error());
        }

        self.form.set_fields(values)
    }

    /// Submitted payload: the form fields plus the seeded vehicle name,
    /// tagged with the modal generation it belongs to.
    pub fn begin_submit(&mut self) -> Result<(Fields, u64), Error> {
        if !self.is_open {
            return Err(invalid_state_error());
        }

        let mut fields = self.form.begin_submit()?;
        fields.insert("vehicle".into(), self.vehicle.clone());
        self.submitting = Some(self.generation);

        Ok((fields, self.generation))
    }

    /// Records a submission outcome unless the modal was closed or reopened
    /// since the submission began. A dropped outcome still lowers the loading
    /// flag it raised.
    pub fn complete_submit(&mut self, generation: u64, outcome: Result<(), Error>) -> Result<(), Error> {
        if self.submitting == Some(generation) {
            self.submitting = None;
        }

        if generation != self.generation {
            tracing::debug!("dropping outcome of a submission from a closed modal");

            if self.form.is_loading && self.submitting.is_none() {
                self.form.is_loading = false;
            }

            return Ok(());
        }

        self.form.complete_submit(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(modal: &mut BookingModal) {
        let mut values = Fields::new();
        for name in BOOKING_SCHEMA.fields {
            values.insert(name.to_string(), format!("{} value", name));
        }
        values.insert("email".into(), "guest@example.com".into());
        modal.set_fields(values).unwrap();
    }

    #[test]
    fn close_then_finish_resets() {
        let mut modal = BookingModal::default();
        modal.open("Luxury SUV");
        fill(&mut modal);
        let (_, generation) = modal.begin_submit().unwrap();
        modal.complete_submit(generation, Ok(())).unwrap();

        let ticket = modal.close();
        assert!(!modal.is_open);
        // contents stay visible during the transition
        assert!(modal.form.is_submitted);

        assert!(modal.finish_close(ticket));
        assert!(!modal.form.is_submitted);
        assert!(modal.form.fields.values().all(String::is_empty));
    }

    #[test]
    fn reopen_with_new_vehicle_shows_clean_form() {
        let mut modal = BookingModal::default();
        modal.open("Luxury SUV");
        fill(&mut modal);
        let (_, generation) = modal.begin_submit().unwrap();
        modal.complete_submit(generation, Ok(())).unwrap();

        let ticket = modal.close();
        modal.open("Mini Bus");

        assert_eq!(modal.vehicle, "Mini Bus");
        assert!(modal.form.fields.values().all(String::is_empty));
        assert!(!modal.form.is_submitted);

        // the old reset must not touch the reopened modal
        fill(&mut modal);
        assert!(!modal.finish_close(ticket));
        assert_eq!(modal.form.email(), "guest@example.com");
    }

    #[test]
    fn payload_carries_vehicle() {
        let mut modal = BookingModal::default();
        modal.open("Off-road Jeep");
        fill(&mut modal);

        let (payload, _) = modal.begin_submit().unwrap();
        assert_eq!(payload.get("vehicle").unwrap(), "Off-road Jeep");
        assert!(modal.form.is_loading);
    }

    #[test]
    fn outcome_after_close_is_dropped() {
        let mut modal = BookingModal::default();
        modal.open("Compact Sedan");
        fill(&mut modal);
        let (_, generation) = modal.begin_submit().unwrap();

        let ticket = modal.close();
        assert!(modal.finish_close(ticket));
        modal.complete_submit(generation, Ok(())).unwrap();

        assert!(!modal.form.is_submitted);
        assert!(!modal.form.is_loading);
    }

    #[test]
    fn open_over_open_modal_starts_clean() {
        let mut modal = BookingModal::default();
        modal.open("Compact Sedan");
        fill(&mut modal);
        let (_, generation) = modal.begin_submit().unwrap();

        modal.open("Luxury SUV");
        assert_eq!(modal.vehicle, "Luxury SUV");
        assert!(modal.form.fields.values().all(String::is_empty));
        assert!(!modal.form.is_loading);

        modal.complete_submit(generation, Ok(())).unwrap();
        assert!(!modal.form.is_loading);
        assert!(!modal.form.is_submitted);

        fill(&mut modal);
        let (payload, _) = modal.begin_submit().unwrap();
        assert_eq!(payload.get("vehicle").unwrap(), "Luxury SUV");
    }

    #[test]
    fn outcome_during_close_transition_lowers_loading() {
        let mut modal = BookingModal::default();
        modal.open("Mini Bus");
        fill(&mut modal);
        let (_, generation) = modal.begin_submit().unwrap();

        modal.close();
        modal.complete_submit(generation, Ok(())).unwrap();

        assert!(!modal.form.is_loading);
        assert!(!modal.form.is_submitted);
    }

    #[test]
    fn stale_outcome_leaves_current_submission_loading() {
        let mut modal = BookingModal::default();
        modal.open("Compact Sedan");
        fill(&mut modal);
        let (_, stale) = modal.begin_submit().unwrap();

        modal.open("Luxury SUV");
        fill(&mut modal);
        let (_, current) = modal.begin_submit().unwrap();

        modal.complete_submit(stale, Ok(())).unwrap();
        assert!(modal.form.is_loading);

        modal.complete_submit(current, Ok(())).unwrap();
        assert!(!modal.form.is_loading);
        assert!(modal.form.is_submitted);
    }

    #[test]
    fn closed_modal_rejects_input() {
        let mut modal = BookingModal::default();
        assert!(modal.set_fields(Fields::new()).is_err());
        assert!(modal.begin_submit().is_err());
    }
}
