//! Local form state shared by the booking modal and the quote request.
//!
//! A form is a flat map of named string fields with a required subset and two
//! flags. Submission happens in two steps so the caller can release any lock
//! while the [`Submitter`] runs:
//!
//! 1. [`FormState::begin_submit`] validates and raises `is_loading`.
//! 2. [`FormState::complete_submit`] lowers `is_loading` and records the
//!    outcome.

pub mod booking;
pub mod quote;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{invalid_input_error, invalid_state_error, Error};

pub use booking::{BookingModal, CloseTicket};
pub use quote::QuoteForm;

pub type Fields = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Booking,
    Quote,
}

/// Field layout of one kind of form.
#[derive(Debug)]
pub struct FormSchema {
    pub fields: &'static [&'static str],
    pub required: &'static [&'static str],
    /// Required fields that must also hold a whole number of at least one.
    pub positive_integers: &'static [&'static str],
}

#[derive(Clone, Debug, Serialize)]
pub struct FormState {
    pub fields: Fields,
    pub is_loading: bool,
    pub is_submitted: bool,
    #[serde(skip)]
    schema: &'static FormSchema,
}

impl FormState {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            fields: Self::blank_fields(schema),
            is_loading: false,
            is_submitted: false,
            schema,
        }
    }

    fn blank_fields(schema: &FormSchema) -> Fields {
        schema
            .fields
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect()
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.field("email")
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        if self.is_loading || self.is_submitted {
            return Err(invalid_state_error());
        }

        match self.fields.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(invalid_input_error()),
        }
    }

    pub fn set_fields(&mut self, values: Fields) -> Result<(), Error> {
        if values.keys().any(|name| !self.fields.contains_key(name)) {
            return Err(invalid_input_error());
        }

        for (name, value) in values {
            self.set_field(&name, value)?;
        }

        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        let filled = self
            .schema
            .required
            .iter()
            .all(|name| !self.field(name).trim().is_empty());

        let numbers = self
            .schema
            .positive_integers
            .iter()
            .all(|name| matches!(self.field(name).trim().parse::<u32>(), Ok(n) if n >= 1));

        filled && numbers
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.is_submitted && self.is_complete()
    }

    pub fn begin_submit(&mut self) -> Result<Fields, Error> {
        if self.is_loading || self.is_submitted {
            return Err(invalid_state_error());
        }

        if !self.is_complete() {
            return Err(invalid_input_error());
        }

        self.is_loading = true;

        Ok(self.fields.clone())
    }

    pub fn complete_submit(&mut self, outcome: Result<(), Error>) -> Result<(), Error> {
        self.is_loading = false;

        match outcome {
            Ok(()) => {
                self.is_submitted = true;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("form submission failed: {}", err);
                Err(err)
            }
        }
    }

    pub fn reset(&mut self) {
        self.fields = Self::blank_fields(self.schema);
        self.is_loading = false;
        self.is_submitted = false;
    }
}

#[async_trait]
pub trait Submitter {
    async fn submit(&self, kind: FormKind, fields: Fields) -> Result<(), Error>;
}

pub type DynSubmitter = Arc<dyn Submitter + Send + Sync>;

/// Stands in for a backend: waits a fixed delay, then succeeds.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    #[tracing::instrument(skip(self, fields))]
    async fn submit(&self, kind: FormKind, fields: Fields) -> Result<(), Error> {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            email = fields.get("email").map(String::as_str).unwrap_or_default(),
            "simulated submission accepted"
        );

        Ok(())
    }
}
