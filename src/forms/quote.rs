use serde::Serialize;

use super::{Fields, FormSchema, FormState};
use crate::error::Error;

pub static QUOTE_SCHEMA: FormSchema = FormSchema {
    fields: &[
        "name",
        "email",
        "phone",
        "travelers",
        "duration",
        "dates",
        "message",
    ],
    required: &["name", "email", "travelers", "duration", "dates", "message"],
    positive_integers: &["travelers", "duration"],
};

/// Custom tour quote request. Lives inline on the home page, so there is no
/// open/close lifecycle; "Submit Another Inquiry" resets it directly.
#[derive(Clone, Debug, Serialize)]
pub struct QuoteForm {
    pub form: FormState,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            form: FormState::new(&QUOTE_SCHEMA),
        }
    }
}

impl QuoteForm {
    pub fn set_fields(&mut self, values: Fields) -> Result<(), Error> {
        self.form.set_fields(values)
    }

    pub fn begin_submit(&mut self) -> Result<Fields, Error> {
        self.form.begin_submit()
    }

    pub fn complete_submit(&mut self, outcome: Result<(), Error>) -> Result<(), Error> {
        self.form.complete_submit(outcome)
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }
}

#[test]
fn phone_is_optional() {
    let mut quote = QuoteForm::default();

    let values: Fields = [
        ("name", "Nimal"),
        ("email", "nimal@example.com"),
        ("travelers", "4"),
        ("duration", "7"),
        ("dates", "Mid-September"),
        ("message", "Tea country and beaches"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    quote.set_fields(values).unwrap();
    assert!(quote.form.can_submit());

    quote.form.set_field("message", "").unwrap();
    assert!(!quote.form.can_submit());
}
