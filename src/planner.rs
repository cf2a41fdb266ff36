use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{invalid_input_error, invalid_state_error, Error};

pub const FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't create a trip plan right now. Please try again later.";

#[async_trait]
pub trait TripPlanner {
    async fn generate_plan(&self, request: &str) -> Result<String, Error>;
}

pub type DynTripPlanner = Arc<dyn TripPlanner + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum PlanOutcome {
    Plan(String),
    Failed(String),
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PlannerPanel {
    pub request: String,
    pub is_loading: bool,
    pub outcome: Option<PlanOutcome>,
}

impl PlannerPanel {
    pub fn begin(&mut self, request: &str) -> Result<String, Error> {
        if self.is_loading {
            return Err(invalid_state_error());
        }

        if request.trim().is_empty() {
            return Err(invalid_input_error());
        }

        self.request = request.to_string();
        self.is_loading = true;
        self.outcome = None;

        Ok(self.request.clone())
    }

    pub fn finish(&mut self, result: Result<String, Error>) {
        self.is_loading = false;

        self.outcome = Some(match result {
            Ok(plan) => PlanOutcome::Plan(plan),
            Err(err) => {
                tracing::error!("error generating trip plan: {}", err);
                PlanOutcome::Failed(FALLBACK_MESSAGE.to_string())
            }
        });
    }

    /// Text shown to the visitor, if any.
    pub fn display_text(&self) -> Option<&str> {
        match &self.outcome {
            Some(PlanOutcome::Plan(text)) | Some(PlanOutcome::Failed(text)) => Some(text.as_str()),
            None => None,
        }
    }
}

#[test]
fn plan_shown_verbatim() {
    let mut panel = PlannerPanel::default();
    panel.begin("Five days of hiking").unwrap();
    assert!(panel.is_loading);

    let plan = "**Trip Title**: Misty Peaks\n\n1. Day one: Ella".to_string();
    panel.finish(Ok(plan.clone()));

    assert!(!panel.is_loading);
    assert_eq!(panel.display_text(), Some(plan.as_str()));
}

#[test]
fn failure_shows_fallback_only() {
    let mut panel = PlannerPanel::default();
    panel.begin("Beaches").unwrap();
    panel.finish(Err(crate::error::upstream_error()));

    assert_eq!(panel.display_text(), Some(FALLBACK_MESSAGE));
    assert_eq!(
        panel.outcome,
        Some(PlanOutcome::Failed(FALLBACK_MESSAGE.to_string()))
    );
}

#[test]
fn one_request_at_a_time() {
    let mut panel = PlannerPanel::default();
    assert_eq!(panel.begin("  ").unwrap_err().code, 101);

    panel.begin("Culture triangle").unwrap();
    assert_eq!(panel.begin("Again").unwrap_err().code, 100);
    assert_eq!(panel.request, "Culture triangle");
}
