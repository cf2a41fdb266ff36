use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    error::{missing_credential_error, upstream_error, Error},
    planner::TripPlanner,
};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const MODEL: &str = "gemini-2.5-flash";

pub const SYSTEM_INSTRUCTION: &str = "You are an expert travel consultant for 'Coco Tours', a premium tour company in Sri Lanka. A customer will describe their dream trip. Your task is to create a friendly, exciting, and personalized preliminary trip plan based on their request.

Your response MUST be structured in markdown and include the following sections:
1.  **Trip Title**: A catchy title for the trip.
2.  **Trip Summary**: A short, exciting paragraph summarizing the adventure.
3.  **Suggested Itinerary**: A day-by-day plan. For each day, list the main activities and location.
4.  **Recommended Vehicle**: Suggest a suitable vehicle from our fleet. Our fleet includes: 'Compact Sedan', 'Luxury SUV', 'Traveler Van', 'Executive Sedan', 'Off-road Jeep', 'Mini Bus'. Briefly explain why it's a good choice.
5.  **Estimated Cost**: Provide a rough cost estimate for the tour package (excluding flights). Give a range (e.g., $1500 - $2000 USD).
6.  **Next Steps**: A concluding paragraph telling the user that this is a preliminary plan and a detailed, formal quote will be sent to their email shortly.

Keep the tone professional, welcoming, and exciting.";

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;

        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();

        if text.trim().is_empty() {
            return None;
        }

        Some(text)
    }
}

/// Trip planner backed by the Gemini `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiPlanner {
    api_base: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GeminiPlanner {
    pub fn new(api_base: impl Into<String>, api_key: Option<String>) -> Self {
        if api_key.is_none() {
            tracing::warn!("no API key configured, trip plans will not be generated");
        }

        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TripPlanner for GeminiPlanner {
    #[tracing::instrument(skip(self, request))]
    async fn generate_plan(&self, request: &str) -> Result<String, Error> {
        let key = self.api_key.as_ref().ok_or_else(missing_credential_error)?;
        let url = format!("{}/models/{}:generateContent", self.api_base, MODEL);

        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(SYSTEM_INSTRUCTION.to_string()),
                }],
            },
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part {
                    text: Some(request.to_string()),
                }],
            }],
        };

        let res = self
            .client
            .post(url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let detail = res.text().await.unwrap_or_default();
            tracing::error!("Gemini API error {}: {}", status, detail);
            return Err(upstream_error());
        }

        let data: GenerateResponse = res.json().await?;

        data.text().ok_or_else(upstream_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn path() -> String {
        format!("/v1beta/models/{}:generateContent", MODEL)
    }

    #[tokio::test]
    async fn returns_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", path().as_str())
            .match_header("x-goog-api-key", "secret")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "Two weeks, wildlife"}]}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r###"{"candidates": [{"content": {"role": "model", "parts": [{"text": "## Wild Lanka"}, {"text": "\nDay 1: Yala"}]}}]}"###,
            )
            .create_async()
            .await;

        let planner = GeminiPlanner::new(format!("{}/v1beta", server.url()), Some("secret".into()));
        let plan = planner.generate_plan("Two weeks, wildlife").await.unwrap();

        mock.assert_async().await;
        assert_eq!(plan, "## Wild Lanka\nDay 1: Yala");
    }

    #[tokio::test]
    async fn sends_system_instruction() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", path().as_str())
            .match_body(Matcher::PartialJson(serde_json::json!({
                "systemInstruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]}
            })))
            .with_status(200)
            .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}"#)
            .create_async()
            .await;

        let planner = GeminiPlanner::new(format!("{}/v1beta", server.url()), Some("k".into()));
        planner.generate_plan("anything").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", path().as_str())
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let planner = GeminiPlanner::new(format!("{}/v1beta", server.url()), Some("k".into()));

        assert_eq!(planner.generate_plan("x").await.unwrap_err().code, 4);
    }

    #[tokio::test]
    async fn empty_candidates_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", path().as_str())
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let planner = GeminiPlanner::new(format!("{}/v1beta", server.url()), Some("k".into()));

        assert_eq!(planner.generate_plan("x").await.unwrap_err().code, 4);
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let planner = GeminiPlanner::new("http://127.0.0.1:9", None);

        assert_eq!(planner.generate_plan("x").await.unwrap_err().code, 7);
    }
}
