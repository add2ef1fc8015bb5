//! Gemini API client for itinerary generation
//!
//! One outbound `generateContent` call per plan request: build the prompt,
//! post it with the fixed generation parameters, pull the reply text out of
//! the response envelope, and hand it to the parser. No retries and no
//! caching; a failed request is reported and the caller decides whether to
//! resubmit.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

use crate::Result;
use crate::config::GeminiConfig;
use crate::error::GezginError;
use crate::models::{TravelPlan, TravelRequest};
use crate::parser;
use crate::prompt::{self, GenerationParams};

/// Produces a travel plan for a request.
///
/// Fronts the Gemini-backed client so the interaction layer and tests can
/// substitute their own source.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate_plan(&self, request: &TravelRequest) -> Result<TravelPlan>;
}

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    http: Client,
    /// Resolved once at construction; `None` surfaces as an
    /// authentication error on first use, before any network call.
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client from configuration.
    ///
    /// The credential is resolved here and read-only afterwards.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("gezgin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GezginError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http: client,
            api_key: config.resolve_api_key(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Whether a credential was resolved at construction
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_request_body(prompt_text: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt_text }
                    ]
                }
            ],
            "generationConfig": GenerationParams::FIXED,
        })
    }
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate_plan(&self, request: &TravelRequest) -> Result<TravelPlan> {
        let prompt_text = prompt::build_prompt(request)?;

        let Some(api_key) = &self.api_key else {
            error!("no Gemini API key configured");
            return Err(GezginError::authentication("no Gemini API key configured"));
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(api_key)
        );

        info!(
            model = %self.model,
            destinations = request.destinations.len(),
            "requesting travel plan"
        );

        let response = self
            .http
            .post(&url)
            .json(&Self::build_request_body(&prompt_text))
            .send()
            .await
            .map_err(|e| GezginError::transport(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Gemini request rejected");
            return Err(GezginError::transport(format!(
                "Gemini endpoint returned {status}: {body}"
            )));
        }

        let envelope: wire::GenerateContentResponse = response.json().await.map_err(|e| {
            GezginError::transport(format!("unexpected Gemini response envelope: {e}"))
        })?;

        let text = envelope.into_reply_text().ok_or_else(|| {
            GezginError::transport("Gemini response envelope carried no reply text")
        })?;

        debug!(reply_len = text.len(), "received model reply");

        let plan = parser::parse_plan(&text)?;
        info!(
            city = %plan.city_name,
            days = plan.daily_itinerary.len(),
            "received travel plan"
        );
        Ok(plan)
    }
}

/// Gemini `generateContent` response envelope
mod wire {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GenerateContentResponse {
        pub candidates: Vec<Candidate>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub content: Content,
    }

    #[derive(Debug, Deserialize)]
    pub struct Content {
        pub parts: Vec<Part>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Part {
        pub text: String,
    }

    impl GenerateContentResponse {
        /// The fixed extraction path: first candidate, first part.
        pub fn into_reply_text(self) -> Option<String> {
            self.candidates
                .into_iter()
                .next()?
                .content
                .parts
                .into_iter()
                .next()
                .map(|part| part.text)
        }
    }
}
