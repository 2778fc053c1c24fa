//! Google Gemini client.

use std::fmt::{self, Debug, Formatter};

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{build_prompt, parse_recipe_response, RecipeGenerator, RecipeRequest};
use crate::{
    error::{PantryError, Result},
    models::NewRecipe,
};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Public endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Recipe generator backed by a Gemini model.
pub struct GeminiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the client at another server, e.g. a local mock.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Sends one prompt and returns the text of the first candidate.
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("Sending generation request to model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                PantryError::generation(format!("HTTP request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| {
                PantryError::generation(format!("Failed to read response: {}", e.without_url()))
            })?;

        if !status.is_success() {
            debug!("Gemini API returned {status}");
            return Err(Self::map_api_error(status.as_u16(), &text));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| PantryError::generation(format!("Failed to parse Gemini response: {e}")))?;

        if let Some(error) = parsed.error {
            return Err(PantryError::generation(format!(
                "Gemini API error: {}",
                error.message
            )));
        }

        let content = parsed
            .candidates
            .into_iter()
            .flatten()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| PantryError::generation("No content in Gemini response"))?;

        debug!("Received {} characters from Gemini", content.len());
        Ok(content)
    }

    fn map_api_error(status: u16, body: &str) -> PantryError {
        let message = serde_json::from_str::<GenerateResponse>(body)
            .ok()
            .and_then(|response| response.error)
            .map_or_else(|| body.to_string(), |error| error.message);

        PantryError::generation(format!("Gemini API error ({status}): {message}"))
    }
}

#[async_trait]
impl RecipeGenerator for GeminiGenerator {
    async fn generate(&self, request: &RecipeRequest) -> Result<NewRecipe> {
        let prompt = build_prompt(request);
        let text = self.complete(&prompt).await?;
        parse_recipe_response(&text)
    }
}

impl Debug for GeminiGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
