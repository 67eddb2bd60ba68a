//! Google Gemini `generateContent` client (blocking).
//!
//! API Documentation: https://ai.google.dev/api/generate-content

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::forecast::GenerativeModel;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Request / response structures
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl<'a> GenerateRequest<'a> {
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Generated text of a successful reply. When the envelope is not the
/// expected one, or carries no text, the error keeps the body as sent.
pub fn text_from_body(body: &str) -> AppResult<String> {
    let parsed: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Http(format!("unexpected Gemini reply ({e}): {body}")))?;
    parsed
        .text()
        .ok_or_else(|| AppError::Http(format!("Gemini returned no text: {body}")))
}

// ============================================================================
// Client
// ============================================================================

pub struct GeminiClient {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Build a client from the configuration; fails early when no key is set.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let key = cfg.api_key()?;
        Self::new(
            &cfg.api_base_url,
            &cfg.model,
            &key,
            Duration::from_secs(cfg.request_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl GenerativeModel for GeminiClient {
    fn generate_content(&self, prompt: &str) -> AppResult<String> {
        let url = self.endpoint();
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Accept", "application/json")
            .json(&GenerateRequest::from_prompt(prompt))
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(AppError::Http(format!("Gemini API error {status}: {body}")));
        }

        text_from_body(&body)
    }
}
