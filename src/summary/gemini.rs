//! Gemini-backed summarizer
//!
//! Calls the `generateContent` REST endpoint with a blocking reqwest
//! client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::SummarizerSettings;
use crate::error::{TrackerError, TrackerResult};

use super::Summarizer;

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

const BLOCK_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
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
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Summarizer that talks to the Gemini API
pub struct GeminiSummarizer {
    http: reqwest::blocking::Client,
    settings: SummarizerSettings,
    api_key: String,
}

impl GeminiSummarizer {
    /// Build from settings, reading the key from `settings.api_key_env`
    pub fn from_settings(settings: &SummarizerSettings) -> TrackerResult<Self> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                TrackerError::Config(format!(
                    "Missing Gemini API key; set the {} environment variable",
                    settings.api_key_env
                ))
            })?;
        Self::with_api_key(settings.clone(), api_key)
    }

    pub fn with_api_key(settings: SummarizerSettings, api_key: String) -> TrackerResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| TrackerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            settings,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn request<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_k: self.settings.top_k,
                top_p: self.settings.top_p,
                max_output_tokens: self.settings.max_output_tokens,
            },
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|&category| SafetySetting {
                    category,
                    threshold: BLOCK_THRESHOLD,
                })
                .collect(),
        }
    }
}

impl Summarizer for GeminiSummarizer {
    fn summarize(&self, prompt: &str) -> TrackerResult<String> {
        let res = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&self.request(prompt))
            .send()
            .map_err(|e| TrackerError::Summarizer(format!("Request failed: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<ErrorResponse>()
                .map(|err| err.error.message)
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TrackerError::Summarizer(format!("{}: {}", status, message)));
        }

        let body = res
            .json::<GenerateResponse>()
            .map_err(|e| TrackerError::Summarizer(format!("Invalid response: {}", e)))?;
        extract_text(body)
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: GenerateResponse) -> TrackerResult<String> {
    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| TrackerError::Summarizer("Response contained no candidates".into()))?;

    Ok(content.parts.into_iter().map(|p| p.text).collect())
}
