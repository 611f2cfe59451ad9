//! Generated progress summaries for clients.
//!
//! The generative service is optional: without an API key every request
//! answers with a fixed explanation, and any failure collapses to an apology
//! string. Callers always get text back.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Project, TimelineStage};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const MISSING_KEY_MESSAGE: &str =
    "API Key is not configured. Please set the API_KEY environment variable.";
pub const SUMMARY_FAILED_MESSAGE: &str =
    "Could not generate summary due to an error. Please check the logs for details.";
pub const REPORT_FAILED_MESSAGE: &str =
    "Could not generate a detailed report due to an error. Please check the logs for details.";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("no API key configured")]
    MissingKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned no text")]
    EmptyResponse,
}

pub trait SummaryService {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, SummaryError>> + Send;
}

fn timeline_lines(timeline: &[TimelineStage]) -> String {
    timeline
        .iter()
        .map(|stage| format!("- {}: {} ({}%)", stage.name, stage.status(), stage.progress))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn progress_prompt(project_name: &str, timeline: &[TimelineStage]) -> String {
    format!(
        "You are a construction project manager. Based on the following timeline data for the project \"{project_name}\", \
write a brief, easy-to-understand progress summary for a client.\n\
Keep it concise and positive, highlighting completed work and current progress.\n\n\
Timeline Data:\n{}\n\nSummary:\n",
        timeline_lines(timeline)
    )
}

pub fn report_prompt(project: &Project) -> String {
    let updates = if project.updates.is_empty() {
        "No recent updates posted.".to_string()
    } else {
        project
            .updates
            .iter()
            .map(|update| format!("- On {}, {} noted: \"{}\"", update.date, update.author, update.caption))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "You are a construction project analyst providing a detailed progress report for a client. The project is \"{name}\".\n\
Analyze the provided timeline data and recent updates to generate a comprehensive report.\n\n\
**Project Data:**\n*Project Name:* {name}\n*Description:* {description}\n\n\
**Timeline Status:**\n{timeline}\n\n\
**Recent Updates:**\n{updates}\n\n\
**Instructions:**\n\
Use markdown. Ensure list items start with a `* ` and are on new lines.\n\
### 1. Overall Summary\n### 2. Key Achievements\n### 3. Areas of Focus & Potential Risks\n### 4. Next Steps\n",
        name = project.name,
        description = project.description,
        timeline = timeline_lines(&project.timeline),
    )
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// `generateContent` over HTTPS.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

impl SummaryService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        let url = format!("{GEMINI_ENDPOINT}/{}:generateContent", self.model);
        debug!(model = %self.model, "requesting generated text");
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        let response: GenerateResponse = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        response.text().ok_or(SummaryError::EmptyResponse)
    }
}

/// Stands in when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSummarizer;

impl SummaryService for OfflineSummarizer {
    async fn generate(&self, _prompt: &str) -> Result<String, SummaryError> {
        Err(SummaryError::MissingKey)
    }
}

/// What the app talks to, picked from configuration.
#[derive(Debug, Clone)]
pub enum SummaryBackend {
    Gemini(GeminiClient),
    Offline(OfflineSummarizer),
}

impl SummaryBackend {
    pub fn from_key(api_key: Option<&str>, model: &str) -> Self {
        match api_key.filter(|key| !key.trim().is_empty()) {
            Some(key) => SummaryBackend::Gemini(GeminiClient::new(key, model)),
            None => SummaryBackend::Offline(OfflineSummarizer),
        }
    }
}

impl SummaryService for SummaryBackend {
    async fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        match self {
            SummaryBackend::Gemini(client) => client.generate(prompt).await,
            SummaryBackend::Offline(offline) => offline.generate(prompt).await,
        }
    }
}

async fn generate_or(service: &impl SummaryService, prompt: &str, failure: &str) -> String {
    match service.generate(prompt).await {
        Ok(text) => text,
        Err(SummaryError::MissingKey) => MISSING_KEY_MESSAGE.to_string(),
        Err(err) => {
            warn!("summary generation failed: {err}");
            failure.to_string()
        }
    }
}

pub async fn progress_summary(service: &impl SummaryService, project: &Project) -> String {
    let prompt = progress_prompt(&project.name, &project.timeline);
    generate_or(service, &prompt, SUMMARY_FAILED_MESSAGE).await
}

pub async fn detailed_report(service: &impl SummaryService, project: &Project) -> String {
    generate_or(service, &report_prompt(project), REPORT_FAILED_MESSAGE).await
}
