//! Integration tests for generated summaries, using local fakes for the
//! generative service.

mod common;

use safeclue::core::summary::{
    self, MISSING_KEY_MESSAGE, OfflineSummarizer, REPORT_FAILED_MESSAGE, SUMMARY_FAILED_MESSAGE,
    SummaryBackend, SummaryError, SummaryService,
};

use common::*;

/// Echoes a canned answer.
struct CannedService(&'static str);

impl SummaryService for CannedService {
    async fn generate(&self, _prompt: &str) -> Result<String, SummaryError> {
        Ok(self.0.to_string())
    }
}

/// Always fails like a service that returned no candidates.
struct EmptyService;

impl SummaryService for EmptyService {
    async fn generate(&self, _prompt: &str) -> Result<String, SummaryError> {
        Err(SummaryError::EmptyResponse)
    }
}

fn skyline() -> Project {
    MockStore::seeded().project("p1").cloned().expect("seeded p1")
}

#[tokio::test]
async fn test_missing_key_message() {
    let project = skyline();

    assert_eq!(summary::progress_summary(&OfflineSummarizer, &project).await, MISSING_KEY_MESSAGE);
    assert_eq!(summary::detailed_report(&OfflineSummarizer, &project).await, MISSING_KEY_MESSAGE);
}

#[tokio::test]
async fn test_backend_without_key_is_offline() {
    let backend = SummaryBackend::from_key(Some("  "), summary::DEFAULT_MODEL);

    assert!(matches!(backend, SummaryBackend::Offline(_)));
    assert_eq!(summary::progress_summary(&backend, &skyline()).await, MISSING_KEY_MESSAGE);
}

#[tokio::test]
async fn test_failures_collapse_to_apology() {
    let project = skyline();

    assert_eq!(summary::progress_summary(&EmptyService, &project).await, SUMMARY_FAILED_MESSAGE);
    assert_eq!(summary::detailed_report(&EmptyService, &project).await, REPORT_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_service_text_is_returned() {
    let text = summary::progress_summary(&CannedService("All on track."), &skyline()).await;

    assert_eq!(text, "All on track.");
}

#[test]
fn test_progress_prompt_lists_stages() {
    let project = skyline();

    let prompt = summary::progress_prompt(&project.name, &project.timeline);

    assert!(prompt.contains("\"Skyline Towers\""));
    assert!(prompt.contains("- Foundation: Completed (100%)"));
    assert!(prompt.contains("- Flooring & Tiling: In Progress (60%)"));
    assert!(prompt.contains("- Completion: Pending (0%)"));
    assert!(prompt.ends_with("Summary:\n"));
}

#[test]
fn test_report_prompt_includes_updates() {
    let mut project = skyline();

    let prompt = summary::report_prompt(&project);
    assert!(prompt.contains("Jane Smith noted: \"Flooring work started on the 5th floor.\""));
    assert!(prompt.contains("### 4. Next Steps"));

    project.updates.clear();
    assert!(summary::report_prompt(&project).contains("No recent updates posted."));
}
