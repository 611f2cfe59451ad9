use crate::core::summary::{DEFAULT_MODEL, SummaryBackend};

/// Runtime settings, assembled from command-line flags and their env
/// fallbacks. Nothing is read from or written to disk.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn new(api_key: Option<String>, model: impl Into<String>, verbose: bool) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            verbose,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn summary_backend(&self) -> SummaryBackend {
        SummaryBackend::from_key(self.api_key.as_deref(), &self.model)
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "safeclue=debug,info" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::SummaryBackend;

    #[test]
    fn blank_key_counts_as_missing() {
        let config = Config::new(Some("  ".to_string()), DEFAULT_MODEL, false);
        assert!(!config.has_api_key());
        assert!(matches!(config.summary_backend(), SummaryBackend::Offline(_)));
    }

    #[test]
    fn key_selects_gemini() {
        let config = Config::new(Some("k".to_string()), "gemini-2.5-pro", true);
        assert!(matches!(config.summary_backend(), SummaryBackend::Gemini(_)));
        assert_eq!(config.default_log_filter(), "safeclue=debug,info");
    }
}
