use crate::{
    config::Config,
    core::{ViewController, geofence::LocationSource, summary::SummaryBackend},
};

/// Everything the screens share: the state machine plus the two outside
/// collaborators the admin and project screens call into.
#[derive(Debug)]
pub struct AppState {
    pub controller: ViewController,
    pub summaries: SummaryBackend,
    pub location: LocationSource,
}

impl AppState {
    pub fn new(config: &Config, location: LocationSource) -> Self {
        Self {
            controller: ViewController::default(),
            summaries: config.summary_backend(),
            location,
        }
    }
}
