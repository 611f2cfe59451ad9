use crate::{
    core::error::AppError,
    models::{Project, TimelineStage, TimelineStatus},
};

impl TimelineStatus {
    pub fn from_progress(progress: u8) -> Self {
        match progress {
            0 => TimelineStatus::Pending,
            100.. => TimelineStatus::Completed,
            _ => TimelineStatus::InProgress,
        }
    }
}

/// Sets one stage's progress, clamped to 100.
pub fn set_progress(project: &mut Project, stage_id: &str, progress: u8) -> Result<(), AppError> {
    let stage = project
        .timeline
        .iter_mut()
        .find(|stage| stage.id == stage_id)
        .ok_or_else(|| AppError::StageNotFound(stage_id.to_string()))?;
    stage.progress = progress.min(100);
    Ok(())
}

/// Rounded mean progress over all stages; an empty timeline is 0.
pub fn overall_progress(timeline: &[TimelineStage]) -> u8 {
    if timeline.is_empty() {
        return 0;
    }
    let total: u32 = timeline.iter().map(|stage| u32::from(stage.progress)).sum();
    (f64::from(total) / timeline.len() as f64).round() as u8
}

pub fn current_stage(timeline: &[TimelineStage]) -> Option<&TimelineStage> {
    timeline
        .iter()
        .find(|stage| stage.status() == TimelineStatus::InProgress)
}
