//! Integration tests for project timelines and admin edits.

mod common;

use safeclue::core::timeline::{self, current_stage, overall_progress, set_progress};
use safeclue::models::TimelineStatus;

use common::*;

#[test]
fn test_seeded_overall_progress() -> anyhow::Result<()> {
    let store = MockStore::seeded();

    // (100 + 100 + 60 + 0 + 0) / 5
    assert_eq!(overall_progress(&store.project("p1")?.timeline), 52);
    // (100 + 85 + 10 + 0) / 4 = 48.75
    assert_eq!(overall_progress(&store.project("p2")?.timeline), 49);
    assert_eq!(overall_progress(&[]), 0);
    Ok(())
}

#[test]
fn test_current_stage_is_first_in_progress() -> anyhow::Result<()> {
    let store = MockStore::seeded();
    let p2 = store.project("p2")?;

    let stage = current_stage(&p2.timeline).expect("a stage in progress");

    assert_eq!(stage.id, "t2-2");
    // progress 10 is in progress as well, not pending
    assert_eq!(p2.timeline[2].status(), TimelineStatus::InProgress);

    let finished = make_project("done", "u1", &[100, 100]);
    assert!(current_stage(&finished.timeline).is_none());
    Ok(())
}

#[test]
fn test_set_progress_clamps_and_finds_stage() -> anyhow::Result<()> {
    let mut project = make_project("px", "u1", &[0, 0]);

    set_progress(&mut project, "px-s0", 250)?;
    assert_eq!(project.timeline[0].progress, 100);
    assert_eq!(project.timeline[0].status(), TimelineStatus::Completed);

    let err = set_progress(&mut project, "missing", 10).unwrap_err();
    assert_eq!(err, AppError::StageNotFound("missing".to_string()));
    Ok(())
}

#[test]
fn test_admin_updates_timeline() -> anyhow::Result<()> {
    let mut controller = logged_in_staff(AdminRole::Admin);

    controller.dispatch(Intent::UpdateTimeline {
        project_id: "p1".to_string(),
        progress: vec![("t1-3".to_string(), 100), ("t1-4".to_string(), 40)],
    })?;

    let project = controller.store().project("p1")?;
    assert_eq!(project.timeline[2].progress, 100);
    assert_eq!(project.timeline[3].progress, 40);
    assert_eq!(timeline::overall_progress(&project.timeline), 68);
    assert_eq!(
        controller.toasts().latest().map(|t| t.message.as_str()),
        Some("Timeline for Skyline Towers updated.")
    );
    Ok(())
}

#[test]
fn test_timeline_update_is_all_or_nothing() -> anyhow::Result<()> {
    let mut controller = logged_in_staff(AdminRole::Admin);

    let err = controller
        .dispatch(Intent::UpdateTimeline {
            project_id: "p1".to_string(),
            progress: vec![("t1-3".to_string(), 90), ("nope".to_string(), 10)],
        })
        .unwrap_err();

    assert_eq!(err, AppError::StageNotFound("nope".to_string()));
    assert_eq!(controller.store().project("p1")?.timeline[2].progress, 60);
    Ok(())
}

#[test]
fn test_users_cannot_edit_timelines() -> anyhow::Result<()> {
    let mut controller = logged_in_user();

    let err = controller
        .dispatch(Intent::UpdateTimeline {
            project_id: "p1".to_string(),
            progress: vec![("t1-3".to_string(), 100)],
        })
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized { required: Role::Admin, .. }));
    assert_eq!(controller.store().project("p1")?.timeline[2].progress, 60);
    Ok(())
}

#[test]
fn test_update_project_replaces_whole_record() -> anyhow::Result<()> {
    let mut controller = ViewController::new(store_with(vec![make_project("px", "u1", &[10])]));
    controller.admin_login(AdminRole::SuperAdmin)?;
    let mut edited = make_project("px", "u1", &[10, 20]);
    edited.name = "Renamed".to_string();

    controller.dispatch(Intent::UpdateProject(edited))?;

    let project = controller.store().project("px")?;
    assert_eq!(project.name, "Renamed");
    assert_eq!(project.timeline.len(), 2);

    let err = controller
        .dispatch(Intent::UpdateProject(make_project("ghost", "u1", &[])))
        .unwrap_err();
    assert_eq!(err, AppError::ProjectNotFound("ghost".to_string()));
    Ok(())
}

#[test]
fn test_update_project_needs_staff_session() -> anyhow::Result<()> {
    let mut tampered = MockStore::seeded().project("p1")?.clone();
    for tx in &mut tampered.transactions {
        tx.status = TransactionStatus::Paid;
    }

    // 1. No session at all
    let mut anonymous = ViewController::default();
    let err = anonymous
        .dispatch(Intent::UpdateProject(tampered.clone()))
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized { required: Role::Admin, .. }));
    assert_eq!(
        anonymous.store().project("p1")?.transaction("tr3").map(|tx| tx.status),
        Some(TransactionStatus::Pending)
    );

    // 2. The owner cannot bypass the payment review either
    let mut owner = logged_in_user();
    assert!(owner.dispatch(Intent::UpdateProject(tampered)).is_err());
    assert_eq!(
        owner.store().project("p1")?.transaction("tr4").map(|tx| tx.status),
        Some(TransactionStatus::AwaitingApproval)
    );
    Ok(())
}
