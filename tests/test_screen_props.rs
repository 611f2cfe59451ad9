//! Integration tests for per-screen props and session gating.

mod common;

use common::*;

#[test]
fn test_public_screens_need_no_session() -> anyhow::Result<()> {
    let mut controller = controller_at_login();

    for view in [View::Login, View::Landing, View::SmartEstimator, View::Consultation] {
        controller.navigate(view);
        assert!(matches!(controller.screen()?, ScreenProps::Public(v) if v == view));
    }
    Ok(())
}

#[test]
fn test_user_screens_refuse_anonymous() {
    let mut controller = controller_at_login();
    controller.navigate(View::MyProfile);

    let err = controller.screen().unwrap_err();

    assert_eq!(
        err,
        AppError::Unauthorized {
            view: View::MyProfile,
            required: Role::User,
        }
    );
}

#[test]
fn test_dashboards_refuse_wrong_role() {
    let mut user = logged_in_user();
    user.navigate(View::AdminDashboard);
    assert!(matches!(
        user.screen().unwrap_err(),
        AppError::Unauthorized { required: Role::Admin, .. }
    ));

    let mut admin = logged_in_staff(AdminRole::Admin);
    admin.navigate(View::SuperAdminDashboard);
    assert!(matches!(
        admin.screen().unwrap_err(),
        AppError::Unauthorized { required: Role::SuperAdmin, .. }
    ));

    // staff cannot open user screens either
    admin.navigate(View::Shop);
    assert!(matches!(
        admin.screen().unwrap_err(),
        AppError::Unauthorized { required: Role::User, .. }
    ));
}

#[test]
fn test_home_counts_unread() -> anyhow::Result<()> {
    let mut controller = logged_in_user();

    let ScreenProps::UserHome { account, unread } = controller.screen()? else {
        panic!("expected home props");
    };
    assert_eq!(account.id, "u1");
    assert_eq!(unread, 2);

    controller.dispatch(Intent::MarkNotificationRead("n1".to_string()))?;
    assert!(matches!(controller.screen()?, ScreenProps::UserHome { unread: 1, .. }));
    Ok(())
}

#[test]
fn test_profile_lists_owned_projects() -> anyhow::Result<()> {
    let mut controller = logged_in_user();
    controller.navigate(View::MyProfile);

    let ScreenProps::MyProfile { projects, .. } = controller.screen()? else {
        panic!("expected profile props");
    };

    let ids: Vec<&str> = projects.iter().map(|owned| owned.project.id.as_str()).collect();
    assert_eq!(ids, ["p1", "p2"]);

    let skyline = &projects[0];
    assert_eq!(skyline.overall_progress, 52);
    assert_eq!(skyline.current_stage.map(|s| s.id.as_str()), Some("t1-3"));
    assert!(skyline.payment_pending);
    assert!(!projects[1].payment_pending);
    Ok(())
}

#[test]
fn test_project_detail_ownership() -> anyhow::Result<()> {
    let mut controller = logged_in_user();

    controller.select_project("p1")?;
    assert!(matches!(controller.screen()?, ScreenProps::ProjectDetail { is_owner: true, .. }));

    controller.back_from_project_detail();
    controller.select_project("p3")?;
    assert!(matches!(controller.screen()?, ScreenProps::ProjectDetail { is_owner: false, .. }));
    Ok(())
}

#[test]
fn test_project_detail_without_selection() {
    let mut controller = logged_in_user();
    controller.navigate(View::ProjectDetail);

    assert_eq!(controller.screen().unwrap_err(), AppError::NoProjectSelected);
}

#[test]
fn test_admin_dashboard_lists_approvals() -> anyhow::Result<()> {
    let controller = logged_in_staff(AdminRole::Admin);

    let ScreenProps::AdminDashboard { account, projects, approvals } = controller.screen()? else {
        panic!("expected admin props");
    };
    assert_eq!(account.role, Role::Admin);
    assert_eq!(projects.len(), 3);
    assert_eq!(approvals.len(), 1);
    assert_eq!(approvals[0].project.id, "p1");
    assert_eq!(approvals[0].transaction.id, "tr4");
    Ok(())
}

#[test]
fn test_super_admin_sees_everything() -> anyhow::Result<()> {
    let controller = logged_in_staff(AdminRole::SuperAdmin);

    let props = controller.screen()?;

    let ScreenProps::SuperAdminDashboard { accounts, projects, .. } = props else {
        panic!("expected super admin props");
    };
    assert_eq!(accounts.len(), 3);
    assert_eq!(projects.len(), 3);
    assert_eq!(props_account_name(&controller), Some("Super Admin".to_string()));
    Ok(())
}

fn props_account_name(controller: &ViewController) -> Option<String> {
    controller.screen().ok()?.account().map(|a| a.name.clone())
}
