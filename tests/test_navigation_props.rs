//! Property-based tests for navigation and timeline status.

mod common;

use proptest::prelude::*;
use safeclue::core::{Navigation, timeline};
use safeclue::models::TimelineStatus;

use common::*;

fn any_view() -> impl Strategy<Value = View> {
    (0..View::ALL.len()).prop_map(|i| View::ALL[i])
}

proptest! {
    #[test]
    fn test_previous_main_view_changes_only_when_leaving_a_tab(
        targets in proptest::collection::vec(any_view(), 1..40)
    ) {
        let mut nav = Navigation::default();
        for target in targets {
            let before = nav;
            nav = nav.navigate(target);
            prop_assert_eq!(nav.view, target);
            match before.view.as_main() {
                Some(main) => prop_assert_eq!(nav.previous_main_view, main),
                None => prop_assert_eq!(nav.previous_main_view, before.previous_main_view),
            }
            prop_assert_ne!(View::from(nav.previous_main_view), View::ProjectDetail);
        }
    }

    #[test]
    fn test_back_from_project_detail_lands_on_a_tab(
        targets in proptest::collection::vec(any_view(), 0..20)
    ) {
        let mut nav = Navigation::default();
        for target in targets {
            nav = nav.navigate(target);
        }
        let landed = nav.navigate(View::ProjectDetail).back_from_project_detail();
        prop_assert!(landed.view.is_main());
    }

    #[test]
    fn test_logout_from_any_view(targets in proptest::collection::vec(any_view(), 0..20)) {
        let mut controller = logged_in_user();
        for target in targets {
            controller.navigate(target);
        }
        controller.logout();
        prop_assert_eq!(controller.view(), View::Login);
        prop_assert_eq!(controller.session(), &Session::Anonymous);
        prop_assert!(controller.selected_project_id().is_none());
    }

    #[test]
    fn test_otp_other_than_fixed_code_is_rejected(code in "[ \t\n]{0,2}[0-9]{0,8}[ \t\n]{0,2}") {
        prop_assume!(code != "123456");
        let mut controller = controller_at_login();
        controller.navigate(View::VerifyOtp);
        prop_assert!(controller.dispatch(Intent::VerifyOtp(code)).is_err());
        prop_assert_eq!(controller.view(), View::VerifyOtp);
    }

    #[test]
    fn test_stage_status_follows_progress(progress in 0u8..=100) {
        let stage = TimelineStage::new("s", "Stage", progress);
        let expected = match progress {
            0 => TimelineStatus::Pending,
            100 => TimelineStatus::Completed,
            _ => TimelineStatus::InProgress,
        };
        prop_assert_eq!(stage.status(), expected);
    }

    #[test]
    fn test_overall_progress_stays_in_range(
        progress in proptest::collection::vec(0u8..=100, 0..12)
    ) {
        let project = make_project("px", "u1", &progress);
        let overall = timeline::overall_progress(&project.timeline);
        prop_assert!(overall <= 100);
        if let (Some(min), Some(max)) = (progress.iter().min(), progress.iter().max()) {
            prop_assert!(overall >= *min && overall <= *max);
        }
    }
}
