use safeclue::core::{AdminRole, Intent, MockStore, View, ViewController, seed};
use safeclue::models::{Coordinates, Project, TimelineStage};

/// Mobile number of the seeded user account (John Doe, id `u1`).
pub const USER_MOBILE: &str = "1234567890";
/// Mobile number of the seeded admin; not a `User` account.
pub const ADMIN_MOBILE: &str = "0987654321";

/// Site coordinates of seeded project `p1`.
pub const SKYLINE_SITE: Coordinates = Coordinates::new(37.7749, -122.4194);

/// A controller that has gone past onboarding and sits on the login screen.
pub fn controller_at_login() -> ViewController {
    let mut controller = ViewController::default();
    controller.finish_onboarding();
    assert_eq!(controller.view(), View::Login);
    controller
}

/// A controller with the seeded user logged in on the home screen.
pub fn logged_in_user() -> ViewController {
    let mut controller = controller_at_login();
    controller
        .dispatch(Intent::Login {
            mobile: USER_MOBILE.to_string(),
            password: "anything".to_string(),
        })
        .expect("seeded user should log in");
    controller
}

/// A controller with a staff session of the given role.
pub fn logged_in_staff(role: AdminRole) -> ViewController {
    let mut controller = controller_at_login();
    controller
        .dispatch(Intent::AdminLogin(role))
        .expect("seeded staff account should exist");
    controller
}

/// A bare project owned by `owner` with one stage per progress value.
pub fn make_project(id: &str, owner: &str, progress: &[u8]) -> Project {
    let mut project = seed::projects().remove(1);
    project.id = id.to_string();
    project.user_id = owner.to_string();
    project.transactions.clear();
    project.timeline = progress
        .iter()
        .enumerate()
        .map(|(i, p)| TimelineStage::new(format!("{id}-s{i}"), format!("Stage {i}"), *p))
        .collect();
    project
}

/// Store with only the given projects plus the seeded accounts.
pub fn store_with(projects: Vec<Project>) -> MockStore {
    MockStore::new(seed::accounts(), projects, seed::invoices(), Vec::new(), seed::notifications())
}
