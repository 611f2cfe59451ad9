use std::fmt;

use serde::{Deserialize, Serialize};

/// Every screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Onboarding,
    Landing,
    Login,
    Register,
    ForgotPassword,
    VerifyOtp,
    AdminLogin,
    SmartEstimator,
    Consultation,
    UserHome,
    ProjectList,
    ProjectDetail,
    MyProfile,
    Chat,
    Bookings,
    Shop,
    Notifications,
    AdminDashboard,
    SuperAdminDashboard,
}

impl View {
    pub const ALL: [View; 19] = [
        View::Onboarding,
        View::Landing,
        View::Login,
        View::Register,
        View::ForgotPassword,
        View::VerifyOtp,
        View::AdminLogin,
        View::SmartEstimator,
        View::Consultation,
        View::UserHome,
        View::ProjectList,
        View::ProjectDetail,
        View::MyProfile,
        View::Chat,
        View::Bookings,
        View::Shop,
        View::Notifications,
        View::AdminDashboard,
        View::SuperAdminDashboard,
    ];

    /// The bottom-navigation tab this view is, if any.
    pub fn as_main(self) -> Option<MainView> {
        match self {
            View::UserHome => Some(MainView::Home),
            View::Bookings => Some(MainView::Bookings),
            View::Shop => Some(MainView::Shop),
            View::Chat => Some(MainView::Chat),
            View::MyProfile => Some(MainView::Profile),
            _ => None,
        }
    }

    pub fn is_main(self) -> bool {
        self.as_main().is_some()
    }

    pub fn id(self) -> &'static str {
        match self {
            View::Onboarding => "onboarding",
            View::Landing => "landing",
            View::Login => "login",
            View::Register => "register",
            View::ForgotPassword => "forgot_password",
            View::VerifyOtp => "verify_otp",
            View::AdminLogin => "admin_login",
            View::SmartEstimator => "smart_estimator",
            View::Consultation => "consultation",
            View::UserHome => "user_home",
            View::ProjectList => "project_list",
            View::ProjectDetail => "project_detail",
            View::MyProfile => "my_profile",
            View::Chat => "chat",
            View::Bookings => "bookings",
            View::Shop => "shop",
            View::Notifications => "notifications",
            View::AdminDashboard => "admin_dashboard",
            View::SuperAdminDashboard => "super_admin_dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The five bottom-navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainView {
    Home,
    Bookings,
    Shop,
    Chat,
    Profile,
}

impl MainView {
    pub const ALL: [MainView; 5] = [
        MainView::Home,
        MainView::Bookings,
        MainView::Shop,
        MainView::Chat,
        MainView::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainView::Home => "Home",
            MainView::Bookings => "Bookings",
            MainView::Shop => "Shop",
            MainView::Chat => "Chat",
            MainView::Profile => "Profile",
        }
    }
}

impl From<MainView> for View {
    fn from(main: MainView) -> Self {
        match main {
            MainView::Home => View::UserHome,
            MainView::Bookings => View::Bookings,
            MainView::Shop => View::Shop,
            MainView::Chat => View::Chat,
            MainView::Profile => View::MyProfile,
        }
    }
}
