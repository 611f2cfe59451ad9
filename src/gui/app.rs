use iced::{
    Element, Length, Subscription, Task,
    widget::{column, container},
};
use tracing::info;

use crate::{
    config::Config,
    core::{View, geofence::LocationSource},
    gui::{
        AppState, Message,
        screens::{ScreenData, home::TICK},
        widgets,
    },
};

pub struct SafeClueApp {
    state: AppState,
    screen: ScreenData,
}

impl SafeClueApp {
    pub fn new(state: AppState) -> Self {
        let screen = ScreenData::for_view(state.controller.view());
        Self { state, screen }
    }

    pub fn title(&self) -> String {
        let page = match self.state.controller.view() {
            View::Onboarding => "Welcome",
            View::Landing => "Explore",
            View::Login => "Log in",
            View::Register => "Register",
            View::ForgotPassword => "Forgot password",
            View::VerifyOtp => "Verify OTP",
            View::AdminLogin => "Staff login",
            View::SmartEstimator => "Smart Estimator",
            View::Consultation => "Consultation",
            View::UserHome => "Home",
            View::ProjectList => "Projects",
            View::ProjectDetail => "Project",
            View::MyProfile => "Profile",
            View::Chat => "Support",
            View::Bookings => "Bookings",
            View::Shop => "Shop",
            View::Notifications => "Notifications",
            View::AdminDashboard => "Admin",
            View::SuperAdminDashboard => "Super Admin",
        };
        format!("SafeClue - {page}")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen.update(message, &mut self.state)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controller = &self.state.controller;
        let mut page = column![];
        if let Some(account) = controller.session().account() {
            let unread = controller
                .session()
                .as_user()
                .map(|_| controller.store().unread_count());
            page = page.push(widgets::header(&account.name, unread));
        }
        if !controller.toasts().is_empty() {
            page = page.push(widgets::toasts(controller.toasts().iter()));
        }
        page = page.push(container(self.screen.view(&self.state)).height(Length::Fill));
        if controller.show_bottom_nav() {
            page = page.push(widgets::bottom_nav(controller.view().as_main()));
        }
        page.into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.screen.is_home() {
            iced::time::every(TICK).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

/// Opens the desktop window and blocks until it is closed.
pub fn run(config: Config, lat: Option<f64>, lng: Option<f64>) -> anyhow::Result<()> {
    let location = LocationSource::from_flags(lat, lng);
    info!(?location, api_key = config.has_api_key(), "starting desktop app");
    iced::application(
        move || (SafeClueApp::new(AppState::new(&config, location)), Task::none()),
        SafeClueApp::update,
        SafeClueApp::view,
    )
    .title(SafeClueApp::title)
    .subscription(SafeClueApp::subscription)
    .window_size((420.0, 860.0))
    .run()
    .map_err(|err| anyhow::anyhow!("desktop app failed: {err}"))
}
