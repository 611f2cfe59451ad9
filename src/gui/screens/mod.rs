pub mod admin;
pub mod auth;
pub mod chat;
pub mod home;
pub mod onboarding;
pub mod profile;
pub mod projects;
pub mod services;

use iced::{Element, Task};
use tracing::debug;

use crate::{
    core::{Intent, ScreenProps, View},
    gui::{AppState, Message, widgets},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone + Send + 'static;
    type ParentMessage: std::fmt::Debug + Clone + Send + 'static;
    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// Shorthand for a message that goes straight to the view controller.
pub fn intent<S: Screen<ParentMessage = Intent>>(intent: Intent) -> ScreenMessage<S> {
    ScreenMessage::ParentMessage(intent)
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Onboarding(onboarding::OnboardingScreen),
    Landing(onboarding::LandingScreen),
    Auth(auth::AuthScreen),
    Home(home::HomeScreen),
    ProjectList(projects::ProjectListScreen),
    ProjectDetail(projects::ProjectDetailScreen),
    Profile(profile::ProfileScreen),
    Chat(chat::ChatScreen),
    Estimator(services::EstimatorScreen),
    Consultation(services::ConsultationScreen),
    Shop(services::ShopScreen),
    Bookings(services::BookingsScreen),
    Notifications(services::NotificationsScreen),
    Admin(admin::AdminScreen),
    SuperAdmin(admin::SuperAdminScreen),
}

impl ScreenData {
    /// Fresh screen state for a view.
    pub fn for_view(view: View) -> Self {
        match view {
            View::Onboarding => ScreenData::Onboarding(Default::default()),
            View::Landing => ScreenData::Landing(onboarding::LandingScreen),
            View::Login | View::Register | View::ForgotPassword | View::VerifyOtp | View::AdminLogin => {
                ScreenData::Auth(auth::AuthScreen::new(view))
            }
            View::SmartEstimator => ScreenData::Estimator(Default::default()),
            View::Consultation => ScreenData::Consultation(Default::default()),
            View::UserHome => ScreenData::Home(Default::default()),
            View::ProjectList => ScreenData::ProjectList(projects::ProjectListScreen),
            View::ProjectDetail => ScreenData::ProjectDetail(Default::default()),
            View::MyProfile => ScreenData::Profile(Default::default()),
            View::Chat => ScreenData::Chat(Default::default()),
            View::Bookings => ScreenData::Bookings(services::BookingsScreen),
            View::Shop => ScreenData::Shop(services::ShopScreen),
            View::Notifications => ScreenData::Notifications(services::NotificationsScreen),
            View::AdminDashboard => ScreenData::Admin(Default::default()),
            View::SuperAdminDashboard => ScreenData::SuperAdmin(Default::default()),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, ScreenData::Home(_))
    }

    pub fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Message> {
        let props = match state.controller.screen() {
            Ok(props) => props,
            Err(err) => return widgets::dead_end(&err),
        };
        match self {
            ScreenData::Onboarding(screen) => screen.view(&props).map(Message::Onboarding),
            ScreenData::Landing(screen) => screen.view(&props).map(Message::Landing),
            ScreenData::Auth(screen) => screen.view(&props).map(Message::Auth),
            ScreenData::Home(screen) => screen.view(&props).map(Message::Home),
            ScreenData::ProjectList(screen) => screen.view(&props).map(Message::ProjectList),
            ScreenData::ProjectDetail(screen) => screen.view(&props).map(Message::ProjectDetail),
            ScreenData::Profile(screen) => screen.view(&props).map(Message::Profile),
            ScreenData::Chat(screen) => screen.view(&props).map(Message::Chat),
            ScreenData::Estimator(screen) => screen.view(&props).map(Message::Estimator),
            ScreenData::Consultation(screen) => screen.view(&props).map(Message::Consultation),
            ScreenData::Shop(screen) => screen.view(&props).map(Message::Shop),
            ScreenData::Bookings(screen) => screen.view(&props).map(Message::Bookings),
            ScreenData::Notifications(screen) => screen.view(&props).map(Message::Notifications),
            ScreenData::Admin(screen) => screen.view(&props).map(Message::Admin),
            ScreenData::SuperAdmin(screen) => screen.view(&props).map(Message::SuperAdmin),
        }
    }

    pub fn update(&mut self, message: Message, state: &mut AppState) -> Task<Message> {
        match (self, message) {
            (current, Message::Dispatch(intent)) => {
                let before = state.controller.view();
                if state.controller.dispatch(intent).is_ok() {
                    let after = state.controller.view();
                    if after != before {
                        debug!(from = %before, to = %after, "switching screen");
                        *current = ScreenData::for_view(after);
                    }
                }
                Task::none()
            }
            (ScreenData::Home(screen), Message::Tick) => {
                screen.tick();
                Task::none()
            }
            (ScreenData::Onboarding(screen), Message::Onboarding(msg)) => forward(screen, msg, state, Message::Onboarding),
            (ScreenData::Landing(screen), Message::Landing(msg)) => forward(screen, msg, state, Message::Landing),
            (ScreenData::Auth(screen), Message::Auth(msg)) => forward(screen, msg, state, Message::Auth),
            (ScreenData::Home(screen), Message::Home(msg)) => forward(screen, msg, state, Message::Home),
            (ScreenData::ProjectList(screen), Message::ProjectList(msg)) => forward(screen, msg, state, Message::ProjectList),
            (ScreenData::ProjectDetail(screen), Message::ProjectDetail(msg)) => {
                forward(screen, msg, state, Message::ProjectDetail)
            }
            (ScreenData::Profile(screen), Message::Profile(msg)) => forward(screen, msg, state, Message::Profile),
            (ScreenData::Chat(screen), Message::Chat(msg)) => forward(screen, msg, state, Message::Chat),
            (ScreenData::Estimator(screen), Message::Estimator(msg)) => forward(screen, msg, state, Message::Estimator),
            (ScreenData::Consultation(screen), Message::Consultation(msg)) => {
                forward(screen, msg, state, Message::Consultation)
            }
            (ScreenData::Shop(screen), Message::Shop(msg)) => forward(screen, msg, state, Message::Shop),
            (ScreenData::Bookings(screen), Message::Bookings(msg)) => forward(screen, msg, state, Message::Bookings),
            (ScreenData::Notifications(screen), Message::Notifications(msg)) => {
                forward(screen, msg, state, Message::Notifications)
            }
            (ScreenData::Admin(screen), Message::Admin(msg)) => forward(screen, msg, state, Message::Admin),
            (ScreenData::SuperAdmin(screen), Message::SuperAdmin(msg)) => forward(screen, msg, state, Message::SuperAdmin),
            // late results for a screen that is no longer shown
            _ => Task::none(),
        }
    }
}

fn forward<S>(
    screen: &mut S,
    message: ScreenMessage<S>,
    state: &mut AppState,
    wrap: fn(ScreenMessage<S>) -> Message,
) -> Task<Message>
where
    S: Screen<ParentMessage = Intent> + 'static,
{
    match message {
        ScreenMessage::ScreenMessage(msg) => screen.update(msg, state).map(wrap),
        ScreenMessage::ParentMessage(intent) => Task::done(Message::Dispatch(intent)),
    }
}
