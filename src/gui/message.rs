use crate::{
    core::Intent,
    gui::screens::{
        ScreenMessage,
        admin::{AdminScreen, SuperAdminScreen},
        auth::AuthScreen,
        chat::ChatScreen,
        home::HomeScreen,
        onboarding::{LandingScreen, OnboardingScreen},
        profile::ProfileScreen,
        projects::{ProjectDetailScreen, ProjectListScreen},
        services::{BookingsScreen, ConsultationScreen, EstimatorScreen, NotificationsScreen, ShopScreen},
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Onboarding(ScreenMessage<OnboardingScreen>),
    Landing(ScreenMessage<LandingScreen>),
    Auth(ScreenMessage<AuthScreen>),
    Home(ScreenMessage<HomeScreen>),
    ProjectList(ScreenMessage<ProjectListScreen>),
    ProjectDetail(ScreenMessage<ProjectDetailScreen>),
    Profile(ScreenMessage<ProfileScreen>),
    Chat(ScreenMessage<ChatScreen>),
    Estimator(ScreenMessage<EstimatorScreen>),
    Consultation(ScreenMessage<ConsultationScreen>),
    Shop(ScreenMessage<ShopScreen>),
    Bookings(ScreenMessage<BookingsScreen>),
    Notifications(ScreenMessage<NotificationsScreen>),
    Admin(ScreenMessage<AdminScreen>),
    SuperAdmin(ScreenMessage<SuperAdminScreen>),
    /// Hand an intent to the view controller.
    Dispatch(Intent),
    /// Carousel clock.
    Tick,
}
