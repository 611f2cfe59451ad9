use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text},
};

use crate::{
    core::{Intent, ScreenProps, View},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage, intent},
        widgets::card,
    },
};

const SLIDES: [(&str, &str); 3] = [
    (
        "Track every stage",
        "Follow your construction timeline with live progress from the site team.",
    ),
    (
        "Pay with confidence",
        "Invoices, payment proofs and approvals in one place.",
    ),
    (
        "Earn SafeCoins",
        "Refer friends, redeem rewards in the shop or withdraw to your bank.",
    ),
];

#[derive(Debug, Clone, Default)]
pub struct OnboardingScreen {
    slide: usize,
}

#[derive(Debug, Clone)]
pub enum OnboardingMessage {
    Next,
    Previous,
}

impl Screen for OnboardingScreen {
    type Message = OnboardingMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, _props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let (heading, body) = SLIDES[self.slide];
        let last = self.slide + 1 == SLIDES.len();
        let next = if last {
            button("Get started").on_press(intent(Intent::FinishOnboarding))
        } else {
            button("Next").on_press(ScreenMessage::ScreenMessage(OnboardingMessage::Next))
        };
        let content = column![
            text(heading).size(28),
            text(body),
            text(format!("{} / {}", self.slide + 1, SLIDES.len())),
            row![
                button("Back")
                    .style(button::secondary)
                    .on_press_maybe((self.slide > 0).then_some(ScreenMessage::ScreenMessage(OnboardingMessage::Previous))),
                next,
            ]
            .spacing(20),
            button("Skip")
                .style(button::text)
                .on_press(intent(Intent::FinishOnboarding)),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            OnboardingMessage::Next => self.slide = (self.slide + 1).min(SLIDES.len() - 1),
            OnboardingMessage::Previous => self.slide = self.slide.saturating_sub(1),
        }
        Task::none()
    }
}

/// Public entry point for visitors without an account.
#[derive(Debug, Clone)]
pub struct LandingScreen;

impl Screen for LandingScreen {
    type Message = Infallible;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, _props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let services = column![
            card(column![
                text("Smart Estimator").size(20),
                text("Get an instant construction cost estimate for your plot."),
                button("Estimate now").on_press(intent(Intent::Navigate(View::SmartEstimator))),
            ]
            .spacing(8)),
            card(column![
                text("Free Consultation").size(20),
                text("Talk to our experts about your new construction."),
                button("Book consultation").on_press(intent(Intent::Navigate(View::Consultation))),
            ]
            .spacing(8)),
        ]
        .spacing(12);

        column![
            text("Build your dream home with SafeClue").size(26),
            services,
            row![
                button("Log in").on_press(intent(Intent::Navigate(View::Login))),
                button("Create account")
                    .style(button::secondary)
                    .on_press(intent(Intent::Navigate(View::Register))),
            ]
            .spacing(12),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
