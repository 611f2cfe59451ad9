use std::time::Duration;

use iced::{
    Element, Length, Task,
    widget::{Row, button, column, row, scrollable, text},
};

use crate::{
    core::{
        Intent, ScreenProps, View,
        carousel::{Carousel, OFFER_IMAGES},
        format::format_safe_coins,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage, intent},
        widgets::{card, placeholder, title},
    },
};

/// Period of the subscription driving the carousel.
pub const TICK: Duration = Duration::from_millis(250);

const SERVICES: [&str; 3] = ["Interior Design", "Home Loans", "Legal Assistance"];

#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    carousel: Carousel,
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    ShowOffer(usize),
}

impl HomeScreen {
    pub fn tick(&mut self) {
        self.carousel.tick(TICK);
    }
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::UserHome { account, .. } = props else {
            return placeholder();
        };

        let current = self.carousel.index();
        let dots = Row::with_children((0..self.carousel.len()).map(|index| {
            let style = if index == current {
                button::primary
            } else {
                button::secondary
            };
            button(text(format!("{}", index + 1)))
                .style(style)
                .on_press(ScreenMessage::ScreenMessage(HomeMessage::ShowOffer(index)))
                .into()
        }))
        .spacing(6);
        let offers = card(
            column![
                text("Offers for you").size(18),
                text(OFFER_IMAGES.get(current).copied().unwrap_or_default()),
                dots,
            ]
            .spacing(8),
        );

        let actions = column![
            button(text("My Projects").center())
                .width(Length::Fill)
                .on_press(intent(Intent::Navigate(View::ProjectList))),
            row![
                button(text("Smart Estimator").center())
                    .width(Length::Fill)
                    .style(button::secondary)
                    .on_press(intent(Intent::Navigate(View::SmartEstimator))),
                button(text("Consultation").center())
                    .width(Length::Fill)
                    .style(button::secondary)
                    .on_press(intent(Intent::Navigate(View::Consultation))),
            ]
            .spacing(8),
            Row::with_children(SERVICES.into_iter().map(|service| {
                button(text(service).center())
                    .width(Length::Fill)
                    .style(button::secondary)
                    .on_press(intent(Intent::ComingSoon(service)))
                    .into()
            }))
            .spacing(8),
        ]
        .spacing(8);

        scrollable(
            column![
                title(format!("Hello, {}", account.name)),
                card(column![
                    text("SafeCoin balance"),
                    text(format_safe_coins(account.safe_coin_balance)).size(26),
                ]),
                offers,
                actions,
            ]
            .spacing(16)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::ShowOffer(index) => self.carousel.go_to(index),
        }
        Task::none()
    }
}
