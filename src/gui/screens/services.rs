use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, Row, button, column, row, scrollable, text, text_input},
};

use crate::{
    core::{
        Intent, ScreenProps, View,
        estimator::{self, DEFAULT_PLOT_SIZE, FinishQuality},
        format::{format_inr, format_safe_coins},
        forms::{ConsultationForm, PROPERTY_TYPES, display_time},
        wallet::CATALOGUE,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage, intent},
        widgets::{card, field, placeholder, title},
    },
    models::BookingKind,
};

fn back_bar<'a, S: Screen<ParentMessage = Intent> + 'a>(label: &str) -> Element<'a, ScreenMessage<S>> {
    row![
        button("Back").style(button::secondary).on_press(intent(Intent::Back)),
        title(label.to_string()),
    ]
    .spacing(12)
    .align_y(Center)
    .into()
}

#[derive(Debug, Clone)]
pub struct EstimatorScreen {
    plot_size: String,
    quality: FinishQuality,
}

impl Default for EstimatorScreen {
    fn default() -> Self {
        Self {
            plot_size: DEFAULT_PLOT_SIZE.to_string(),
            quality: FinishQuality::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EstimatorMessage {
    PlotSize(String),
    Quality(FinishQuality),
}

impl Screen for EstimatorScreen {
    type Message = EstimatorMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, _props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let estimate = estimator::estimate(estimator::parse_plot_size(&self.plot_size), self.quality);
        let qualities = Column::with_children(FinishQuality::ALL.into_iter().map(|quality| {
            let style = if quality == self.quality {
                button::primary
            } else {
                button::secondary
            };
            button(
                column![
                    text(format!("{quality} ({}/sq ft)", format_inr(quality.rate() as f64))),
                    text(quality.description()).size(12),
                ]
                .spacing(2),
            )
            .width(Length::Fill)
            .style(style)
            .on_press(ScreenMessage::ScreenMessage(EstimatorMessage::Quality(quality)))
            .into()
        }))
        .spacing(6);

        scrollable(
            column![
                back_bar::<Self>("Smart Estimator"),
                text_input("Plot size (sq ft)", &self.plot_size)
                    .on_input(|value| ScreenMessage::ScreenMessage(EstimatorMessage::PlotSize(value)))
                    .padding(8),
                qualities,
                card(
                    column![
                        text("Estimated cost"),
                        text(format_inr(estimate.total as f64)).size(28),
                        text(format!("{} sq ft x {}", estimate.plot_size, format_inr(estimate.rate as f64))).size(12),
                    ]
                    .spacing(4)
                ),
                button("Talk to an expert").on_press(intent(Intent::Navigate(View::Consultation))),
            ]
            .spacing(16)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            EstimatorMessage::PlotSize(value) => self.plot_size = value,
            EstimatorMessage::Quality(quality) => self.quality = quality,
        }
        Task::none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsultationScreen {
    form: ConsultationForm,
}

#[derive(Debug, Clone, Copy)]
pub enum ConsultationField {
    FullName,
    Phone,
    Email,
    PlotSize,
    Date,
    Time,
    City,
    Message,
}

#[derive(Debug, Clone)]
pub enum ConsultationMessage {
    Field(ConsultationField, String),
    PropertyType(&'static str),
    ToggleAgree,
}

impl Screen for ConsultationScreen {
    type Message = ConsultationMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, _props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let form = &self.form;
        let input = |placeholder: &str, value: &str, field: ConsultationField| {
            text_input(placeholder, value)
                .on_input(move |value| ScreenMessage::ScreenMessage(ConsultationMessage::Field(field, value)))
                .padding(8)
        };
        let property_types = Row::with_children(PROPERTY_TYPES.into_iter().map(|kind| {
            let style = if form.property_type == kind {
                button::primary
            } else {
                button::secondary
            };
            button(text(kind).size(12))
                .style(style)
                .on_press(ScreenMessage::ScreenMessage(ConsultationMessage::PropertyType(kind)))
                .into()
        }))
        .spacing(4);
        let agree = if form.agree {
            "[x] I agree to be contacted by SafeClue"
        } else {
            "[ ] I agree to be contacted by SafeClue"
        };

        scrollable(
            column![
                back_bar::<Self>("Free Consultation"),
                input("Full name", &form.full_name, ConsultationField::FullName),
                input("Phone", &form.phone, ConsultationField::Phone),
                input("Email", &form.email, ConsultationField::Email),
                property_types,
                input("Plot size (sq ft)", &form.plot_size, ConsultationField::PlotSize),
                row![
                    input("Preferred date (YYYY-MM-DD)", &form.slot.date, ConsultationField::Date),
                    input("Time (HH:MM)", &form.slot.time, ConsultationField::Time),
                ]
                .spacing(8),
                input("City", &form.city, ConsultationField::City),
                input("Anything we should know?", &form.message, ConsultationField::Message),
                button(agree)
                    .style(button::text)
                    .on_press(ScreenMessage::ScreenMessage(ConsultationMessage::ToggleAgree)),
                button(text("Schedule consultation").center())
                    .width(Length::Fill)
                    .on_press(intent(Intent::SubmitConsultation(form.clone()))),
            ]
            .spacing(12)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        let form = &mut self.form;
        match message {
            ConsultationMessage::Field(field, value) => {
                let slot = match field {
                    ConsultationField::FullName => &mut form.full_name,
                    ConsultationField::Phone => &mut form.phone,
                    ConsultationField::Email => &mut form.email,
                    ConsultationField::PlotSize => &mut form.plot_size,
                    ConsultationField::Date => &mut form.slot.date,
                    ConsultationField::Time => &mut form.slot.time,
                    ConsultationField::City => &mut form.city,
                    ConsultationField::Message => &mut form.message,
                };
                *slot = value;
            }
            ConsultationMessage::PropertyType(kind) => form.property_type = kind.to_string(),
            ConsultationMessage::ToggleAgree => form.agree = !form.agree,
        }
        Task::none()
    }
}

#[derive(Debug, Clone)]
pub struct ShopScreen;

impl Screen for ShopScreen {
    type Message = Infallible;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::Shop { account, .. } = props else {
            return placeholder();
        };
        let balance = account.safe_coin_balance;
        let products = CATALOGUE.iter().map(|product| {
            let affordable = balance >= product.price;
            card(
                column![
                    text(product.name).size(18),
                    text(format!("{} SafeCoins", format_safe_coins(product.price))),
                    button(if affordable { "Redeem" } else { "Not enough SafeCoins" })
                        .on_press(intent(Intent::PurchaseProduct(product.id.to_string()))),
                ]
                .spacing(6),
            )
        });
        scrollable(
            column![
                title("SafeCoin Shop"),
                field("Your balance", format_safe_coins(balance)),
                Column::with_children(products).spacing(10),
            ]
            .spacing(16)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

#[derive(Debug, Clone)]
pub struct BookingsScreen;

impl Screen for BookingsScreen {
    type Message = Infallible;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::Bookings { bookings, .. } = props else {
            return placeholder();
        };
        let entries = bookings.iter().map(|booking| {
            let kind = match booking.kind {
                BookingKind::SiteVisit => "Site visit",
                BookingKind::Consultation => "Consultation",
            };
            card(
                column![
                    text(booking.project_name.clone()).size(18),
                    text(format!("{kind} on {} at {}", booking.date, display_time(booking.time))),
                ]
                .spacing(4),
            )
        });
        let list: Element<'a, ScreenMessage<Self>> = if bookings.is_empty() {
            text("You have no bookings yet.").into()
        } else {
            Column::with_children(entries).spacing(10).into()
        };
        scrollable(
            column![
                title("My Bookings"),
                list,
                button("Book a consultation").on_press(intent(Intent::Navigate(View::Consultation))),
            ]
            .spacing(16)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

#[derive(Debug, Clone)]
pub struct NotificationsScreen;

impl Screen for NotificationsScreen {
    type Message = Infallible;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::Notifications { notifications, .. } = props else {
            return placeholder();
        };
        let entries = notifications.iter().map(|notification| {
            let mut actions = row![].spacing(8);
            if !notification.read {
                actions = actions.push(
                    button("Mark as read")
                        .style(button::secondary)
                        .on_press(intent(Intent::MarkNotificationRead(notification.id.clone()))),
                );
            }
            if let Some(project_id) = &notification.project_id {
                actions = actions.push(button("View project").on_press(intent(Intent::SelectProject(project_id.clone()))));
            }
            let heading = if notification.read {
                notification.title.clone()
            } else {
                format!("* {}", notification.title)
            };
            card(
                column![
                    text(heading).size(18),
                    text(notification.message.clone()),
                    text(format!("{} | {}", notification.kind, notification.timestamp)).size(12),
                    actions,
                ]
                .spacing(4),
            )
        });
        scrollable(
            column![back_bar::<Self>("Notifications"), Column::with_children(entries).spacing(10)]
                .spacing(16)
                .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
