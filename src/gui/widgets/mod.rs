use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{Column, button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{AppError, Intent, MainView, Toast, ToastLevel, View},
    gui::Message,
};

/// Bordered panel used for list entries and form sections.
pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(bordered_box)
        .into()
}

pub fn title<'a, M: 'a>(label: impl Into<String>) -> Element<'a, M> {
    text(label.into()).size(24).into()
}

/// A one-line `label: value` pair.
pub fn field<'a, M: 'a>(label: &str, value: impl Into<String>) -> Element<'a, M> {
    row![text(format!("{label}:")).width(Length::FillPortion(2)), text(value.into()).width(Length::FillPortion(3))]
        .spacing(8)
        .into()
}

/// Shown while a screen has nothing to render for the current props.
pub fn placeholder<'a, M: 'a>() -> Element<'a, M> {
    container(text("Loading..."))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

pub fn header<'a>(name: &str, unread: Option<usize>) -> Element<'a, Message> {
    let mut bar = row![text("SafeClue").size(22), text(name.to_string()).width(Length::Fill)]
        .spacing(12)
        .padding(10)
        .align_y(Center);
    if let Some(unread) = unread {
        bar = bar.push(
            button(text(format!("Alerts ({unread})")))
                .style(button::secondary)
                .on_press(Message::Dispatch(Intent::Navigate(View::Notifications))),
        );
    }
    bar.push(
        button("Logout")
            .style(button::danger)
            .on_press(Message::Dispatch(Intent::Logout)),
    )
    .into()
}

pub fn bottom_nav<'a>(active: Option<MainView>) -> Element<'a, Message> {
    let tabs = MainView::ALL.into_iter().map(|tab| {
        let style = if Some(tab) == active {
            button::primary
        } else {
            button::secondary
        };
        button(text(tab.label()).center())
            .width(Length::Fill)
            .style(style)
            .on_press(Message::Dispatch(Intent::Navigate(tab.into())))
            .into()
    });
    container(iced::widget::Row::with_children(tabs).spacing(4))
        .padding(6)
        .style(|theme: &Theme| bordered_box(theme).border(border::width(1)))
        .into()
}

fn toast_style(level: ToastLevel) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.palette();
        let background = match level {
            ToastLevel::Info => palette.primary,
            ToastLevel::Success => palette.success,
            ToastLevel::Error => palette.danger,
        };
        bordered_box(theme).background(background).color(Color::WHITE)
    }
}

pub fn toasts<'a>(toasts: impl Iterator<Item = &'a Toast>) -> Element<'a, Message> {
    let items = toasts.map(|toast| {
        container(
            row![
                text(toast.message.clone()).width(Length::Fill),
                button("x")
                    .style(button::text)
                    .on_press(Message::Dispatch(Intent::DismissToast)),
            ]
            .align_y(Center),
        )
        .padding(8)
        .width(Length::Fill)
        .style(toast_style(toast.level))
        .into()
    });
    Column::with_children(items).spacing(4).padding(6).into()
}

/// The session cannot open this view; the only way forward is a fresh login.
pub fn dead_end<'a>(err: &AppError) -> Element<'a, Message> {
    container(
        column![
            text("Access denied").size(24),
            text(err.to_string()),
            button("Log out").on_press(Message::Dispatch(Intent::Logout)),
        ]
        .spacing(16)
        .align_x(Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
