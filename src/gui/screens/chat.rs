use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, container, row, scrollable, text, text_input},
};

use crate::{
    core::{
        Intent, ScreenProps, Toast,
        chat::{CONFIRM_DELAY, ChatEntry, ContactRequest, Conversation, FollowUp, Sender},
        forms::QUERY_TOPICS,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, placeholder, title},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ChatScreen {
    conversation: Conversation,
    input: String,
    mobile: String,
    topic: Option<&'static str>,
    details: String,
}

#[derive(Debug, Clone)]
pub enum ChatMessage {
    Input(String),
    Send,
    ShowForm,
    Mobile(String),
    Topic(&'static str),
    Details(String),
    SubmitForm,
    Confirm,
}

impl ChatScreen {
    fn contact_form(&self) -> Element<'_, ScreenMessage<Self>> {
        let topics = Row::with_children(QUERY_TOPICS.into_iter().map(|topic| {
            let style = if self.topic == Some(topic) {
                button::primary
            } else {
                button::secondary
            };
            button(text(topic).size(12))
                .style(style)
                .on_press(ScreenMessage::ScreenMessage(ChatMessage::Topic(topic)))
                .into()
        }))
        .spacing(4)
        .wrap();
        card(
            column![
                text_input("Mobile number", &self.mobile)
                    .on_input(|value| ScreenMessage::ScreenMessage(ChatMessage::Mobile(value)))
                    .padding(8),
                topics,
                text_input("Details", &self.details)
                    .on_input(|value| ScreenMessage::ScreenMessage(ChatMessage::Details(value)))
                    .padding(8),
                button("Submit").on_press(ScreenMessage::ScreenMessage(ChatMessage::SubmitForm)),
            ]
            .spacing(8),
        )
    }
}

impl Screen for ChatScreen {
    type Message = ChatMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::Chat { .. } = props else {
            return placeholder();
        };

        let entries = self.conversation.entries().iter().map(|entry| match entry {
            ChatEntry::Text { sender, text: body } => {
                let who = match sender {
                    Sender::User => "You",
                    Sender::Bot => "SafeClue",
                };
                container(column![text(who).size(12), text(body.clone())].spacing(2))
                    .padding(8)
                    .width(Length::Fill)
                    .into()
            }
            ChatEntry::ContactForm => self.contact_form(),
        });

        let mut input = text_input(self.conversation.placeholder(), &self.input).padding(8);
        let mut send = button("Send");
        if !self.conversation.input_locked() {
            input = input
                .on_input(|value| ScreenMessage::ScreenMessage(ChatMessage::Input(value)))
                .on_submit(ScreenMessage::ScreenMessage(ChatMessage::Send));
            send = send.on_press(ScreenMessage::ScreenMessage(ChatMessage::Send));
        }

        column![
            title("Support"),
            scrollable(Column::with_children(entries).spacing(8)).height(Length::Fill),
            row![input.width(Length::Fill), send].spacing(8),
        ]
        .spacing(12)
        .padding(16)
        .into()
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            ChatMessage::Input(value) => self.input = value,
            ChatMessage::Send => {
                let text = std::mem::take(&mut self.input);
                if let FollowUp::ShowFormAfter(delay) = self.conversation.send(&text) {
                    return Task::perform(tokio::time::sleep(delay), |_| {
                        ScreenMessage::ScreenMessage(ChatMessage::ShowForm)
                    });
                }
            }
            ChatMessage::ShowForm => {
                self.conversation.show_form();
                if let Some(query) = self.conversation.first_query() {
                    self.details = query.to_string();
                }
            }
            ChatMessage::Mobile(value) => self.mobile = value,
            ChatMessage::Topic(topic) => self.topic = Some(topic),
            ChatMessage::Details(value) => self.details = value,
            ChatMessage::SubmitForm => {
                let request = ContactRequest {
                    mobile: self.mobile.clone(),
                    topic: self.topic.unwrap_or_default().to_string(),
                    details: self.details.clone(),
                };
                match self.conversation.submit_form(&request) {
                    Ok(()) => {
                        return Task::perform(tokio::time::sleep(CONFIRM_DELAY), |_| {
                            ScreenMessage::ScreenMessage(ChatMessage::Confirm)
                        });
                    }
                    Err(err) => state.controller.notify(Toast::from(&err)),
                }
            }
            ChatMessage::Confirm => self.conversation.confirm(),
        }
        Task::none()
    }
}
