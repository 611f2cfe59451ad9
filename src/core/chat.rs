//! Support chat. The first message from the user is answered with a contact
//! form; once that is submitted the team follows up outside the app.

use std::time::Duration;

use crate::core::{error::AppError, forms::QUERY_TOPICS};

pub const GREETING: &str = "Welcome to SafeClue! How can I help you today?";
pub const FORM_PROMPT: &str = "Thanks for reaching out! To help us understand your needs, please select a topic and provide some details.";
pub const CONFIRMATION: &str = "Thank you! Someone from the SafeClue team will contact you within 24 hours.";

/// Delay before the bot shows the contact form.
pub const FORM_DELAY: Duration = Duration::from_millis(1000);
/// Delay before the bot confirms a submitted form.
pub const CONFIRM_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    Text { sender: Sender, text: String },
    /// Inline contact form, removed again once submitted.
    ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub mobile: String,
    pub topic: String,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Open,
    AwaitingForm,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    entries: Vec<ChatEntry>,
    phase: Phase,
    first_query: Option<String>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            entries: vec![ChatEntry::Text {
                sender: Sender::Bot,
                text: GREETING.to_string(),
            }],
            phase: Phase::Open,
            first_query: None,
        }
    }
}

/// What the caller should schedule after a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    None,
    ShowFormAfter(Duration),
}

impl Conversation {
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input_locked(&self) -> bool {
        self.phase != Phase::Open
    }

    pub fn placeholder(&self) -> &'static str {
        match self.phase {
            Phase::Open => "Type your message...",
            Phase::AwaitingForm => "Please fill out the form above...",
            Phase::Submitted => "Our team will contact you shortly.",
        }
    }

    /// The text the user opened with, used to prefill the form.
    pub fn first_query(&self) -> Option<&str> {
        self.first_query.as_deref()
    }

    fn user_message_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ChatEntry::Text { sender: Sender::User, .. }))
            .count()
    }

    pub fn send(&mut self, text: &str) -> FollowUp {
        let text = text.trim();
        if text.is_empty() || self.input_locked() {
            return FollowUp::None;
        }
        let first = self.user_message_count() == 0;
        self.entries.push(ChatEntry::Text {
            sender: Sender::User,
            text: text.to_string(),
        });
        if first {
            self.first_query = Some(text.to_string());
            self.phase = Phase::AwaitingForm;
            return FollowUp::ShowFormAfter(FORM_DELAY);
        }
        FollowUp::None
    }

    pub fn show_form(&mut self) {
        if self.phase != Phase::AwaitingForm || self.entries.contains(&ChatEntry::ContactForm) {
            return;
        }
        self.entries.push(ChatEntry::Text {
            sender: Sender::Bot,
            text: FORM_PROMPT.to_string(),
        });
        self.entries.push(ChatEntry::ContactForm);
    }

    /// Validates and removes the form; the confirmation follows with
    /// [`Conversation::confirm`].
    pub fn submit_form(&mut self, request: &ContactRequest) -> Result<(), AppError> {
        if !QUERY_TOPICS.contains(&request.topic.as_str()) {
            return Err(AppError::MissingField("topic"));
        }
        if request.mobile.trim().is_empty() {
            return Err(AppError::MissingField("mobile"));
        }
        self.entries.retain(|entry| *entry != ChatEntry::ContactForm);
        Ok(())
    }

    pub fn confirm(&mut self) {
        if self.phase == Phase::Submitted {
            return;
        }
        self.entries.push(ChatEntry::Text {
            sender: Sender::Bot,
            text: CONFIRMATION.to_string(),
        });
        self.phase = Phase::Submitted;
    }
}
