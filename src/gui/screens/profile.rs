use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, row, scrollable, text, text_input},
};

use crate::{
    core::{
        Intent, ScreenProps,
        format::{format_inr, format_safe_coins, mask_mobile},
        forms::{InquiryForm, QUERY_TOPICS},
        wallet::{self, WithdrawalForm, WithdrawalQuote},
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage, intent},
        widgets::{card, field, placeholder, title},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ProfileScreen {
    withdrawal: WithdrawalForm,
    inquiry: InquiryForm,
}

#[derive(Debug, Clone)]
pub enum ProfileMessage {
    Amount(String),
    BankName(String),
    AccountNumber(String),
    Ifsc(String),
    InquiryName(String),
    InquiryMobile(String),
    InquiryTopic(&'static str),
    InquiryDetails(String),
}

impl ProfileScreen {
    fn withdrawal_card(&self, balance: u64) -> Element<'_, ScreenMessage<Self>> {
        let quote = WithdrawalQuote::for_amount(wallet::preview_amount(&self.withdrawal.amount));
        let bank = &self.withdrawal.bank;
        card(
            column![
                text("Withdraw SafeCoins").size(18),
                text(format!(
                    "Available: {} | minimum {}",
                    format_safe_coins(balance),
                    format_safe_coins(wallet::MIN_WITHDRAWAL)
                ))
                .size(12),
                text_input("Amount", &self.withdrawal.amount)
                    .on_input(|value| ScreenMessage::ScreenMessage(ProfileMessage::Amount(value)))
                    .padding(8),
                text_input("Bank name", &bank.bank_name)
                    .on_input(|value| ScreenMessage::ScreenMessage(ProfileMessage::BankName(value)))
                    .padding(8),
                text_input("Account number", &bank.account_number)
                    .on_input(|value| ScreenMessage::ScreenMessage(ProfileMessage::AccountNumber(value)))
                    .padding(8),
                text_input("IFSC", &bank.ifsc)
                    .on_input(|value| ScreenMessage::ScreenMessage(ProfileMessage::Ifsc(value)))
                    .padding(8),
                field("Service charge (2%)", format_inr(quote.service_charge)),
                field("Platform charge (1%)", format_inr(quote.platform_charge)),
                field("You receive", format_inr(quote.payout())),
                button("Request withdrawal").on_press(intent(Intent::RequestWithdrawal(self.withdrawal.clone()))),
            ]
            .spacing(8),
        )
    }

    fn inquiry_card(&self) -> Element<'_, ScreenMessage<Self>> {
        let topics = Row::with_children(QUERY_TOPICS.into_iter().map(|topic| {
            let style = if self.inquiry.topic.as_deref() == Some(topic) {
                button::primary
            } else {
                button::secondary
            };
            button(text(topic).size(12))
                .style(style)
                .on_press(ScreenMessage::ScreenMessage(ProfileMessage::InquiryTopic(topic)))
                .into()
        }))
        .spacing(4)
        .wrap();
        card(
            column![
                text("Start my first project").size(18),
                text_input("Your name", &self.inquiry.name)
                    .on_input(|value| ScreenMessage::ScreenMessage(ProfileMessage::InquiryName(value)))
                    .padding(8),
                text_input("Mobile number", &self.inquiry.mobile)
                    .on_input(|value| ScreenMessage::ScreenMessage(ProfileMessage::InquiryMobile(value)))
                    .padding(8),
                topics,
                text_input("Tell us about your project", &self.inquiry.details)
                    .on_input(|value| ScreenMessage::ScreenMessage(ProfileMessage::InquiryDetails(value)))
                    .padding(8),
                button("Request a call back").on_press(intent(Intent::SubmitInquiry(self.inquiry.clone()))),
            ]
            .spacing(8),
        )
    }
}

impl Screen for ProfileScreen {
    type Message = ProfileMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::MyProfile { account, projects } = props else {
            return placeholder();
        };

        let owned = projects.iter().map(|owned| {
            let stage = owned
                .current_stage
                .map(|stage| format!("Current stage: {}", stage.name))
                .unwrap_or_else(|| "No stage in progress".to_string());
            let payment = if owned.payment_pending {
                "Payment pending"
            } else {
                "Payments up to date"
            };
            card(
                column![
                    row![
                        text(owned.project.name.clone()).size(18).width(Length::Fill),
                        text(format!("{}%", owned.overall_progress)),
                    ],
                    text(stage).size(12),
                    text(payment).size(12),
                    button("Open").on_press(intent(Intent::SelectProject(owned.project.id.clone()))),
                ]
                .spacing(4),
            )
        });

        scrollable(
            column![
                title("My Profile"),
                card(
                    column![
                        field("Name", account.name.clone()),
                        field("Mobile", mask_mobile(&account.mobile)),
                        field("Email", account.email.clone().unwrap_or_else(|| "-".to_string())),
                        field("Role", account.role.to_string()),
                        field("SafeCoins", format_safe_coins(account.safe_coin_balance)),
                        row![
                            text(format!("Referral code: {}", account.referral_code)).width(Length::Fill),
                            button("Share").on_press(intent(Intent::ShareReferral)),
                        ],
                    ]
                    .spacing(6)
                ),
                text("My projects").size(18),
                Column::with_children(owned).spacing(8),
                self.withdrawal_card(account.safe_coin_balance),
                self.inquiry_card(),
                button(text("Log out").center())
                    .width(Length::Fill)
                    .style(button::danger)
                    .on_press(intent(Intent::Logout)),
            ]
            .spacing(16)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            ProfileMessage::Amount(value) => self.withdrawal.amount = value,
            ProfileMessage::BankName(value) => self.withdrawal.bank.bank_name = value,
            ProfileMessage::AccountNumber(value) => self.withdrawal.bank.account_number = value,
            ProfileMessage::Ifsc(value) => self.withdrawal.bank.ifsc = value,
            ProfileMessage::InquiryName(value) => self.inquiry.name = value,
            ProfileMessage::InquiryMobile(value) => self.inquiry.mobile = value,
            ProfileMessage::InquiryTopic(topic) => self.inquiry.topic = Some(topic.to_string()),
            ProfileMessage::InquiryDetails(value) => self.inquiry.details = value,
        }
        Task::none()
    }
}
