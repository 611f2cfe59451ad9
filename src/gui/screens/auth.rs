use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, container, row, text, text_input},
};

use crate::{
    core::{AdminRole, Intent, ScreenProps, View, forms::RegisterForm},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage, intent},
    },
};

/// Login, registration, password recovery and the staff role picker share
/// one screen; `view` says which form is showing.
#[derive(Debug, Clone)]
pub struct AuthScreen {
    view: View,
    mobile: String,
    password: String,
    register: RegisterForm,
    otp: String,
}

#[derive(Debug, Clone, Copy)]
pub enum RegisterField {
    Name,
    Email,
    Mobile,
    Password,
    Confirm,
}

#[derive(Debug, Clone)]
pub enum AuthMessage {
    Mobile(String),
    Password(String),
    Register(RegisterField, String),
    Otp(String),
    Submit,
}

impl AuthScreen {
    pub fn new(view: View) -> Self {
        Self {
            view,
            mobile: String::new(),
            password: String::new(),
            register: RegisterForm::default(),
            otp: String::new(),
        }
    }

    fn submit_intent(&self) -> Option<Intent> {
        match self.view {
            View::Login => Some(Intent::Login {
                mobile: self.mobile.clone(),
                password: self.password.clone(),
            }),
            View::Register => Some(Intent::Register(self.register.clone())),
            View::ForgotPassword => Some(Intent::ForgotPassword {
                mobile: self.mobile.clone(),
            }),
            View::VerifyOtp => Some(Intent::VerifyOtp(self.otp.clone())),
            _ => None,
        }
    }

    fn login_form(&self) -> Column<'_, ScreenMessage<Self>> {
        column![
            text("Welcome back").size(28),
            text_input("Mobile number", &self.mobile)
                .on_input(|value| ScreenMessage::ScreenMessage(AuthMessage::Mobile(value)))
                .padding(8),
            text_input("Password", &self.password)
                .secure(true)
                .on_input(|value| ScreenMessage::ScreenMessage(AuthMessage::Password(value)))
                .on_submit(ScreenMessage::ScreenMessage(AuthMessage::Submit))
                .padding(8),
            button(text("Log in").center())
                .width(Length::Fill)
                .on_press(ScreenMessage::ScreenMessage(AuthMessage::Submit)),
            row![
                button("Forgot password?")
                    .style(button::text)
                    .on_press(intent(Intent::Navigate(View::ForgotPassword))),
                button("Create account")
                    .style(button::text)
                    .on_press(intent(Intent::Navigate(View::Register))),
            ]
            .spacing(12),
            row![
                button("Explore services")
                    .style(button::secondary)
                    .on_press(intent(Intent::Navigate(View::Landing))),
                button("Staff login")
                    .style(button::secondary)
                    .on_press(intent(Intent::Navigate(View::AdminLogin))),
            ]
            .spacing(12),
        ]
    }

    fn register_form(&self) -> Column<'_, ScreenMessage<Self>> {
        let input = |placeholder: &str, value: &str, field: RegisterField| {
            text_input(placeholder, value)
                .on_input(move |value| ScreenMessage::ScreenMessage(AuthMessage::Register(field, value)))
                .padding(8)
        };
        column![
            text("Create your account").size(28),
            input("Full name", &self.register.name, RegisterField::Name),
            input("Email (optional)", &self.register.email, RegisterField::Email),
            input("Mobile number", &self.register.mobile, RegisterField::Mobile),
            input("Password", &self.register.password, RegisterField::Password).secure(true),
            input("Confirm password", &self.register.confirm_password, RegisterField::Confirm)
                .secure(true)
                .on_submit(ScreenMessage::ScreenMessage(AuthMessage::Submit)),
            button(text("Register").center())
                .width(Length::Fill)
                .on_press(ScreenMessage::ScreenMessage(AuthMessage::Submit)),
            button("Already have an account? Log in")
                .style(button::text)
                .on_press(intent(Intent::Navigate(View::Login))),
        ]
    }

    fn forgot_form(&self) -> Column<'_, ScreenMessage<Self>> {
        column![
            text("Reset your password").size(28),
            text("Enter your registered mobile number and we will send you a one-time code."),
            text_input("Mobile number", &self.mobile)
                .on_input(|value| ScreenMessage::ScreenMessage(AuthMessage::Mobile(value)))
                .on_submit(ScreenMessage::ScreenMessage(AuthMessage::Submit))
                .padding(8),
            button(text("Send OTP").center())
                .width(Length::Fill)
                .on_press(ScreenMessage::ScreenMessage(AuthMessage::Submit)),
            button("Back to login")
                .style(button::text)
                .on_press(intent(Intent::Navigate(View::Login))),
        ]
    }

    fn otp_form(&self) -> Column<'_, ScreenMessage<Self>> {
        column![
            text("Verify OTP").size(28),
            text("Enter the 6-digit code sent to your mobile."),
            text_input("OTP", &self.otp)
                .on_input(|value| ScreenMessage::ScreenMessage(AuthMessage::Otp(value)))
                .on_submit(ScreenMessage::ScreenMessage(AuthMessage::Submit))
                .padding(8),
            button(text("Verify").center())
                .width(Length::Fill)
                .on_press(ScreenMessage::ScreenMessage(AuthMessage::Submit)),
            button("Back to login")
                .style(button::text)
                .on_press(intent(Intent::Navigate(View::Login))),
        ]
    }

    fn staff_form(&self) -> Column<'_, ScreenMessage<Self>> {
        column![
            text("Staff login").size(28),
            text("Choose your role to continue."),
            button(text("Engineer / Admin").center())
                .width(Length::Fill)
                .on_press(intent(Intent::AdminLogin(AdminRole::Admin))),
            button(text("Super Admin").center())
                .width(Length::Fill)
                .on_press(intent(Intent::AdminLogin(AdminRole::SuperAdmin))),
            button("Back to login")
                .style(button::text)
                .on_press(intent(Intent::Navigate(View::Login))),
        ]
    }
}

impl Screen for AuthScreen {
    type Message = AuthMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, _props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let form = match self.view {
            View::Register => self.register_form(),
            View::ForgotPassword => self.forgot_form(),
            View::VerifyOtp => self.otp_form(),
            View::AdminLogin => self.staff_form(),
            _ => self.login_form(),
        };
        container(form.spacing(14).padding(24).max_width(420).align_x(Center))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            AuthMessage::Mobile(value) => self.mobile = value,
            AuthMessage::Password(value) => self.password = value,
            AuthMessage::Otp(value) => self.otp = value,
            AuthMessage::Register(field, value) => {
                let slot = match field {
                    RegisterField::Name => &mut self.register.name,
                    RegisterField::Email => &mut self.register.email,
                    RegisterField::Mobile => &mut self.register.mobile,
                    RegisterField::Password => &mut self.register.password,
                    RegisterField::Confirm => &mut self.register.confirm_password,
                };
                *slot = value;
            }
            AuthMessage::Submit => {
                if let Some(intent) = self.submit_intent() {
                    return Task::done(ScreenMessage::ParentMessage(intent));
                }
            }
        }
        Task::none()
    }
}
