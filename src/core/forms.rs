//! Form state for the screens that submit data, with their validation.

use time::{Date, Time, format_description::BorrowedFormatItem, macros::format_description};

use crate::core::error::AppError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");
const TIME_DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute] [period]");

pub const QUERY_TOPICS: [&str; 5] = [
    "New Construction",
    "Home Renovation",
    "Site Visit",
    "Payment Question",
    "Other",
];

pub const PROPERTY_TYPES: [&str; 3] = ["Residential", "Commercial", "Plot Development"];

fn required(value: &str, field: &'static str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(())
}

pub fn parse_date(raw: &str) -> Result<Date, AppError> {
    Date::parse(raw.trim(), DATE_FORMAT).map_err(|_| AppError::InvalidDate(format!("date {raw:?}")))
}

pub fn parse_time(raw: &str) -> Result<Time, AppError> {
    Time::parse(raw.trim(), TIME_FORMAT).map_err(|_| AppError::InvalidDate(format!("time {raw:?}")))
}

/// `11:00 AM`
pub fn display_time(time: Time) -> String {
    time.format(TIME_DISPLAY).unwrap_or_else(|_| time.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), AppError> {
        required(&self.name, "name")?;
        required(&self.mobile, "mobile")?;
        required(&self.password, "password")?;
        if self.password != self.confirm_password {
            return Err(AppError::PasswordMismatch);
        }
        Ok(())
    }
}

/// A requested slot, both fields as typed.
#[derive(Debug, Clone, Default)]
pub struct SlotForm {
    pub date: String,
    pub time: String,
}

impl SlotForm {
    pub fn parse(&self) -> Result<(Date, Time), AppError> {
        required(&self.date, "date")?;
        required(&self.time, "time")?;
        Ok((parse_date(&self.date)?, parse_time(&self.time)?))
    }
}

#[derive(Debug, Clone)]
pub struct ConsultationForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub property_type: String,
    pub plot_size: String,
    pub slot: SlotForm,
    pub city: String,
    pub message: String,
    pub agree: bool,
}

impl Default for ConsultationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            property_type: PROPERTY_TYPES[0].to_string(),
            plot_size: String::new(),
            slot: SlotForm::default(),
            city: "Pune".to_string(),
            message: String::new(),
            agree: false,
        }
    }
}

impl ConsultationForm {
    /// The slot is optional; when given it has to parse.
    pub fn validate(&self) -> Result<Option<(Date, Time)>, AppError> {
        if !self.agree {
            return Err(AppError::ConsentRequired);
        }
        required(&self.full_name, "full name")?;
        required(&self.phone, "phone")?;
        if self.slot.date.trim().is_empty() && self.slot.time.trim().is_empty() {
            return Ok(None);
        }
        self.slot.parse().map(Some)
    }
}

/// "Start my first project" call-back request.
#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    pub name: String,
    pub mobile: String,
    pub topic: Option<String>,
    pub details: String,
}

impl InquiryForm {
    pub fn validate(&self) -> Result<&str, AppError> {
        required(&self.name, "name")?;
        required(&self.mobile, "mobile")?;
        self.topic.as_deref().ok_or(AppError::MissingField("topic"))
    }
}
