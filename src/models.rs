use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// Owner id of projects that belong to nobody and are shown to every user.
pub const SHOWCASE_OWNER: &str = "showcase-user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::User => "User",
            Role::Admin => "Engineer/Admin",
            Role::SuperAdmin => "Super Admin",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub role: Role,
    pub safe_coin_balance: u64,
    pub referral_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineStatus {
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for TimelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimelineStatus::Pending => "Pending",
            TimelineStatus::InProgress => "In Progress",
            TimelineStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// A stage of a project's timeline. The status is never stored, it always
/// follows from `progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStage {
    pub id: String,
    pub name: String,
    pub progress: u8,
    pub notes: Option<String>,
}

impl TimelineStage {
    pub fn new(id: impl Into<String>, name: impl Into<String>, progress: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            progress: progress.min(100),
            notes: None,
        }
    }

    pub fn status(&self) -> TimelineStatus {
        TimelineStatus::from_progress(self.progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    AwaitingApproval,
    Paid,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::AwaitingApproval => "Awaiting Approval",
            TransactionStatus::Paid => "Paid",
            TransactionStatus::Failed => "Failed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: Date,
    pub description: String,
    /// Whole rupees.
    pub amount: u64,
    pub status: TransactionStatus,
    pub invoice_id: String,
    pub proof_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub date: Date,
    pub due_date: Date,
    pub items: Vec<InvoiceItem>,
    pub total_amount: u64,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    Photo,
    Video,
    Note,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub id: String,
    pub kind: UpdateKind,
    pub url: Option<String>,
    pub caption: String,
    pub date: Date,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub location: String,
    pub builder: String,
    pub description: String,
    pub images: Vec<String>,
    pub timeline: Vec<TimelineStage>,
    pub updates: Vec<ProjectUpdate>,
    pub coords: Coordinates,
    pub transactions: Vec<Transaction>,
}

impl Project {
    pub fn is_owned_by(&self, account_id: &str) -> bool {
        self.user_id == account_id
    }

    pub fn is_showcase(&self) -> bool {
        self.user_id == SHOWCASE_OWNER
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn transaction_mut(&mut self, id: &str) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|tx| tx.id == id)
    }

    /// First 100 characters of the description, with an ellipsis when cut.
    pub fn teaser(&self) -> String {
        match self.description.char_indices().nth(100) {
            Some((idx, _)) => format!("{}...", &self.description[..idx]),
            None => self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingKind {
    SiteVisit,
    Consultation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub kind: BookingKind,
    pub project_id: Option<String>,
    pub project_name: String,
    pub date: Date,
    pub time: Time,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub kind: BookingKind,
    pub project_id: Option<String>,
    pub project_name: String,
    pub date: Date,
    pub time: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    ProjectUpdate,
    PaymentReminder,
    GeneralAnnouncement,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationKind::ProjectUpdate => "Project Update",
            NotificationKind::PaymentReminder => "Payment Reminder",
            NotificationKind::GeneralAnnouncement => "General Announcement",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative, human readable ("2 hours ago").
    pub timestamp: String,
    pub read: bool,
    pub project_id: Option<String>,
}
