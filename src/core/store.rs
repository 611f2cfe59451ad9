use tracing::info;
use uuid::Uuid;

use crate::{
    core::{
        error::AppError,
        payments::{self, PendingApproval},
        seed,
    },
    models::{Account, Booking, Invoice, NewBooking, Notification, Project, Role},
};

/// Every collection the app works with, held in memory.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    accounts: Vec<Account>,
    projects: Vec<Project>,
    invoices: Vec<Invoice>,
    bookings: Vec<Booking>,
    notifications: Vec<Notification>,
}

impl MockStore {
    /// The demo data set.
    pub fn seeded() -> Self {
        Self {
            accounts: seed::accounts(),
            projects: seed::projects(),
            invoices: seed::invoices(),
            bookings: seed::bookings(),
            notifications: seed::notifications(),
        }
    }

    pub fn new(
        accounts: Vec<Account>,
        projects: Vec<Project>,
        invoices: Vec<Invoice>,
        bookings: Vec<Booking>,
        notifications: Vec<Notification>,
    ) -> Self {
        Self {
            accounts,
            projects,
            invoices,
            bookings,
            notifications,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn find_by_mobile(&self, mobile: &str, role: Role) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.mobile == mobile && account.role == role)
    }

    pub fn first_with_role(&self, role: Role) -> Option<&Account> {
        self.accounts.iter().find(|account| account.role == role)
    }

    pub fn project(&self, id: &str) -> Result<&Project, AppError> {
        self.projects
            .iter()
            .find(|project| project.id == id)
            .ok_or_else(|| AppError::ProjectNotFound(id.to_string()))
    }

    pub fn projects_owned_by<'a>(&'a self, account_id: &'a str) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects
            .iter()
            .filter(move |project| project.is_owned_by(account_id))
    }

    /// Whole-project replace by id.
    pub fn replace_project(&mut self, updated: Project) -> Result<(), AppError> {
        let slot = self
            .projects
            .iter_mut()
            .find(|project| project.id == updated.id)
            .ok_or_else(|| AppError::ProjectNotFound(updated.id.clone()))?;
        *slot = updated;
        Ok(())
    }

    pub fn add_booking(&mut self, booking: NewBooking) -> &Booking {
        let id = format!("b{}-{}", self.bookings.len() + 1, Uuid::new_v4().simple());
        let booking = Booking {
            id,
            kind: booking.kind,
            project_id: booking.project_id,
            project_name: booking.project_name,
            date: booking.date,
            time: booking.time,
        };
        info!(booking = %booking.id, project = %booking.project_name, "new booking added");
        self.bookings.push(booking);
        &self.bookings[self.bookings.len() - 1]
    }

    pub fn mark_as_read(&mut self, notification_id: &str) -> Result<(), AppError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| AppError::NotificationNotFound(notification_id.to_string()))?;
        notification.read = true;
        Ok(())
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn pending_approvals(&self) -> Vec<PendingApproval<'_>> {
        payments::pending_approvals(&self.projects)
    }
}
