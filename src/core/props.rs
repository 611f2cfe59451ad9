//! What each screen gets to render, derived from the session and the store.

use crate::{
    core::{
        controller::ViewController,
        error::AppError,
        payments::{self, PendingApproval},
        timeline,
        view::View,
    },
    models::{Account, Booking, Notification, Project, Role, TimelineStage},
};

/// A project as listed on the profile screen.
#[derive(Debug, Clone, Copy)]
pub struct OwnedProject<'a> {
    pub project: &'a Project,
    pub overall_progress: u8,
    pub current_stage: Option<&'a TimelineStage>,
    pub payment_pending: bool,
}

impl<'a> OwnedProject<'a> {
    fn new(project: &'a Project) -> Self {
        Self {
            project,
            overall_progress: timeline::overall_progress(&project.timeline),
            current_stage: timeline::current_stage(&project.timeline),
            payment_pending: payments::has_pending_payment(project),
        }
    }
}

#[derive(Debug)]
pub enum ScreenProps<'a> {
    /// Screens that only need the view itself (onboarding, auth, estimator...).
    Public(View),
    UserHome {
        account: &'a Account,
        unread: usize,
    },
    ProjectList {
        account: &'a Account,
        projects: &'a [Project],
        unread: usize,
    },
    ProjectDetail {
        account: &'a Account,
        project: &'a Project,
        is_owner: bool,
    },
    MyProfile {
        account: &'a Account,
        projects: Vec<OwnedProject<'a>>,
    },
    Chat {
        account: &'a Account,
        unread: usize,
    },
    Bookings {
        account: &'a Account,
        bookings: &'a [Booking],
        unread: usize,
    },
    Shop {
        account: &'a Account,
        unread: usize,
    },
    Notifications {
        account: &'a Account,
        notifications: &'a [Notification],
    },
    AdminDashboard {
        account: &'a Account,
        projects: &'a [Project],
        approvals: Vec<PendingApproval<'a>>,
    },
    SuperAdminDashboard {
        account: &'a Account,
        accounts: &'a [Account],
        projects: &'a [Project],
    },
}

impl ScreenProps<'_> {
    pub fn view(&self) -> View {
        match self {
            ScreenProps::Public(view) => *view,
            ScreenProps::UserHome { .. } => View::UserHome,
            ScreenProps::ProjectList { .. } => View::ProjectList,
            ScreenProps::ProjectDetail { .. } => View::ProjectDetail,
            ScreenProps::MyProfile { .. } => View::MyProfile,
            ScreenProps::Chat { .. } => View::Chat,
            ScreenProps::Bookings { .. } => View::Bookings,
            ScreenProps::Shop { .. } => View::Shop,
            ScreenProps::Notifications { .. } => View::Notifications,
            ScreenProps::AdminDashboard { .. } => View::AdminDashboard,
            ScreenProps::SuperAdminDashboard { .. } => View::SuperAdminDashboard,
        }
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            ScreenProps::Public(_) => None,
            ScreenProps::UserHome { account, .. }
            | ScreenProps::ProjectList { account, .. }
            | ScreenProps::ProjectDetail { account, .. }
            | ScreenProps::MyProfile { account, .. }
            | ScreenProps::Chat { account, .. }
            | ScreenProps::Bookings { account, .. }
            | ScreenProps::Shop { account, .. }
            | ScreenProps::Notifications { account, .. }
            | ScreenProps::AdminDashboard { account, .. }
            | ScreenProps::SuperAdminDashboard { account, .. } => Some(*account),
        }
    }
}

impl ViewController {
    /// Props for the current view, or `Unauthorized` when the session does
    /// not fit it.
    pub fn screen(&self) -> Result<ScreenProps<'_>, AppError> {
        let view = self.view();
        let store = self.store();
        let unauthorized = |required: Role| AppError::Unauthorized { view, required };

        match view {
            View::Onboarding
            | View::Landing
            | View::Login
            | View::Register
            | View::ForgotPassword
            | View::VerifyOtp
            | View::AdminLogin
            | View::SmartEstimator
            | View::Consultation => Ok(ScreenProps::Public(view)),
            View::AdminDashboard => {
                let account = self.session().as_admin().ok_or_else(|| unauthorized(Role::Admin))?;
                Ok(ScreenProps::AdminDashboard {
                    account,
                    projects: store.projects(),
                    approvals: store.pending_approvals(),
                })
            }
            View::SuperAdminDashboard => {
                let account = self
                    .session()
                    .as_super_admin()
                    .ok_or_else(|| unauthorized(Role::SuperAdmin))?;
                Ok(ScreenProps::SuperAdminDashboard {
                    account,
                    accounts: store.accounts(),
                    projects: store.projects(),
                })
            }
            View::UserHome
            | View::ProjectList
            | View::ProjectDetail
            | View::MyProfile
            | View::Chat
            | View::Bookings
            | View::Shop
            | View::Notifications => {
                let account = self.session().as_user().ok_or_else(|| unauthorized(Role::User))?;
                let unread = store.unread_count();
                let props = match view {
                    View::UserHome => ScreenProps::UserHome { account, unread },
                    View::ProjectList => ScreenProps::ProjectList {
                        account,
                        projects: store.projects(),
                        unread,
                    },
                    View::ProjectDetail => {
                        let project = self.selected_project().ok_or(AppError::NoProjectSelected)?;
                        ScreenProps::ProjectDetail {
                            account,
                            project,
                            is_owner: project.is_owned_by(&account.id),
                        }
                    }
                    View::MyProfile => ScreenProps::MyProfile {
                        account,
                        projects: store
                            .projects_owned_by(&account.id)
                            .map(OwnedProject::new)
                            .collect(),
                    },
                    View::Chat => ScreenProps::Chat { account, unread },
                    View::Bookings => ScreenProps::Bookings {
                        account,
                        bookings: store.bookings(),
                        unread,
                    },
                    View::Shop => ScreenProps::Shop { account, unread },
                    _ => ScreenProps::Notifications {
                        account,
                        notifications: store.notifications(),
                    },
                };
                Ok(props)
            }
        }
    }
}
