//! The navigation state machine and the intents that drive it.
//!
//! `Navigation` holds the pure part (current view plus the main tab to come
//! back to) and is only ever replaced by the value its reducers return.
//! `ViewController` owns it together with the session, the selected project,
//! the data store and the toast queue, and is the only thing screens talk to.

use tracing::{debug, info};

use crate::{
    core::{
        error::AppError,
        forms::{ConsultationForm, InquiryForm, RegisterForm, SlotForm, display_time},
        payments::{self, ReviewDecision},
        session::{AdminRole, Session},
        store::MockStore,
        timeline,
        toast::{Toast, ToastQueue},
        view::{MainView, View},
        wallet::{self, WithdrawalForm},
    },
    models::{Account, BookingKind, NewBooking, Project, Role},
};

/// The fixed one-time code accepted by the mock OTP check.
pub const MOCK_OTP: &str = "123456";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub view: View,
    /// Bottom-nav tab that "back" returns to from secondary screens.
    pub previous_main_view: MainView,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            view: View::Onboarding,
            previous_main_view: MainView::Home,
        }
    }
}

impl Navigation {
    /// Moves to `target`, remembering the current view if it is a main tab.
    pub fn navigate(self, target: View) -> Self {
        Self {
            view: target,
            previous_main_view: self.view.as_main().unwrap_or(self.previous_main_view),
        }
    }

    /// Moves to `target` without touching the back pointer.
    pub fn jump(self, target: View) -> Self {
        Self {
            view: target,
            ..self
        }
    }

    pub fn back(self) -> Self {
        self.navigate(self.previous_main_view.into())
    }

    pub fn back_from_project_detail(self) -> Self {
        let target: View = self.previous_main_view.into();
        // never loop back into the detail screen
        let target = if target == View::ProjectDetail {
            View::UserHome
        } else {
            target
        };
        self.navigate(target)
    }

    /// Fresh state after logout.
    pub fn reset(self, view: View) -> Self {
        Self {
            view,
            previous_main_view: MainView::Home,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Intent {
    Navigate(View),
    FinishOnboarding,
    SelectProject(String),
    BackFromProjectDetail,
    Back,
    Login { mobile: String, password: String },
    AdminLogin(AdminRole),
    Register(RegisterForm),
    ForgotPassword { mobile: String },
    VerifyOtp(String),
    Logout,
    UpdateProject(Project),
    UpdateTimeline {
        project_id: String,
        progress: Vec<(String, u8)>,
    },
    RequestSiteVisit { project_id: String, slot: SlotForm },
    SubmitConsultation(ConsultationForm),
    MarkNotificationRead(String),
    SubmitPaymentProof {
        project_id: String,
        transaction_id: String,
        proof: String,
    },
    ReviewPayment {
        project_id: String,
        transaction_id: String,
        decision: ReviewDecision,
    },
    RequestWithdrawal(WithdrawalForm),
    PurchaseProduct(String),
    SubmitInquiry(InquiryForm),
    ShareReferral,
    ComingSoon(&'static str),
    DismissToast,
}

#[derive(Debug)]
pub struct ViewController {
    nav: Navigation,
    session: Session,
    selected_project: Option<String>,
    store: MockStore,
    toasts: ToastQueue,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(MockStore::seeded())
    }
}

impl ViewController {
    pub fn new(store: MockStore) -> Self {
        Self {
            nav: Navigation::default(),
            session: Session::Anonymous,
            selected_project: None,
            store,
            toasts: ToastQueue::default(),
        }
    }

    pub fn view(&self) -> View {
        self.nav.view
    }

    pub fn previous_main_view(&self) -> MainView {
        self.nav.previous_main_view
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &MockStore {
        &self.store
    }

    pub fn selected_project_id(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    /// The selection resolved against the store, so edits show up at once.
    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_project
            .as_deref()
            .and_then(|id| self.store.project(id).ok())
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Queues a toast produced outside of an intent (async results).
    pub fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Bottom navigation is shown for signed-in sessions on a main tab.
    pub fn show_bottom_nav(&self) -> bool {
        self.session.is_authenticated() && self.nav.view.is_main()
    }

    /// Applies one intent. A refused intent changes nothing and leaves an
    /// error toast behind.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), AppError> {
        let result = self.apply(intent);
        if let Err(err) = &result {
            debug!(view = %self.nav.view, "intent refused: {err}");
            self.toasts.push(Toast::from(err));
        }
        result
    }

    fn apply(&mut self, intent: Intent) -> Result<(), AppError> {
        match intent {
            Intent::Navigate(view) => {
                self.navigate(view);
                Ok(())
            }
            Intent::FinishOnboarding => {
                self.finish_onboarding();
                Ok(())
            }
            Intent::SelectProject(id) => self.select_project(&id),
            Intent::BackFromProjectDetail => {
                self.back_from_project_detail();
                Ok(())
            }
            Intent::Back => {
                self.back();
                Ok(())
            }
            Intent::Login { mobile, password } => self.login(&mobile, &password),
            Intent::AdminLogin(role) => self.admin_login(role),
            Intent::Register(form) => self.register(&form),
            Intent::ForgotPassword { mobile } => self.forgot_password(&mobile),
            Intent::VerifyOtp(code) => self.verify_otp(&code),
            Intent::Logout => {
                self.logout();
                Ok(())
            }
            Intent::UpdateProject(project) => self.update_project(project),
            Intent::UpdateTimeline {
                project_id,
                progress,
            } => self.update_timeline(&project_id, &progress),
            Intent::RequestSiteVisit { project_id, slot } => self.request_site_visit(&project_id, &slot),
            Intent::SubmitConsultation(form) => self.submit_consultation(&form),
            Intent::MarkNotificationRead(id) => self.store.mark_as_read(&id),
            Intent::SubmitPaymentProof {
                project_id,
                transaction_id,
                proof,
            } => self.submit_payment_proof(&project_id, &transaction_id, proof),
            Intent::ReviewPayment {
                project_id,
                transaction_id,
                decision,
            } => self.review_payment(&project_id, &transaction_id, decision),
            Intent::RequestWithdrawal(form) => self.request_withdrawal(&form),
            Intent::PurchaseProduct(product_id) => self.purchase(&product_id),
            Intent::SubmitInquiry(form) => self.submit_inquiry(&form),
            Intent::ShareReferral => {
                let code = self.require_user()?.referral_code.clone();
                self.toasts.push(Toast::info(format!("Share your code: {code}")));
                Ok(())
            }
            Intent::ComingSoon(feature) => {
                self.toasts.push(Toast::info(format!("{feature} service is coming soon!")));
                Ok(())
            }
            Intent::DismissToast => {
                self.toasts.dismiss();
                Ok(())
            }
        }
    }

    // ---- navigation ----

    pub fn navigate(&mut self, target: View) {
        debug!(from = %self.nav.view, to = %target, "navigate");
        self.nav = self.nav.navigate(target);
    }

    pub fn finish_onboarding(&mut self) {
        self.nav = self.nav.jump(View::Login);
    }

    pub fn select_project(&mut self, project_id: &str) -> Result<(), AppError> {
        self.store.project(project_id)?;
        self.selected_project = Some(project_id.to_string());
        self.navigate(View::ProjectDetail);
        Ok(())
    }

    pub fn back_from_project_detail(&mut self) {
        self.selected_project = None;
        self.nav = self.nav.back_from_project_detail();
    }

    /// Back from a secondary screen. The project list always returns home;
    /// visitors without a session go back to the landing page.
    pub fn back(&mut self) {
        match self.nav.view {
            View::SmartEstimator | View::Consultation if !self.session.is_authenticated() => {
                self.nav = self.nav.jump(View::Landing)
            }
            View::ProjectList => self.navigate(View::UserHome),
            View::ProjectDetail => self.back_from_project_detail(),
            _ => self.nav = self.nav.back(),
        }
    }

    // ---- session ----

    pub fn login(&mut self, mobile: &str, _password: &str) -> Result<(), AppError> {
        info!("Attempting login for {mobile}");
        let account = self
            .store
            .find_by_mobile(mobile, Role::User)
            .cloned()
            .ok_or(AppError::InvalidCredentials)?;
        self.session = Session::User(account);
        self.nav = self.nav.jump(View::UserHome);
        Ok(())
    }

    pub fn admin_login(&mut self, role: AdminRole) -> Result<(), AppError> {
        let account = self
            .store
            .first_with_role(role.into())
            .cloned()
            .ok_or(AppError::InvalidCredentials)?;
        info!(account = %account.id, role = %account.role, "staff login");
        self.session = Session::for_account(account);
        let target = match role {
            AdminRole::Admin => View::AdminDashboard,
            AdminRole::SuperAdmin => View::SuperAdminDashboard,
        };
        self.nav = self.nav.jump(target);
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(account) = self.session.account() {
            info!(account = %account.id, "logout");
        }
        self.session = Session::Anonymous;
        self.selected_project = None;
        self.nav = self.nav.reset(View::Login);
    }

    pub fn register(&mut self, form: &RegisterForm) -> Result<(), AppError> {
        form.validate()?;
        info!("Registering {} with mobile {}", form.name, form.mobile);
        let template = self
            .store
            .first_with_role(Role::User)
            .cloned()
            .ok_or(AppError::InvalidCredentials)?;
        let email = form.email.trim();
        let account = Account {
            name: form.name.trim().to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
            mobile: form.mobile.trim().to_string(),
            ..template
        };
        self.session = Session::User(account);
        self.nav = self.nav.jump(View::UserHome);
        self.toasts
            .push(Toast::success("Registration successful! You are now logged in."));
        Ok(())
    }

    pub fn forgot_password(&mut self, mobile: &str) -> Result<(), AppError> {
        let mobile = mobile.trim();
        if mobile.is_empty() {
            return Err(AppError::MissingField("mobile"));
        }
        info!("Password reset OTP sent to {mobile}");
        self.toasts
            .push(Toast::info(format!("An OTP has been sent to {mobile}.")));
        self.nav = self.nav.jump(View::VerifyOtp);
        Ok(())
    }

    pub fn verify_otp(&mut self, code: &str) -> Result<(), AppError> {
        if code != MOCK_OTP {
            return Err(AppError::InvalidOtp);
        }
        self.toasts.push(Toast::success(
            "Your identity has been verified. Please log in.",
        ));
        self.nav = self.nav.jump(View::Login);
        Ok(())
    }

    // ---- gated helpers ----

    fn require_user(&self) -> Result<&Account, AppError> {
        self.session.as_user().ok_or(AppError::Unauthorized {
            view: self.nav.view,
            required: Role::User,
        })
    }

    fn require_admin(&self) -> Result<&Account, AppError> {
        self.session.as_admin().ok_or(AppError::Unauthorized {
            view: self.nav.view,
            required: Role::Admin,
        })
    }

    fn require_staff(&self) -> Result<&Account, AppError> {
        match &self.session {
            Session::Admin(account) | Session::SuperAdmin(account) => Ok(account),
            _ => Err(AppError::Unauthorized {
                view: self.nav.view,
                required: Role::Admin,
            }),
        }
    }

    // ---- data ----

    /// Whole-record replace, reserved for staff sessions.
    pub fn update_project(&mut self, project: Project) -> Result<(), AppError> {
        self.require_staff()?;
        debug!(project = %project.id, "replacing project");
        self.store.replace_project(project)
    }

    fn update_timeline(&mut self, project_id: &str, progress: &[(String, u8)]) -> Result<(), AppError> {
        self.require_admin()?;
        let mut project = self.store.project(project_id)?.clone();
        for (stage_id, value) in progress {
            timeline::set_progress(&mut project, stage_id, *value)?;
        }
        let name = project.name.clone();
        self.store.replace_project(project)?;
        info!(project = %project_id, "timeline updated");
        self.toasts
            .push(Toast::success(format!("Timeline for {name} updated.")));
        Ok(())
    }

    fn request_site_visit(&mut self, project_id: &str, slot: &SlotForm) -> Result<(), AppError> {
        let account_id = self.require_user()?.id.clone();
        let project = self.store.project(project_id)?;
        if project.is_owned_by(&account_id) {
            return Err(AppError::NotPermitted(
                "Site visits are for projects you do not own.",
            ));
        }
        let (date, time) = slot.parse()?;
        let booking = NewBooking {
            kind: BookingKind::SiteVisit,
            project_id: Some(project.id.clone()),
            project_name: project.name.clone(),
            date,
            time,
        };
        let name = booking.project_name.clone();
        self.store.add_booking(booking);
        self.toasts.push(Toast::success(format!(
            "Your visit to {name} on {date} at {} is confirmed. Our team will be in touch with you shortly.",
            display_time(time)
        )));
        Ok(())
    }

    fn submit_consultation(&mut self, form: &ConsultationForm) -> Result<(), AppError> {
        let slot = form.validate()?;
        info!(name = %form.full_name, city = %form.city, "consultation requested");
        if let Some((date, time)) = slot {
            self.store.add_booking(NewBooking {
                kind: BookingKind::Consultation,
                project_id: None,
                project_name: format!("{} consultation", form.property_type),
                date,
                time,
            });
        }
        self.toasts.push(Toast::success(
            "Thank you! Your consultation has been scheduled. Our team will contact you shortly.",
        ));
        self.back();
        Ok(())
    }

    fn submit_payment_proof(&mut self, project_id: &str, transaction_id: &str, proof: String) -> Result<(), AppError> {
        let account_id = self.require_user()?.id.clone();
        let mut project = self.store.project(project_id)?.clone();
        if !project.is_owned_by(&account_id) {
            return Err(AppError::NotPermitted("Only the project owner can submit payments."));
        }
        if proof.trim().is_empty() {
            return Err(AppError::MissingField("payment proof"));
        }
        payments::submit_proof(&mut project, transaction_id, proof)?;
        self.store.replace_project(project)?;
        info!(project = %project_id, transaction = %transaction_id, "payment proof submitted");
        self.toasts.push(Toast::success(
            "Payment proof submitted for approval.",
        ));
        Ok(())
    }

    fn review_payment(&mut self, project_id: &str, transaction_id: &str, decision: ReviewDecision) -> Result<(), AppError> {
        self.require_admin()?;
        let mut project = self.store.project(project_id)?.clone();
        let status = payments::review(&mut project, transaction_id, decision)?;
        self.store.replace_project(project)?;
        info!(project = %project_id, transaction = %transaction_id, %status, "payment reviewed");
        self.toasts
            .push(Toast::success(format!("Transaction {transaction_id} is now {status}.")));
        Ok(())
    }

    fn request_withdrawal(&mut self, form: &WithdrawalForm) -> Result<(), AppError> {
        let account = self.require_user()?;
        let quote = wallet::quote_withdrawal(account, form)?;
        info!(account = %account.id, amount = quote.amount, bank = %form.bank.bank_name, "withdrawal requested");
        self.toasts.push(Toast::success(quote.describe()));
        Ok(())
    }

    fn purchase(&mut self, product_id: &str) -> Result<(), AppError> {
        let product = wallet::check_purchase(self.require_user()?, product_id)?;
        self.toasts.push(Toast::success(format!(
            "Congratulations! You have successfully purchased \"{}\". Your SafeCoin balance will be updated upon confirmation.",
            product.name
        )));
        Ok(())
    }

    fn submit_inquiry(&mut self, form: &InquiryForm) -> Result<(), AppError> {
        let topic = form.validate()?;
        info!(name = %form.name, %topic, "new project inquiry");
        self.toasts.push(Toast::success(format!(
            "Thank you, {}! Our team will contact you shortly regarding your new project inquiry.",
            form.name.trim()
        )));
        Ok(())
    }
}
