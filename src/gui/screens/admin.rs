use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, Row, button, column, row, scrollable, slider, text},
};

use crate::{
    core::{
        Intent, ScreenProps, Toast,
        format::{format_inr, format_safe_coins, mask_mobile},
        geofence::{self, CheckInOutcome},
        payments::ReviewDecision,
        summary,
        timeline,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage, intent},
        widgets::{card, placeholder, title},
    },
    models::{Account, Project},
};

/// Engineer dashboard: payment approvals, timeline edits, site check-in and
/// generated reports for one selected project at a time.
#[derive(Debug, Clone, Default)]
pub struct AdminScreen {
    selected: Option<String>,
    /// Unsaved stage progress for the selected project.
    draft: Vec<(String, String, u8)>,
    report: Option<String>,
    generating: bool,
}

#[derive(Debug, Clone)]
pub enum AdminMessage {
    Select(String),
    Progress(usize, u8),
    CheckIn,
    CheckedIn(CheckInOutcome),
    GenerateReport,
    /// Project id and report text.
    ReportReady(String, String),
}

impl AdminScreen {
    fn approvals<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::AdminDashboard { approvals, .. } = props else {
            return placeholder();
        };
        if approvals.is_empty() {
            return text("No payments are waiting for approval.").into();
        }
        let entries = approvals.iter().map(|pending| {
            let tx = pending.transaction;
            let review = |decision: ReviewDecision| {
                intent::<Self>(Intent::ReviewPayment {
                    project_id: pending.project.id.clone(),
                    transaction_id: tx.id.clone(),
                    decision,
                })
            };
            card(
                column![
                    text(format!("{}: {}", pending.project.name, tx.description)),
                    text(format!("{} on {}", format_inr(tx.amount as f64), tx.date)).size(12),
                    text(tx.proof_url.clone().unwrap_or_else(|| "No proof attached".to_string())).size(12),
                    row![
                        button("Approve").style(button::success).on_press(review(ReviewDecision::Approve)),
                        button("Reject").style(button::danger).on_press(review(ReviewDecision::Reject)),
                    ]
                    .spacing(8),
                ]
                .spacing(4),
            )
        });
        Column::with_children(entries).spacing(8).into()
    }

    fn editor<'a>(&'a self, project: &'a Project) -> Element<'a, ScreenMessage<Self>> {
        let sliders = self.draft.iter().enumerate().map(|(index, (_, name, progress))| {
            column![
                row![text(name.clone()).width(Length::Fill), text(format!("{progress}%"))],
                slider(0..=100u8, *progress, move |value| {
                    ScreenMessage::ScreenMessage(AdminMessage::Progress(index, value))
                }),
            ]
            .spacing(4)
            .into()
        });
        let progress = self
            .draft
            .iter()
            .map(|(stage_id, _, progress)| (stage_id.clone(), *progress))
            .collect();
        let report = button(if self.generating { "Generating..." } else { "Detailed report" })
            .on_press_maybe((!self.generating).then_some(ScreenMessage::ScreenMessage(AdminMessage::GenerateReport)));

        let mut content = column![
            text(format!("{} ({})", project.name, project.location)).size(20),
            Column::with_children(sliders).spacing(8),
            row![
                button("Save timeline").on_press(intent(Intent::UpdateTimeline {
                    project_id: project.id.clone(),
                    progress,
                })),
                button("Site check-in")
                    .style(button::secondary)
                    .on_press(ScreenMessage::ScreenMessage(AdminMessage::CheckIn)),
                report,
            ]
            .spacing(8),
        ]
        .spacing(10);
        if let Some(report) = &self.report {
            content = content.push(card(text(report.clone())));
        }
        card(content)
    }
}

impl Screen for AdminScreen {
    type Message = AdminMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::AdminDashboard { account, projects, .. } = props else {
            return placeholder();
        };
        let projects: &'a [Project] = *projects;

        let picker = Row::with_children(projects.iter().map(|project| {
            let style = if self.selected.as_deref() == Some(project.id.as_str()) {
                button::primary
            } else {
                button::secondary
            };
            button(text(format!(
                "{} ({}%)",
                project.name,
                timeline::overall_progress(&project.timeline)
            )))
            .style(style)
            .on_press(ScreenMessage::ScreenMessage(AdminMessage::Select(project.id.clone())))
            .into()
        }))
        .spacing(6)
        .wrap();

        let mut content = column![
            title(format!("Welcome, {}", account.name)),
            text("Pending approvals").size(18),
            self.approvals(props),
            text("Projects").size(18),
            picker,
        ]
        .spacing(14)
        .padding(16);

        let selected = self
            .selected
            .as_deref()
            .and_then(|id| projects.iter().find(|project| project.id == id));
        if let Some(project) = selected {
            content = content.push(self.editor(project));
        }
        scrollable(content).into()
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        let project = self
            .selected
            .as_deref()
            .and_then(|id| state.controller.store().project(id).ok())
            .cloned();
        match message {
            AdminMessage::Select(id) => {
                if let Ok(project) = state.controller.store().project(&id) {
                    self.draft = project
                        .timeline
                        .iter()
                        .map(|stage| (stage.id.clone(), stage.name.clone(), stage.progress))
                        .collect();
                    self.selected = Some(id);
                    self.report = None;
                }
            }
            AdminMessage::Progress(index, value) => {
                if let Some((_, _, progress)) = self.draft.get_mut(index) {
                    *progress = value;
                }
            }
            AdminMessage::CheckIn => {
                if let Some(project) = project {
                    let location = state.location;
                    return Task::perform(
                        async move { geofence::verify_location(&location, project.coords).await },
                        |outcome| ScreenMessage::ScreenMessage(AdminMessage::CheckedIn(outcome)),
                    );
                }
            }
            AdminMessage::CheckedIn(outcome) => {
                let toast = if outcome.is_accepted() {
                    Toast::success(outcome.message())
                } else {
                    Toast::error(outcome.message())
                };
                state.controller.notify(toast);
            }
            AdminMessage::GenerateReport => {
                if let Some(project) = project {
                    let backend = state.summaries.clone();
                    self.generating = true;
                    return Task::perform(
                        async move {
                            let report = summary::detailed_report(&backend, &project).await;
                            (project.id, report)
                        },
                        |(project_id, report)| {
                            ScreenMessage::ScreenMessage(AdminMessage::ReportReady(project_id, report))
                        },
                    );
                }
            }
            AdminMessage::ReportReady(project_id, report) => {
                if self.selected.as_deref() == Some(project_id.as_str()) {
                    self.generating = false;
                    self.report = Some(report);
                }
            }
        }
        Task::none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Table {
    #[default]
    Users,
    Projects,
}

#[derive(Debug, Clone, Default)]
pub struct SuperAdminScreen {
    table: Table,
}

#[derive(Debug, Clone)]
pub enum SuperAdminMessage {
    Show(Table),
}

fn cells<'a, M: 'a>(values: Vec<String>) -> Element<'a, M> {
    Row::with_children(values.into_iter().map(|value| text(value).width(Length::Fill).into()))
        .spacing(8)
        .into()
}

fn users_table<'a, M: 'a>(accounts: &[Account]) -> Element<'a, M> {
    let header = cells(["Name", "Mobile", "Role", "SafeCoins"].map(str::to_string).to_vec());
    let rows = accounts.iter().map(|account| {
        cells(vec![
            account.name.clone(),
            mask_mobile(&account.mobile),
            account.role.to_string(),
            format_safe_coins(account.safe_coin_balance),
        ])
    });
    Column::with_children(std::iter::once(header).chain(rows)).spacing(6).into()
}

fn projects_table<'a, M: 'a>(projects: &[Project]) -> Element<'a, M> {
    let header = cells(["Name", "Location", "Owner", "Progress"].map(str::to_string).to_vec());
    let rows = projects.iter().map(|project| {
        cells(vec![
            project.name.clone(),
            project.location.clone(),
            project.user_id.clone(),
            format!("{}%", timeline::overall_progress(&project.timeline)),
        ])
    });
    Column::with_children(std::iter::once(header).chain(rows)).spacing(6).into()
}

impl Screen for SuperAdminScreen {
    type Message = SuperAdminMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::SuperAdminDashboard { accounts, projects, .. } = props else {
            return placeholder();
        };
        let tab = |table: Table, label: &'static str| {
            button(text(label).center())
                .width(Length::Fill)
                .style(if table == self.table { button::primary } else { button::secondary })
                .on_press(ScreenMessage::ScreenMessage(SuperAdminMessage::Show(table)))
        };
        let body = match self.table {
            Table::Users => users_table(accounts),
            Table::Projects => projects_table(projects),
        };
        scrollable(
            column![
                title("Super Admin"),
                row![tab(Table::Users, "Users"), tab(Table::Projects, "Projects")]
                    .spacing(8)
                    .align_y(Center),
                card(body),
            ]
            .spacing(16)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {
            SuperAdminMessage::Show(table) => self.table = table,
        }
        Task::none()
    }
}
