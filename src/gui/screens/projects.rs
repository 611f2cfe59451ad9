use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, Row, button, column, progress_bar, row, scrollable, text, text_input},
};

use crate::{
    core::{
        Intent, ScreenProps,
        format::format_inr,
        forms::SlotForm,
        payments,
        summary,
        timeline,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage, intent},
        widgets::{card, field, placeholder, title},
    },
    models::{Project, TransactionStatus, UpdateKind},
};

fn progress_row<'a, M: 'a>(label: String, progress: u8) -> Element<'a, M> {
    column![
        row![text(label).width(Length::Fill), text(format!("{progress}%"))],
        progress_bar(0.0..=100.0, f32::from(progress)),
    ]
    .spacing(4)
    .into()
}

#[derive(Debug, Clone)]
pub struct ProjectListScreen;

impl Screen for ProjectListScreen {
    type Message = Infallible;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::ProjectList { account, projects, .. } = props else {
            return placeholder();
        };
        let cards = projects.iter().map(|project: &Project| {
            let badge = if project.is_owned_by(&account.id) {
                "Your project"
            } else if project.is_showcase() {
                "Showcase"
            } else {
                "Project"
            };
            card(
                column![
                    row![text(project.name.clone()).size(20).width(Length::Fill), text(badge)],
                    text(project.location.clone()),
                    text(project.teaser()),
                    progress_row("Overall progress".to_string(), timeline::overall_progress(&project.timeline)),
                    button("View details").on_press(intent(Intent::SelectProject(project.id.clone()))),
                ]
                .spacing(6),
            )
        });
        scrollable(
            column![
                row![
                    button("Back").style(button::secondary).on_press(intent(Intent::Back)),
                    title("Projects"),
                ]
                .spacing(12)
                .align_y(Center),
                Column::with_children(cards).spacing(12),
            ]
            .spacing(16)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Overview,
    Timeline,
    Updates,
    Payments,
}

impl DetailTab {
    const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Timeline,
        DetailTab::Updates,
        DetailTab::Payments,
    ];

    fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Timeline => "Timeline",
            DetailTab::Updates => "Updates",
            DetailTab::Payments => "Payments",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectDetailScreen {
    tab: DetailTab,
    slot: SlotForm,
    proof: String,
    summary: Option<String>,
    summarizing: bool,
}

#[derive(Debug, Clone)]
pub enum ProjectDetailMessage {
    ShowTab(DetailTab),
    VisitDate(String),
    VisitTime(String),
    RequestVisit,
    Proof(String),
    SubmitProof(String),
    Summarize,
    /// Project id and generated text.
    SummaryReady(String, String),
}

impl ProjectDetailScreen {
    fn overview<'a>(&'a self, project: &'a Project, is_owner: bool) -> Column<'a, ScreenMessage<Self>> {
        let mut content = column![
            field("Location", project.location.clone()),
            field("Builder", project.builder.clone()),
            text(project.description.clone()),
            progress_row("Overall progress".to_string(), timeline::overall_progress(&project.timeline)),
        ]
        .spacing(8);
        if !is_owner {
            content = content.push(card(
                column![
                    text("Book a site visit").size(18),
                    text_input("Date (YYYY-MM-DD)", &self.slot.date)
                        .on_input(|value| ScreenMessage::ScreenMessage(ProjectDetailMessage::VisitDate(value)))
                        .padding(8),
                    text_input("Time (HH:MM)", &self.slot.time)
                        .on_input(|value| ScreenMessage::ScreenMessage(ProjectDetailMessage::VisitTime(value)))
                        .padding(8),
                    button("Request visit").on_press(ScreenMessage::ScreenMessage(ProjectDetailMessage::RequestVisit)),
                ]
                .spacing(8),
            ));
        }
        content
    }

    fn timeline<'a>(&'a self, project: &'a Project) -> Column<'a, ScreenMessage<Self>> {
        let stages = project.timeline.iter().map(|stage| {
            progress_row(format!("{} ({})", stage.name, stage.status()), stage.progress)
        });
        let summarize = button(if self.summarizing { "Generating..." } else { "AI progress summary" })
            .on_press_maybe((!self.summarizing).then_some(ScreenMessage::ScreenMessage(ProjectDetailMessage::Summarize)));
        let mut content = Column::with_children(stages).spacing(10).push(summarize);
        if let Some(summary) = &self.summary {
            content = content.push(card(text(summary.clone())));
        }
        content
    }

    fn updates<'a>(&'a self, project: &'a Project) -> Column<'a, ScreenMessage<Self>> {
        let entries = project.updates.iter().map(|update| {
            let kind = match update.kind {
                UpdateKind::Photo => "Photo",
                UpdateKind::Video => "Video",
                UpdateKind::Note => "Note",
            };
            let mut entry = column![
                text(update.caption.clone()),
                text(format!("{kind} by {} on {}", update.author, update.date)).size(12),
            ]
            .spacing(4);
            if let Some(url) = &update.url {
                entry = entry.push(text(url.clone()).size(12));
            }
            card(entry)
        });
        Column::with_children(entries).spacing(10)
    }

    fn payments<'a>(&'a self, project: &'a Project, is_owner: bool) -> Column<'a, ScreenMessage<Self>> {
        if !is_owner {
            return column![text("Payment details are only visible to the project owner.")];
        }
        let rows = project.transactions.iter().map(|tx| {
            let mut entry = column![
                row![text(tx.description.clone()).width(Length::Fill), text(format_inr(tx.amount as f64))],
                text(format!("{} | {}", tx.date, tx.status)).size(12),
            ]
            .spacing(4);
            if tx.status == TransactionStatus::Pending {
                entry = entry.push(
                    button("Submit payment proof")
                        .on_press(ScreenMessage::ScreenMessage(ProjectDetailMessage::SubmitProof(tx.id.clone()))),
                );
            }
            card(entry)
        });
        column![
            field("Total paid", format_inr(payments::total_paid(project) as f64)),
            text_input("Payment proof link or reference", &self.proof)
                .on_input(|value| ScreenMessage::ScreenMessage(ProjectDetailMessage::Proof(value)))
                .padding(8),
            Column::with_children(rows).spacing(10),
        ]
        .spacing(10)
    }
}

impl Screen for ProjectDetailScreen {
    type Message = ProjectDetailMessage;
    type ParentMessage = Intent;

    fn view<'a>(&'a self, props: &ScreenProps<'a>) -> Element<'a, ScreenMessage<Self>> {
        let ScreenProps::ProjectDetail { project, is_owner, .. } = props else {
            return placeholder();
        };
        let project: &'a Project = *project;
        let is_owner = *is_owner;

        let tabs = Row::with_children(DetailTab::ALL.into_iter().map(|tab| {
            let style = if tab == self.tab {
                button::primary
            } else {
                button::secondary
            };
            button(text(tab.label()).center())
                .width(Length::Fill)
                .style(style)
                .on_press(ScreenMessage::ScreenMessage(ProjectDetailMessage::ShowTab(tab)))
                .into()
        }))
        .spacing(4);

        let body = match self.tab {
            DetailTab::Overview => self.overview(project, is_owner),
            DetailTab::Timeline => self.timeline(project),
            DetailTab::Updates => self.updates(project),
            DetailTab::Payments => self.payments(project, is_owner),
        };

        scrollable(
            column![
                row![
                    button("Back")
                        .style(button::secondary)
                        .on_press(intent(Intent::BackFromProjectDetail)),
                    title(project.name.clone()),
                ]
                .spacing(12)
                .align_y(Center),
                tabs,
                body,
            ]
            .spacing(16)
            .padding(16),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        let selected = state.controller.selected_project_id().map(str::to_string);
        match message {
            ProjectDetailMessage::ShowTab(tab) => self.tab = tab,
            ProjectDetailMessage::VisitDate(value) => self.slot.date = value,
            ProjectDetailMessage::VisitTime(value) => self.slot.time = value,
            ProjectDetailMessage::Proof(value) => self.proof = value,
            ProjectDetailMessage::RequestVisit => {
                if let Some(project_id) = selected {
                    return Task::done(intent(Intent::RequestSiteVisit {
                        project_id,
                        slot: self.slot.clone(),
                    }));
                }
            }
            ProjectDetailMessage::SubmitProof(transaction_id) => {
                if let Some(project_id) = selected {
                    return Task::done(intent(Intent::SubmitPaymentProof {
                        project_id,
                        transaction_id,
                        proof: self.proof.clone(),
                    }));
                }
            }
            ProjectDetailMessage::Summarize => {
                let Some(project) = state.controller.selected_project().cloned() else {
                    return Task::none();
                };
                let backend = state.summaries.clone();
                self.summarizing = true;
                return Task::perform(
                    async move {
                        let text = summary::progress_summary(&backend, &project).await;
                        (project.id, text)
                    },
                    |(project_id, text)| {
                        ScreenMessage::ScreenMessage(ProjectDetailMessage::SummaryReady(project_id, text))
                    },
                );
            }
            ProjectDetailMessage::SummaryReady(project_id, text) => {
                if state.controller.selected_project_id() == Some(project_id.as_str()) {
                    self.summarizing = false;
                    self.summary = Some(text);
                }
            }
        }
        Task::none()
    }
}
