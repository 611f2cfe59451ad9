//! Integration tests for site visits, consultations and notifications.

mod common;

use safeclue::core::forms::{ConsultationForm, InquiryForm, SlotForm};
use safeclue::models::BookingKind;
use time::macros::{date, time};

use common::*;

fn slot(date: &str, time: &str) -> SlotForm {
    SlotForm {
        date: date.to_string(),
        time: time.to_string(),
    }
}

fn consultation(slot: SlotForm) -> ConsultationForm {
    ConsultationForm {
        full_name: "Ravi Kumar".to_string(),
        phone: "9876543210".to_string(),
        slot,
        agree: true,
        ..ConsultationForm::default()
    }
}

#[test]
fn test_site_visit_for_showcase_project() -> anyhow::Result<()> {
    let mut controller = logged_in_user();
    controller.select_project("p3")?;

    controller.dispatch(Intent::RequestSiteVisit {
        project_id: "p3".to_string(),
        slot: slot("2024-09-01", "15:30"),
    })?;

    let booking = controller.store().bookings().last().expect("booking");
    assert_eq!(booking.kind, BookingKind::SiteVisit);
    assert_eq!(booking.project_id.as_deref(), Some("p3"));
    assert_eq!(booking.project_name, "Ocean Breeze Condos");
    assert_eq!(booking.date, date!(2024 - 09 - 01));
    assert_eq!(booking.time, time!(15:30));
    assert_eq!(controller.store().bookings().len(), 2);

    let message = controller.toasts().latest().map(|t| t.message.clone()).unwrap_or_default();
    assert!(message.contains("on 2024-09-01 at 3:30 PM"), "{message}");
    Ok(())
}

#[test]
fn test_site_visit_refused_for_owner() -> anyhow::Result<()> {
    let mut controller = logged_in_user();

    let err = controller
        .dispatch(Intent::RequestSiteVisit {
            project_id: "p1".to_string(),
            slot: slot("2024-09-01", "10:00"),
        })
        .unwrap_err();

    assert!(matches!(err, AppError::NotPermitted(_)));
    assert_eq!(controller.store().bookings().len(), 1);
    Ok(())
}

#[test]
fn test_site_visit_needs_a_valid_slot() {
    let mut controller = logged_in_user();

    let missing = controller
        .dispatch(Intent::RequestSiteVisit {
            project_id: "p3".to_string(),
            slot: slot("", "10:00"),
        })
        .unwrap_err();
    assert_eq!(missing, AppError::MissingField("date"));

    let garbled = controller
        .dispatch(Intent::RequestSiteVisit {
            project_id: "p3".to_string(),
            slot: slot("next tuesday", "10:00"),
        })
        .unwrap_err();
    assert!(matches!(garbled, AppError::InvalidDate(_)));
    assert_eq!(controller.store().bookings().len(), 1);
}

#[test]
fn test_consultation_with_slot_books_and_goes_back() -> anyhow::Result<()> {
    let mut controller = logged_in_user();
    controller.navigate(View::Consultation);

    controller.dispatch(Intent::SubmitConsultation(consultation(slot("2024-10-02", "11:00"))))?;

    let booking = controller.store().bookings().last().expect("booking");
    assert_eq!(booking.kind, BookingKind::Consultation);
    assert!(booking.project_id.is_none());
    assert_eq!(booking.project_name, "Residential consultation");
    assert_eq!(controller.view(), View::UserHome);
    Ok(())
}

#[test]
fn test_anonymous_consultation_without_slot() -> anyhow::Result<()> {
    let mut controller = controller_at_login();
    controller.navigate(View::Landing);
    controller.navigate(View::Consultation);

    controller.dispatch(Intent::SubmitConsultation(consultation(SlotForm::default())))?;

    assert_eq!(controller.store().bookings().len(), 1);
    assert_eq!(controller.view(), View::Landing);
    Ok(())
}

#[test]
fn test_consultation_requires_consent() {
    let mut controller = controller_at_login();
    controller.navigate(View::Consultation);
    let form = ConsultationForm {
        agree: false,
        ..consultation(SlotForm::default())
    };

    let err = controller.dispatch(Intent::SubmitConsultation(form)).unwrap_err();

    assert_eq!(err, AppError::ConsentRequired);
    assert_eq!(controller.view(), View::Consultation);
}

#[test]
fn test_mark_notification_read() -> anyhow::Result<()> {
    let mut controller = logged_in_user();
    assert_eq!(controller.store().unread_count(), 2);

    controller.dispatch(Intent::MarkNotificationRead("n2".to_string()))?;
    // already read stays read
    controller.dispatch(Intent::MarkNotificationRead("n3".to_string()))?;

    assert_eq!(controller.store().unread_count(), 1);
    assert_eq!(
        controller
            .dispatch(Intent::MarkNotificationRead("n9".to_string()))
            .unwrap_err(),
        AppError::NotificationNotFound("n9".to_string())
    );
    Ok(())
}

#[test]
fn test_project_inquiry() -> anyhow::Result<()> {
    let mut controller = logged_in_user();
    let mut form = InquiryForm {
        name: "John Doe".to_string(),
        mobile: USER_MOBILE.to_string(),
        topic: None,
        details: String::new(),
    };

    assert_eq!(
        controller.dispatch(Intent::SubmitInquiry(form.clone())).unwrap_err(),
        AppError::MissingField("topic")
    );

    form.topic = Some("Home Renovation".to_string());
    controller.dispatch(Intent::SubmitInquiry(form))?;
    assert_eq!(controller.toasts().latest().map(|t| t.level), Some(ToastLevel::Success));
    Ok(())
}

#[test]
fn test_coming_soon_and_dismiss() -> anyhow::Result<()> {
    let mut controller = logged_in_user();

    controller.dispatch(Intent::ComingSoon("Interior Design"))?;
    assert_eq!(
        controller.toasts().latest().map(|t| t.message.as_str()),
        Some("Interior Design service is coming soon!")
    );

    controller.dispatch(Intent::DismissToast)?;
    assert!(controller.toasts().is_empty());
    Ok(())
}
