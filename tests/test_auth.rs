//! Integration tests for login, registration and password recovery.

mod common;

use safeclue::core::{controller::MOCK_OTP, forms::RegisterForm};

use common::*;

fn register_form() -> RegisterForm {
    RegisterForm {
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        mobile: "5550001111".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
    }
}

#[test]
fn test_user_login() -> anyhow::Result<()> {
    let mut controller = controller_at_login();

    controller.dispatch(Intent::Login {
        mobile: USER_MOBILE.to_string(),
        password: String::new(),
    })?;

    assert_eq!(controller.view(), View::UserHome);
    let account = controller.session().as_user().expect("user session");
    assert_eq!(account.id, "u1");
    assert_eq!(account.name, "John Doe");
    Ok(())
}

#[test]
fn test_login_refuses_unknown_and_staff_mobiles() {
    for mobile in ["0000000000", ADMIN_MOBILE] {
        let mut controller = controller_at_login();

        let err = controller
            .dispatch(Intent::Login {
                mobile: mobile.to_string(),
                password: "pw".to_string(),
            })
            .unwrap_err();

        assert_eq!(err, AppError::InvalidCredentials);
        assert_eq!(controller.view(), View::Login);
        assert_eq!(controller.session(), &Session::Anonymous);
        assert_eq!(
            controller.toasts().latest().map(|t| t.message.as_str()),
            Some("Invalid credentials or you are not a registered user.")
        );
    }
}

#[test]
fn test_admin_login_routes_by_role() {
    let admin = logged_in_staff(AdminRole::Admin);
    assert_eq!(admin.view(), View::AdminDashboard);
    assert!(matches!(admin.session(), Session::Admin(account) if account.id == "a1"));

    let super_admin = logged_in_staff(AdminRole::SuperAdmin);
    assert_eq!(super_admin.view(), View::SuperAdminDashboard);
    assert!(matches!(super_admin.session(), Session::SuperAdmin(account) if account.id == "sa1"));
}

#[test]
fn test_register_logs_in_with_new_details() -> anyhow::Result<()> {
    let mut controller = controller_at_login();
    controller.navigate(View::Register);

    controller.dispatch(Intent::Register(register_form()))?;

    assert_eq!(controller.view(), View::UserHome);
    let account = controller.session().as_user().expect("user session");
    assert_eq!(account.name, "Asha Rao");
    assert_eq!(account.mobile, "5550001111");
    assert_eq!(account.email.as_deref(), Some("asha@example.com"));
    assert_eq!(
        controller.toasts().latest().map(|t| t.level),
        Some(ToastLevel::Success)
    );
    Ok(())
}

#[test]
fn test_register_validation() {
    let mismatch = RegisterForm {
        confirm_password: "other".to_string(),
        ..register_form()
    };
    let no_name = RegisterForm {
        name: "  ".to_string(),
        ..register_form()
    };

    let mut controller = controller_at_login();
    controller.navigate(View::Register);

    assert_eq!(
        controller.dispatch(Intent::Register(mismatch)).unwrap_err(),
        AppError::PasswordMismatch
    );
    assert_eq!(
        controller.dispatch(Intent::Register(no_name)).unwrap_err(),
        AppError::MissingField("name")
    );
    assert_eq!(controller.view(), View::Register);
    assert!(!controller.session().is_authenticated());
}

#[test]
fn test_forgot_password_then_otp() -> anyhow::Result<()> {
    // 1. Request an OTP
    let mut controller = controller_at_login();
    controller.navigate(View::ForgotPassword);
    controller.dispatch(Intent::ForgotPassword {
        mobile: USER_MOBILE.to_string(),
    })?;
    assert_eq!(controller.view(), View::VerifyOtp);
    assert_eq!(
        controller.toasts().latest().map(|t| t.message.clone()),
        Some(format!("An OTP has been sent to {USER_MOBILE}."))
    );

    // 2. Wrong code keeps us here
    let err = controller
        .dispatch(Intent::VerifyOtp("000000".to_string()))
        .unwrap_err();
    assert_eq!(err, AppError::InvalidOtp);
    assert_eq!(controller.view(), View::VerifyOtp);

    // 3. The fixed code returns to login
    controller.dispatch(Intent::VerifyOtp(MOCK_OTP.to_string()))?;
    assert_eq!(controller.view(), View::Login);
    assert!(!controller.session().is_authenticated());
    Ok(())
}

#[test]
fn test_forgot_password_needs_a_mobile() {
    let mut controller = controller_at_login();
    controller.navigate(View::ForgotPassword);

    let err = controller
        .dispatch(Intent::ForgotPassword {
            mobile: " ".to_string(),
        })
        .unwrap_err();

    assert_eq!(err, AppError::MissingField("mobile"));
    assert_eq!(controller.view(), View::ForgotPassword);
}

#[test]
fn test_onboarding_goes_to_login() -> anyhow::Result<()> {
    let mut controller = ViewController::default();

    controller.dispatch(Intent::FinishOnboarding)?;

    assert_eq!(controller.view(), View::Login);
    Ok(())
}

#[test]
fn test_login_matches_mobile_exactly() {
    let mut controller = controller_at_login();

    let err = controller
        .dispatch(Intent::Login {
            mobile: format!("  {USER_MOBILE}\t"),
            password: String::new(),
        })
        .unwrap_err();

    assert_eq!(err, AppError::InvalidCredentials);
    assert_eq!(controller.view(), View::Login);
    assert_eq!(controller.session(), &Session::Anonymous);
}

#[test]
fn test_otp_must_match_exactly() {
    let mut controller = controller_at_login();
    controller.navigate(View::VerifyOtp);

    for code in [format!(" {MOCK_OTP}\n"), format!("{MOCK_OTP} "), format!("0{MOCK_OTP}")] {
        assert_eq!(
            controller.dispatch(Intent::VerifyOtp(code)).unwrap_err(),
            AppError::InvalidOtp
        );
        assert_eq!(controller.view(), View::VerifyOtp);
    }
}
