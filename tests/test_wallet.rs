//! Integration tests for SafeCoin withdrawals and shop purchases.

mod common;

use safeclue::core::wallet::{
    self, BankDetails, MIN_WITHDRAWAL, WithdrawalForm, WithdrawalQuote, preview_amount,
};

use common::*;

fn withdrawal(amount: &str) -> Intent {
    Intent::RequestWithdrawal(WithdrawalForm {
        amount: amount.to_string(),
        bank: BankDetails {
            bank_name: "State Bank".to_string(),
            account_number: "000111222".to_string(),
            ifsc: "SBIN0000001".to_string(),
        },
    })
}

#[test]
fn test_quote_charges() {
    let quote = WithdrawalQuote::for_amount(10_000.0);

    assert_eq!(quote.service_charge, 200.0);
    assert_eq!(quote.platform_charge, 100.0);
    assert_eq!(quote.total_deductions(), 300.0);
    assert_eq!(quote.payout(), 9_700.0);
    assert_eq!(
        quote.describe(),
        "Withdrawal request submitted. You will receive ₹9,700 after ₹300 in charges."
    );
}

#[test]
fn test_withdrawal_accepted_within_balance() -> anyhow::Result<()> {
    let mut controller = logged_in_user();

    controller.dispatch(withdrawal("12000"))?;

    let toast = controller.toasts().latest().expect("toast");
    assert_eq!(toast.level, ToastLevel::Success);
    assert!(toast.message.contains("₹11,640"), "{}", toast.message);
    // balance is settled out of band
    assert_eq!(
        controller.session().as_user().map(|a| a.safe_coin_balance),
        Some(25_500)
    );
    Ok(())
}

#[test]
fn test_withdrawal_refusals() {
    let mut controller = logged_in_user();

    assert_eq!(
        controller.dispatch(withdrawal("abc")).unwrap_err(),
        AppError::InvalidAmount
    );
    assert_eq!(
        controller.dispatch(withdrawal("-5")).unwrap_err(),
        AppError::InvalidAmount
    );

    let err = controller.dispatch(withdrawal("9999")).unwrap_err();
    assert_eq!(err, AppError::MinimumWithdrawal { minimum: MIN_WITHDRAWAL });
    assert_eq!(err.to_string(), "Minimum withdrawal amount is 10,000 SafeCoins.");

    let err = controller.dispatch(withdrawal("30000")).unwrap_err();
    assert_eq!(
        err,
        AppError::WithdrawalAboveBalance {
            requested: 30_000,
            available: 25_500,
        }
    );
    assert_eq!(err.to_string(), "Withdrawal amount cannot exceed your SafeCoin balance.");
}

#[test]
fn test_preview_is_lenient() {
    assert_eq!(preview_amount("15000"), 15_000.0);
    assert_eq!(preview_amount(""), 0.0);
    assert_eq!(preview_amount("lots"), 0.0);
}

#[test]
fn test_purchase() -> anyhow::Result<()> {
    let mut controller = logged_in_user();

    controller.dispatch(Intent::PurchaseProduct("prod2".to_string()))?;

    let message = controller.toasts().latest().map(|t| t.message.clone()).unwrap_or_default();
    assert!(message.contains("\"Designer LED Chandelier\""), "{message}");

    assert_eq!(
        controller
            .dispatch(Intent::PurchaseProduct("prod99".to_string()))
            .unwrap_err(),
        AppError::ProductNotFound("prod99".to_string())
    );
    Ok(())
}

#[test]
fn test_purchase_needs_enough_coins() -> anyhow::Result<()> {
    let mut poor = MockStore::seeded().accounts()[0].clone();
    poor.safe_coin_balance = 3_000;

    let err = wallet::check_purchase(&poor, "prod1").unwrap_err();
    assert_eq!(
        err,
        AppError::InsufficientBalance {
            needed: 5_000,
            available: 3_000,
        }
    );
    assert_eq!(err.to_string(), "You do not have enough SafeCoins to make this purchase.");

    let product = wallet::check_purchase(&poor, "prod5")?;
    assert_eq!(product.price, 2_500);
    Ok(())
}

#[test]
fn test_wallet_needs_user_session() {
    let mut controller = logged_in_staff(AdminRole::Admin);

    assert!(matches!(
        controller.dispatch(withdrawal("12000")).unwrap_err(),
        AppError::Unauthorized { required: Role::User, .. }
    ));
    assert!(matches!(
        controller.dispatch(Intent::ShareReferral).unwrap_err(),
        AppError::Unauthorized { .. }
    ));
}

#[test]
fn test_share_referral() -> anyhow::Result<()> {
    let mut controller = logged_in_user();

    controller.dispatch(Intent::ShareReferral)?;

    assert_eq!(
        controller.toasts().latest().map(|t| t.message.as_str()),
        Some("Share your code: JOHN2024")
    );
    Ok(())
}
