use thiserror::Error;

use crate::{
    core::{format::format_safe_coins, view::View},
    models::{Role, TransactionStatus},
};

/// Everything an intent can be refused for. None of these change state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Invalid credentials or you are not a registered user.")]
    InvalidCredentials,
    #[error("Passwords don't match!")]
    PasswordMismatch,
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("Invalid OTP. Please try again.")]
    InvalidOtp,
    #[error("You must agree to be contacted.")]
    ConsentRequired,
    #[error("Please enter a valid amount of SafeCoins.")]
    InvalidAmount,
    #[error("Minimum withdrawal amount is {} SafeCoins.", format_safe_coins(*.minimum))]
    MinimumWithdrawal { minimum: u64 },
    #[error("Withdrawal amount cannot exceed your SafeCoin balance.")]
    WithdrawalAboveBalance { requested: u64, available: u64 },
    #[error("You do not have enough SafeCoins to make this purchase.")]
    InsufficientBalance { needed: u64, available: u64 },
    #[error("The {view} screen requires a {required} session.")]
    Unauthorized { view: View, required: Role },
    #[error("{0}")]
    NotPermitted(&'static str),
    #[error("Project {0} not found.")]
    ProjectNotFound(String),
    #[error("No project is selected.")]
    NoProjectSelected,
    #[error("Transaction {0} not found.")]
    TransactionNotFound(String),
    #[error("Timeline stage {0} not found.")]
    StageNotFound(String),
    #[error("Notification {0} not found.")]
    NotificationNotFound(String),
    #[error("Product {0} not found.")]
    ProductNotFound(String),
    #[error("Transaction {id} is {actual}, expected {expected}.")]
    InvalidTransition {
        id: String,
        expected: TransactionStatus,
        actual: TransactionStatus,
    },
    #[error("Could not read {0}.")]
    InvalidDate(String),
}
