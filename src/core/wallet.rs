use crate::{
    core::{error::AppError, format::format_inr},
    models::Account,
};

pub const MIN_WITHDRAWAL: u64 = 10_000;
pub const SERVICE_CHARGE_PERCENT: f64 = 2.0;
pub const PLATFORM_CHARGE_PERCENT: f64 = 1.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_number: String,
    pub ifsc: String,
}

#[derive(Debug, Clone, Default)]
pub struct WithdrawalForm {
    /// Raw text typed by the user.
    pub amount: String,
    pub bank: BankDetails,
}

/// What the user receives for a SafeCoin withdrawal (1 SafeCoin = ₹1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawalQuote {
    pub amount: f64,
    pub service_charge: f64,
    pub platform_charge: f64,
}

impl WithdrawalQuote {
    pub fn for_amount(amount: f64) -> Self {
        Self {
            amount,
            service_charge: amount * SERVICE_CHARGE_PERCENT / 100.0,
            platform_charge: amount * PLATFORM_CHARGE_PERCENT / 100.0,
        }
    }

    pub fn total_deductions(&self) -> f64 {
        self.service_charge + self.platform_charge
    }

    pub fn payout(&self) -> f64 {
        self.amount - self.total_deductions()
    }

    pub fn describe(&self) -> String {
        format!(
            "Withdrawal request submitted. You will receive {} after {} in charges.",
            format_inr(self.payout()),
            format_inr(self.total_deductions())
        )
    }
}

/// Parses the amount leniently: anything unreadable counts as zero.
pub fn preview_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn quote_withdrawal(account: &Account, form: &WithdrawalForm) -> Result<WithdrawalQuote, AppError> {
    let amount = form
        .amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(AppError::InvalidAmount)?;
    if amount < MIN_WITHDRAWAL as f64 {
        return Err(AppError::MinimumWithdrawal {
            minimum: MIN_WITHDRAWAL,
        });
    }
    if amount > account.safe_coin_balance as f64 {
        return Err(AppError::WithdrawalAboveBalance {
            requested: amount.ceil() as u64,
            available: account.safe_coin_balance,
        });
    }
    Ok(WithdrawalQuote::for_amount(amount))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    /// SafeCoins.
    pub price: u64,
}

pub const CATALOGUE: [Product; 6] = [
    Product { id: "prod1", name: "Premium Faucet Set", image: "https://picsum.photos/seed/faucet/400/300", price: 5000 },
    Product { id: "prod2", name: "Designer LED Chandelier", image: "https://picsum.photos/seed/chandelier/400/300", price: 15000 },
    Product { id: "prod3", name: "Italian Marble Slab (10 sqft)", image: "https://picsum.photos/seed/marble/400/300", price: 8500 },
    Product { id: "prod4", name: "Smart Home Hub", image: "https://picsum.photos/seed/smarthome/400/300", price: 12000 },
    Product { id: "prod5", name: "Vastu Consultation Voucher", image: "https://picsum.photos/seed/vastu/400/300", price: 2500 },
    Product { id: "prod6", name: "Epoxy Flooring Kit", image: "https://picsum.photos/seed/epoxy/400/300", price: 7800 },
];

pub fn product(id: &str) -> Option<&'static Product> {
    CATALOGUE.iter().find(|product| product.id == id)
}

/// Purchases are confirmed out of band, so the balance is only checked here.
pub fn check_purchase(account: &Account, product_id: &str) -> Result<&'static Product, AppError> {
    let product = product(product_id).ok_or_else(|| AppError::ProductNotFound(product_id.to_string()))?;
    if account.safe_coin_balance < product.price {
        return Err(AppError::InsufficientBalance {
            needed: product.price,
            available: account.safe_coin_balance,
        });
    }
    Ok(product)
}
