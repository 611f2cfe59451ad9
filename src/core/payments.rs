use crate::{
    core::error::AppError,
    models::{Invoice, Project, Transaction, TransactionStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// A transaction waiting for an admin, with the project it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct PendingApproval<'a> {
    pub project: &'a Project,
    pub transaction: &'a Transaction,
}

fn expect_status(tx: &Transaction, expected: TransactionStatus) -> Result<(), AppError> {
    if tx.status != expected {
        return Err(AppError::InvalidTransition {
            id: tx.id.clone(),
            expected,
            actual: tx.status,
        });
    }
    Ok(())
}

/// Owner uploaded a payment proof: `Pending` -> `AwaitingApproval`.
pub fn submit_proof(project: &mut Project, transaction_id: &str, proof_url: String) -> Result<(), AppError> {
    let tx = project
        .transaction_mut(transaction_id)
        .ok_or_else(|| AppError::TransactionNotFound(transaction_id.to_string()))?;
    expect_status(tx, TransactionStatus::Pending)?;
    tx.status = TransactionStatus::AwaitingApproval;
    tx.proof_url = Some(proof_url);
    Ok(())
}

/// Approving marks the transaction paid; rejecting sends it back to
/// `Pending` and discards the proof.
pub fn review(project: &mut Project, transaction_id: &str, decision: ReviewDecision) -> Result<TransactionStatus, AppError> {
    let tx = project
        .transaction_mut(transaction_id)
        .ok_or_else(|| AppError::TransactionNotFound(transaction_id.to_string()))?;
    expect_status(tx, TransactionStatus::AwaitingApproval)?;
    match decision {
        ReviewDecision::Approve => tx.status = TransactionStatus::Paid,
        ReviewDecision::Reject => {
            tx.status = TransactionStatus::Pending;
            tx.proof_url = None;
        }
    }
    Ok(tx.status)
}

pub fn pending_approvals(projects: &[Project]) -> Vec<PendingApproval<'_>> {
    projects
        .iter()
        .flat_map(|project| {
            project
                .transactions
                .iter()
                .filter(|tx| tx.status == TransactionStatus::AwaitingApproval)
                .map(move |transaction| PendingApproval {
                    project,
                    transaction,
                })
        })
        .collect()
}

pub fn has_pending_payment(project: &Project) -> bool {
    project.transactions.iter().any(|tx| {
        matches!(
            tx.status,
            TransactionStatus::Pending | TransactionStatus::AwaitingApproval
        )
    })
}

pub fn invoice_for<'a>(invoices: &'a [Invoice], transaction: &Transaction) -> Option<&'a Invoice> {
    invoices.iter().find(|inv| inv.id == transaction.invoice_id)
}

/// Sum of paid transactions, in rupees.
pub fn total_paid(project: &Project) -> u64 {
    project
        .transactions
        .iter()
        .filter(|tx| tx.status == TransactionStatus::Paid)
        .map(|tx| tx.amount)
        .sum()
}
