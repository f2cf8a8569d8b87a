//! Core data types for the CreditOfficer contract.

use soroban_sdk::contracttype;

#[soroban_sdk::contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CreditOfficerError {
    /// Caller is not the borrower (borrow/repay) or not admin/guardian (pause).
    Unauthorized = 1,
    Paused = 2,
    InvalidAmount = 3,
    /// The pool rejected the draw.
    BorrowFailed = 4,
    /// The pool rejected the repayment.
    RepayFailed = 5,
    /// Post-borrow balance is above the comptroller's credit limit (shortfall).
    CreditExceeded = 6,
    /// Borrower cannot be reassigned while debt is outstanding.
    NonZeroBalance = 7,
    NoBorrower = 8,
}

/// Amount to repay.
///
/// `Full` resolves to the pool's current borrow balance (interest accrued up to
/// the present ledger) at the moment the repayment executes.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepayAmount {
    Exact(i128),
    Full,
}

/// Credit headroom relative to the comptroller's live limit.
///
/// At most one of the two fields is non-zero.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CreditStatus {
    pub credit_left: i128,
    pub shortfall: i128,
}
