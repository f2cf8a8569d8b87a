#![no_std]

//! Mock collaborators for exercising the credit officer: a comptroller that
//! hands out credit limits, a single-asset lending pool and a borrower contract.

mod borrower;
mod comptroller;
mod ctoken;

pub use borrower::{MockCreditBorrower, MockCreditBorrowerClient};
pub use comptroller::{MockComptroller, MockComptrollerClient};
pub use ctoken::{MockCToken, MockCTokenClient};

/// Pool error codes, Compound style. Zero is success.
pub mod codes {
    pub const NO_ERROR: u32 = 0;
    pub const BORROW_REJECTED: u32 = 1;
    pub const REPAY_REJECTED: u32 = 2;
    pub const INSUFFICIENT_CASH: u32 = 3;
    pub const REPAY_EXCEEDS_BALANCE: u32 = 4;
}
