//! Clients for the contracts the officer depends on.

use soroban_sdk::{contractclient, Address, Env};

/// Credit-limit authority.
#[contractclient(name = "ComptrollerClient")]
pub trait ComptrollerInterface {
    /// Credit limit granted to `account` on `ctoken`.
    fn credit_limit(env: Env, account: Address, ctoken: Address) -> i128;
}

/// Money-market pool lending a single underlying token.
///
/// `borrow` and `repay_borrow` return a pool error code; 0 means success.
#[contractclient(name = "CTokenClient")]
pub trait CTokenInterface {
    fn underlying(env: Env) -> Address;
    fn borrow(env: Env, borrower: Address, amount: i128) -> u32;
    /// Pulls `amount` of the underlying from `payer` using the pool's allowance.
    fn repay_borrow(env: Env, payer: Address, amount: i128) -> u32;
    fn borrow_balance_stored(env: Env, account: Address) -> i128;
    fn borrow_balance_current(env: Env, account: Address) -> i128;
}
