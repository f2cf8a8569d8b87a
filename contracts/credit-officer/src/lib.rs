#![no_std]

//! Credit officer contract: borrows from a money-market pool ("ctoken") on
//! behalf of a single designated borrower, bounded by the credit limit a
//! comptroller grants to the officer.
//!
//! The officer itself is the borrowing account at the pool, so the borrow
//! balance is never stored here; every query and every credit decision reads
//! the pool and the comptroller live, inside the same invocation.
//!
//! # Roles
//! * admin: configures borrower and guardian, unpauses, seizes stray tokens and
//!   can force a repayment from the borrower.
//! * guardian: may pause borrowing, nothing else.
//! * borrower: the only account allowed to borrow and repay.
//!
//! # Atomicity
//! Every failing path returns a [`CreditOfficerError`]. The host rolls back the
//! whole invocation on error, pool draw and token movements included.

mod credit;
mod events;
mod interfaces;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, symbol_short, token::TokenClient, Address, Env};

use events::{
    publish_borrow, publish_paused, publish_repay, publish_role_changed, publish_seize,
    publish_unpaused, BorrowEvent, RepayEvent, RoleChangedEvent, SeizeEvent,
};
pub use interfaces::{CTokenClient, CTokenInterface, ComptrollerClient, ComptrollerInterface};
pub use types::{CreditOfficerError, CreditStatus, RepayAmount};

fn require_admin_auth(env: &Env) -> Address {
    let admin = storage::get_admin(env);
    admin.require_auth();
    admin
}

/// Authenticate `caller` and check it is the configured borrower.
fn require_borrower(env: &Env, caller: &Address) -> Result<(), CreditOfficerError> {
    caller.require_auth();
    match storage::get_borrower(env) {
        Some(borrower) if borrower == *caller => Ok(()),
        _ => Err(CreditOfficerError::Unauthorized),
    }
}

fn ctoken_client(env: &Env) -> CTokenClient<'_> {
    CTokenClient::new(env, &storage::get_ctoken(env))
}

fn borrow_token_client(env: &Env) -> TokenClient<'_> {
    TokenClient::new(env, &storage::get_borrow_token(env))
}

fn load_balance_stored(env: &Env) -> i128 {
    ctoken_client(env).borrow_balance_stored(&env.current_contract_address())
}

fn load_balance_current(env: &Env) -> i128 {
    ctoken_client(env).borrow_balance_current(&env.current_contract_address())
}

fn load_credit_limit(env: &Env) -> i128 {
    ComptrollerClient::new(env, &storage::get_comptroller(env))
        .credit_limit(&env.current_contract_address(), &storage::get_ctoken(env))
}

/// Pull `amount` from `payer` through its allowance to the officer and repay the pool.
fn repay_from(
    env: &Env,
    payer: &Address,
    amount: RepayAmount,
) -> Result<i128, CreditOfficerError> {
    let officer = env.current_contract_address();
    let ctoken_address = storage::get_ctoken(env);
    let ctoken = CTokenClient::new(env, &ctoken_address);

    let amount = match amount {
        RepayAmount::Full => ctoken.borrow_balance_current(&officer),
        RepayAmount::Exact(amount) if amount > 0 => amount,
        RepayAmount::Exact(_) => return Err(CreditOfficerError::InvalidAmount),
    };
    if amount == 0 {
        return Ok(0);
    }

    let token = borrow_token_client(env);
    token.transfer_from(&officer, payer, &officer, &amount);
    // The pool pulls the repayment within this same ledger.
    token.approve(&officer, &ctoken_address, &amount, &env.ledger().sequence());

    let code = ctoken.repay_borrow(&officer, &amount);
    if code != 0 {
        log!(env, "ctoken repay_borrow rejected", code);
        return Err(CreditOfficerError::RepayFailed);
    }

    publish_repay(
        env,
        RepayEvent {
            payer: payer.clone(),
            amount,
            new_borrow_balance: ctoken.borrow_balance_stored(&officer),
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(amount)
}

#[contract]
pub struct CreditOfficer;

#[contractimpl]
impl CreditOfficer {
    /// Bind the officer to its comptroller and pool. The borrow token is the
    /// pool's underlying asset. Starts unpaused with no borrower and no guardian.
    pub fn __constructor(env: Env, admin: Address, comptroller: Address, ctoken: Address) {
        let borrow_token = CTokenClient::new(&env, &ctoken).underlying();
        storage::set_admin(&env, &admin);
        storage::set_collaborators(&env, &comptroller, &ctoken, &borrow_token);
        storage::set_paused(&env, false);
        storage::extend_instance(&env);
    }

    /// Draw `amount` from the pool and hand it to the borrower.
    ///
    /// # Errors
    /// - `Unauthorized` – `caller` is not the borrower
    /// - `Paused` – borrowing is paused
    /// - `InvalidAmount` – amount is zero or negative
    /// - `BorrowFailed` – the pool rejected the draw
    /// - `CreditExceeded` – the resulting balance is above the credit limit
    pub fn borrow(env: Env, caller: Address, amount: i128) -> Result<(), CreditOfficerError> {
        require_borrower(&env, &caller)?;
        if storage::is_paused(&env) {
            return Err(CreditOfficerError::Paused);
        }
        if amount <= 0 {
            return Err(CreditOfficerError::InvalidAmount);
        }
        storage::extend_instance(&env);

        let officer = env.current_contract_address();
        let ctoken = ctoken_client(&env);
        let code = ctoken.borrow(&officer, &amount);
        if code != 0 {
            log!(&env, "ctoken borrow rejected", code);
            return Err(CreditOfficerError::BorrowFailed);
        }

        let balance = ctoken.borrow_balance_current(&officer);
        if credit::credit_status(load_credit_limit(&env), balance).shortfall > 0 {
            return Err(CreditOfficerError::CreditExceeded);
        }

        borrow_token_client(&env).transfer(&officer, &caller, &amount);

        publish_borrow(
            &env,
            BorrowEvent {
                borrower: caller,
                amount,
                new_borrow_balance: balance,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Repay the pool with funds pulled from the borrower's allowance to this
    /// contract. Allowed while paused. Returns the amount repaid.
    pub fn repay(
        env: Env,
        caller: Address,
        amount: RepayAmount,
    ) -> Result<i128, CreditOfficerError> {
        require_borrower(&env, &caller)?;
        storage::extend_instance(&env);
        repay_from(&env, &caller, amount)
    }

    /// Admin: force a repayment from the current borrower's allowance.
    pub fn ask_for_repay(env: Env, amount: RepayAmount) -> Result<i128, CreditOfficerError> {
        require_admin_auth(&env);
        let borrower = storage::get_borrower(&env).ok_or(CreditOfficerError::NoBorrower)?;
        storage::extend_instance(&env);
        repay_from(&env, &borrower, amount)
    }

    /// Pool's last recorded borrow balance for this officer, without accrual.
    pub fn borrow_balance_stored(env: Env) -> i128 {
        load_balance_stored(&env)
    }

    /// Accrue pool interest up to the current ledger, then return the balance.
    pub fn borrow_balance_current(env: Env) -> i128 {
        load_balance_current(&env)
    }

    /// Credit limit currently granted by the comptroller.
    pub fn total_credit(env: Env) -> i128 {
        load_credit_limit(&env)
    }

    pub fn credit_status_stored(env: Env) -> CreditStatus {
        let balance = load_balance_stored(&env);
        credit::credit_status(load_credit_limit(&env), balance)
    }

    pub fn credit_status_current(env: Env) -> CreditStatus {
        let balance = load_balance_current(&env);
        credit::credit_status(load_credit_limit(&env), balance)
    }

    /// Admin: assign the borrower, or `None` to disable borrowing.
    /// Only possible while nothing is owed to the pool.
    pub fn set_borrower(env: Env, borrower: Option<Address>) -> Result<(), CreditOfficerError> {
        require_admin_auth(&env);
        if load_balance_current(&env) != 0 {
            return Err(CreditOfficerError::NonZeroBalance);
        }
        let previous = storage::get_borrower(&env);
        storage::set_borrower(&env, &borrower);
        storage::extend_instance(&env);
        publish_role_changed(
            &env,
            symbol_short!("borrower"),
            RoleChangedEvent {
                previous,
                current: borrower,
            },
        );
        Ok(())
    }

    pub fn set_guardian(env: Env, guardian: Option<Address>) {
        require_admin_auth(&env);
        let previous = storage::get_guardian(&env);
        storage::set_guardian(&env, &guardian);
        storage::extend_instance(&env);
        publish_role_changed(
            &env,
            symbol_short!("guardian"),
            RoleChangedEvent {
                previous,
                current: guardian,
            },
        );
    }

    /// Stop new borrowing. Callable by the admin or the guardian.
    pub fn pause(env: Env, caller: Address) -> Result<(), CreditOfficerError> {
        caller.require_auth();
        let is_guardian = storage::get_guardian(&env).as_ref() == Some(&caller);
        if caller != storage::get_admin(&env) && !is_guardian {
            return Err(CreditOfficerError::Unauthorized);
        }
        storage::set_paused(&env, true);
        storage::extend_instance(&env);
        publish_paused(&env, caller);
        Ok(())
    }

    /// Admin only; the guardian can pause but not resume.
    pub fn unpause(env: Env) {
        let admin = require_admin_auth(&env);
        storage::set_paused(&env, false);
        storage::extend_instance(&env);
        publish_unpaused(&env, admin);
    }

    /// Admin: sweep this contract's whole balance of `token` to the admin.
    /// Borrow accounting lives at the pool and is unaffected.
    pub fn seize(env: Env, token: Address) -> i128 {
        let admin = require_admin_auth(&env);
        let officer = env.current_contract_address();
        let client = TokenClient::new(&env, &token);
        let amount = client.balance(&officer);
        if amount > 0 {
            client.transfer(&officer, &admin, &amount);
        }
        publish_seize(
            &env,
            SeizeEvent {
                token,
                to: admin,
                amount,
            },
        );
        amount
    }

    pub fn transfer_admin(env: Env, new_admin: Address) {
        let previous = require_admin_auth(&env);
        storage::set_admin(&env, &new_admin);
        storage::extend_instance(&env);
        publish_role_changed(
            &env,
            symbol_short!("admin"),
            RoleChangedEvent {
                previous: Some(previous),
                current: Some(new_admin),
            },
        );
    }

    pub fn admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn guardian(env: Env) -> Option<Address> {
        storage::get_guardian(&env)
    }

    pub fn borrower(env: Env) -> Option<Address> {
        storage::get_borrower(&env)
    }

    pub fn comptroller(env: Env) -> Address {
        storage::get_comptroller(&env)
    }

    pub fn ctoken(env: Env) -> Address {
        storage::get_ctoken(&env)
    }

    pub fn borrow_token(env: Env) -> Address {
        storage::get_borrow_token(&env)
    }

    pub fn paused(env: Env) -> bool {
        storage::is_paused(&env)
    }
}
