use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env};

use crate::codes;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum DataKey {
    Underlying,
    BorrowFailed,
    RepayFailed,
    PendingInterest,
    BorrowBalance(Address),
}

fn underlying_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Underlying)
        .expect("underlying not set")
}

fn flag(env: &Env, key: &DataKey) -> bool {
    env.storage().instance().get(key).unwrap_or(false)
}

fn balance_of(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::BorrowBalance(account.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::BorrowBalance(account.clone()), &amount);
}

/// Single-asset lending pool with switchable failures and scripted interest.
///
/// Interest does not accrue with time: `set_pending_interest` queues an amount
/// that the next `borrow_balance_current` call adds to the account's balance.
#[contract]
pub struct MockCToken;

#[contractimpl]
impl MockCToken {
    pub fn __constructor(env: Env, underlying: Address) {
        env.storage()
            .instance()
            .set(&DataKey::Underlying, &underlying);
    }

    pub fn underlying(env: Env) -> Address {
        underlying_token(&env)
    }

    /// Lend `amount` of the underlying to `borrower`.
    pub fn borrow(env: Env, borrower: Address, amount: i128) -> u32 {
        borrower.require_auth();
        if flag(&env, &DataKey::BorrowFailed) {
            return codes::BORROW_REJECTED;
        }
        let pool = env.current_contract_address();
        let token = TokenClient::new(&env, &underlying_token(&env));
        if token.balance(&pool) < amount {
            return codes::INSUFFICIENT_CASH;
        }
        token.transfer(&pool, &borrower, &amount);
        set_balance(&env, &borrower, balance_of(&env, &borrower) + amount);
        codes::NO_ERROR
    }

    /// Take `amount` of the underlying from `payer` via its allowance to the pool.
    pub fn repay_borrow(env: Env, payer: Address, amount: i128) -> u32 {
        payer.require_auth();
        if flag(&env, &DataKey::RepayFailed) {
            return codes::REPAY_REJECTED;
        }
        let balance = balance_of(&env, &payer);
        if amount > balance {
            return codes::REPAY_EXCEEDS_BALANCE;
        }
        let pool = env.current_contract_address();
        TokenClient::new(&env, &underlying_token(&env))
            .transfer_from(&pool, &payer, &pool, &amount);
        set_balance(&env, &payer, balance - amount);
        codes::NO_ERROR
    }

    pub fn borrow_balance_stored(env: Env, account: Address) -> i128 {
        balance_of(&env, &account)
    }

    /// Apply any pending interest to `account`, then return its balance.
    pub fn borrow_balance_current(env: Env, account: Address) -> i128 {
        let pending: i128 = env
            .storage()
            .instance()
            .get(&DataKey::PendingInterest)
            .unwrap_or(0);
        let balance = balance_of(&env, &account);
        if pending == 0 || balance == 0 {
            return balance;
        }
        env.storage().instance().set(&DataKey::PendingInterest, &0_i128);
        set_balance(&env, &account, balance + pending);
        balance + pending
    }

    pub fn set_borrow_failed(env: Env, failed: bool) {
        env.storage().instance().set(&DataKey::BorrowFailed, &failed);
    }

    pub fn set_repay_failed(env: Env, failed: bool) {
        env.storage().instance().set(&DataKey::RepayFailed, &failed);
    }

    pub fn set_pending_interest(env: Env, amount: i128) {
        env.storage()
            .instance()
            .set(&DataKey::PendingInterest, &amount);
    }
}
