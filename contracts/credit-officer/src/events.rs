//! Event types and topic constants for the CreditOfficer contract.
//! Stable event schemas for indexing and analytics.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// Topic prefix shared by every officer event.
const OFFICER: Symbol = symbol_short!("officer");

/// Event emitted when the borrower draws from the pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BorrowEvent {
    pub borrower: Address,
    pub amount: i128,
    pub new_borrow_balance: i128,
    pub timestamp: u64,
}

/// Event emitted on repayment, whether borrower-initiated or requested by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepayEvent {
    pub payer: Address,
    pub amount: i128,
    pub new_borrow_balance: i128,
    pub timestamp: u64,
}

/// Event emitted when a role (admin, borrower, guardian) changes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub previous: Option<Address>,
    pub current: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeizeEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn publish_borrow(env: &Env, event: BorrowEvent) {
    env.events().publish((OFFICER, symbol_short!("borrow")), event);
}

pub fn publish_repay(env: &Env, event: RepayEvent) {
    env.events().publish((OFFICER, symbol_short!("repay")), event);
}

/// Publish a role change under `role` (e.g. `borrower`, `guardian`, `admin`).
pub fn publish_role_changed(env: &Env, role: Symbol, event: RoleChangedEvent) {
    env.events().publish((OFFICER, role), event);
}

pub fn publish_paused(env: &Env, by: Address) {
    env.events().publish((OFFICER, symbol_short!("paused")), by);
}

pub fn publish_unpaused(env: &Env, by: Address) {
    env.events().publish((OFFICER, symbol_short!("unpaused")), by);
}

pub fn publish_seize(env: &Env, event: SeizeEvent) {
    env.events().publish((OFFICER, symbol_short!("seize")), event);
}
