use soroban_sdk::{
    contract, contractclient, contractimpl, contracttype, token::TokenClient, Address, Env,
};

/// Ledgers an allowance stays valid for after `approve_officer`.
const APPROVAL_LEDGERS: u32 = 1_000;

/// Wire-compatible with the officer's repayment amount.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepayAmount {
    Exact(i128),
    Full,
}

#[contractclient(name = "OfficerClient")]
pub trait OfficerInterface {
    fn borrow(env: Env, caller: Address, amount: i128);
    fn repay(env: Env, caller: Address, amount: RepayAmount) -> i128;
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum DataKey {
    Owner,
    Token,
    Officer,
}

fn read(env: &Env, key: &DataKey) -> Address {
    env.storage().instance().get(key).expect("borrower not constructed")
}

fn require_owner(env: &Env) {
    read(env, &DataKey::Owner).require_auth();
}

fn approve_allowance(env: &Env, amount: i128, live_for: u32) {
    let officer = read(env, &DataKey::Officer);
    let expiration = env.ledger().sequence() + live_for;
    TokenClient::new(env, &read(env, &DataKey::Token)).approve(
        &env.current_contract_address(),
        &officer,
        &amount,
        &expiration,
    );
}

fn repay_via_officer(env: &Env, amount: RepayAmount) -> i128 {
    let officer = read(env, &DataKey::Officer);
    OfficerClient::new(env, &officer).repay(&env.current_contract_address(), &amount)
}

/// Borrower contract registered with the officer. Borrowed funds stay in this
/// contract; the owner drives it.
#[contract]
pub struct MockCreditBorrower;

#[contractimpl]
impl MockCreditBorrower {
    pub fn __constructor(env: Env, owner: Address, token: Address, officer: Address) {
        let instance = env.storage().instance();
        instance.set(&DataKey::Owner, &owner);
        instance.set(&DataKey::Token, &token);
        instance.set(&DataKey::Officer, &officer);
    }

    pub fn borrow(env: Env, amount: i128) {
        require_owner(&env);
        let officer = read(&env, &DataKey::Officer);
        OfficerClient::new(&env, &officer).borrow(&env.current_contract_address(), &amount);
    }

    pub fn repay(env: Env, amount: i128) -> i128 {
        require_owner(&env);
        approve_allowance(&env, amount, 0);
        repay_via_officer(&env, RepayAmount::Exact(amount))
    }

    /// Repay the whole outstanding balance, allowing the officer up to all held funds.
    pub fn repay_all(env: Env) -> i128 {
        require_owner(&env);
        let token = read(&env, &DataKey::Token);
        let held = TokenClient::new(&env, &token).balance(&env.current_contract_address());
        approve_allowance(&env, held, 0);
        repay_via_officer(&env, RepayAmount::Full)
    }

    /// Let the officer pull up to `amount` when the admin asks for repayment.
    pub fn approve_officer(env: Env, amount: i128) {
        require_owner(&env);
        approve_allowance(&env, amount, APPROVAL_LEDGERS);
    }

    /// Move `amount` of `token` out of this contract to the owner.
    pub fn seize(env: Env, token: Address, amount: i128) {
        require_owner(&env);
        let owner = read(&env, &DataKey::Owner);
        TokenClient::new(&env, &token).transfer(&env.current_contract_address(), &owner, &amount);
    }
}
