use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Guardian,
    Borrower,
    Comptroller,
    CToken,
    BorrowToken,
    Paused,
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn get_address(env: &Env, key: &DataKey) -> Address {
    env.storage()
        .instance()
        .get(key)
        .expect("officer not constructed")
}

fn get_optional(env: &Env, key: &DataKey) -> Option<Address> {
    env.storage().instance().get(key)
}

fn set_optional(env: &Env, key: &DataKey, value: &Option<Address>) {
    match value {
        Some(address) => env.storage().instance().set(key, address),
        None => env.storage().instance().remove(key),
    }
}

pub fn get_admin(env: &Env) -> Address {
    get_address(env, &DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_guardian(env: &Env) -> Option<Address> {
    get_optional(env, &DataKey::Guardian)
}

pub fn set_guardian(env: &Env, guardian: &Option<Address>) {
    set_optional(env, &DataKey::Guardian, guardian);
}

pub fn get_borrower(env: &Env) -> Option<Address> {
    get_optional(env, &DataKey::Borrower)
}

pub fn set_borrower(env: &Env, borrower: &Option<Address>) {
    set_optional(env, &DataKey::Borrower, borrower);
}

pub fn get_comptroller(env: &Env) -> Address {
    get_address(env, &DataKey::Comptroller)
}

pub fn get_ctoken(env: &Env) -> Address {
    get_address(env, &DataKey::CToken)
}

pub fn get_borrow_token(env: &Env) -> Address {
    get_address(env, &DataKey::BorrowToken)
}

/// Write the immutable collaborator addresses. Called once from the constructor.
pub fn set_collaborators(
    env: &Env,
    comptroller: &Address,
    ctoken: &Address,
    borrow_token: &Address,
) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Comptroller, comptroller);
    instance.set(&DataKey::CToken, ctoken);
    instance.set(&DataKey::BorrowToken, borrow_token);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}
