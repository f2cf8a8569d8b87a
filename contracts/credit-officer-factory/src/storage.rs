use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const REGISTRY_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
const REGISTRY_LIFETIME_THRESHOLD: u32 = REGISTRY_BUMP_AMOUNT - 20 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Comptroller,
    OfficerWasm,
    OfficerCount,
    Officer(u32),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn init(env: &Env, admin: &Address, comptroller: &Address, officer_wasm: &BytesN<32>) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Admin, admin);
    instance.set(&DataKey::Comptroller, comptroller);
    instance.set(&DataKey::OfficerWasm, officer_wasm);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin not set")
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_comptroller(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Comptroller)
        .expect("comptroller not set")
}

pub fn get_officer_wasm(env: &Env) -> BytesN<32> {
    env.storage()
        .instance()
        .get(&DataKey::OfficerWasm)
        .expect("officer wasm not set")
}

pub fn officer_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::OfficerCount)
        .unwrap_or(0)
}

/// Officers in creation order.
pub fn get_officers(env: &Env) -> Vec<Address> {
    let persistent = env.storage().persistent();
    let mut officers = Vec::new(env);
    for index in 0..officer_count(env) {
        if let Some(officer) = persistent.get::<_, Address>(&DataKey::Officer(index)) {
            officers.push_back(officer);
        }
    }
    officers
}

/// Record `officer` under the next index and return that index.
pub fn push_officer(env: &Env, officer: &Address) -> u32 {
    let index = officer_count(env);
    let key = DataKey::Officer(index);
    let persistent = env.storage().persistent();
    persistent.set(&key, officer);
    persistent.extend_ttl(&key, REGISTRY_LIFETIME_THRESHOLD, REGISTRY_BUMP_AMOUNT);
    env.storage()
        .instance()
        .set(&DataKey::OfficerCount, &(index + 1));
    index
}
