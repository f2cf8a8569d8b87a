use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum DataKey {
    CreditLimit(Address, Address),
}

#[contract]
pub struct MockComptroller;

#[contractimpl]
impl MockComptroller {
    pub fn set_credit_limit(env: Env, account: Address, ctoken: Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::CreditLimit(account, ctoken), &amount);
    }

    /// Zero unless set.
    pub fn credit_limit(env: Env, account: Address, ctoken: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::CreditLimit(account, ctoken))
            .unwrap_or(0)
    }
}
