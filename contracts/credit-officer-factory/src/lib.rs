#![no_std]

//! Factory for credit officers bound to a single comptroller.
//!
//! Every officer it deploys shares the factory's admin and comptroller and is
//! bound to the pool passed to `create`. Officers are recorded in creation order.

mod storage;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, BytesN, Env, Vec};

/// Deployment salt for the `index`-th officer.
fn officer_salt(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &salt)
}

fn require_admin_auth(env: &Env) -> Address {
    let admin = storage::get_admin(env);
    admin.require_auth();
    admin
}

#[contract]
pub struct CreditOfficerFactory;

#[contractimpl]
impl CreditOfficerFactory {
    /// `officer_wasm_hash` is the uploaded credit officer contract code.
    pub fn __constructor(
        env: Env,
        admin: Address,
        comptroller: Address,
        officer_wasm_hash: BytesN<32>,
    ) {
        storage::init(&env, &admin, &comptroller, &officer_wasm_hash);
        storage::extend_instance(&env);
    }

    /// Deploy a credit officer for `ctoken` (admin only) and return its address.
    pub fn create(env: Env, ctoken: Address) -> Address {
        let admin = require_admin_auth(&env);
        let comptroller = storage::get_comptroller(&env);
        let salt = officer_salt(&env, storage::officer_count(&env));

        let officer = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(
                storage::get_officer_wasm(&env),
                (admin, comptroller, ctoken.clone()),
            );

        storage::push_officer(&env, &officer);
        storage::extend_instance(&env);

        env.events().publish(
            (symbol_short!("factory"), symbol_short!("created")),
            (officer.clone(), ctoken),
        );
        officer
    }

    pub fn get_all_credit_officers(env: Env) -> Vec<Address> {
        storage::get_officers(&env)
    }

    pub fn transfer_admin(env: Env, new_admin: Address) {
        require_admin_auth(&env);
        storage::set_admin(&env, &new_admin);
        storage::extend_instance(&env);
    }

    pub fn admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn comptroller(env: Env) -> Address {
        storage::get_comptroller(&env)
    }
}

#[cfg(test)]
mod test;
