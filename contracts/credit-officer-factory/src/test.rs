use super::*;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{vec, IntoVal};

fn setup(env: &Env) -> (CreditOfficerFactoryClient<'_>, Address, Address) {
    env.mock_all_auths();
    let admin = Address::generate(env);
    let comptroller = Address::generate(env);
    let wasm_hash = BytesN::from_array(env, &[7u8; 32]);
    let factory_id = env.register(
        CreditOfficerFactory,
        (admin.clone(), comptroller.clone(), wasm_hash),
    );
    (
        CreditOfficerFactoryClient::new(env, &factory_id),
        admin,
        comptroller,
    )
}

#[test]
fn test_constructor() {
    let env = Env::default();
    let (factory, admin, comptroller) = setup(&env);
    assert_eq!(factory.admin(), admin);
    assert_eq!(factory.comptroller(), comptroller);
    assert_eq!(factory.get_all_credit_officers().len(), 0);
}

#[test]
#[should_panic]
fn test_create_with_non_admin() {
    let env = Env::default();
    let (factory, _admin, _comptroller) = setup(&env);
    let user = Address::generate(&env);
    let ctoken = Address::generate(&env);
    env.mock_auths(&[MockAuth {
        address: &user,
        invoke: &MockAuthInvoke {
            contract: &factory.address,
            fn_name: "create",
            args: (ctoken.clone(),).into_val(&env),
            sub_invokes: &[],
        },
    }]);
    factory.create(&ctoken);
}

#[test]
fn test_registry_storage_one_entry_per_officer() {
    let env = Env::default();
    let (factory, _admin, _comptroller) = setup(&env);
    let first = Address::generate(&env);
    let second = Address::generate(&env);
    env.as_contract(&factory.address, || {
        assert_eq!(storage::push_officer(&env, &first), 0);
        assert_eq!(storage::push_officer(&env, &second), 1);
        assert_eq!(storage::officer_count(&env), 2);
        let persistent = env.storage().persistent();
        assert_eq!(
            persistent.get::<_, Address>(&storage::DataKey::Officer(0)),
            Some(first.clone())
        );
        assert_eq!(
            persistent.get::<_, Address>(&storage::DataKey::Officer(1)),
            Some(second.clone())
        );
    });
    assert_eq!(factory.get_all_credit_officers(), vec![&env, first, second]);
}

#[test]
fn test_officer_salt_is_unique_per_index() {
    let env = Env::default();
    assert_ne!(officer_salt(&env, 0), officer_salt(&env, 1));
    assert_ne!(officer_salt(&env, 1), officer_salt(&env, 256));
    assert_eq!(officer_salt(&env, 3), officer_salt(&env, 3));
}

#[test]
fn test_transfer_admin() {
    let env = Env::default();
    let (factory, _admin, _comptroller) = setup(&env);
    let new_admin = Address::generate(&env);
    factory.transfer_admin(&new_admin);
    assert_eq!(factory.admin(), new_admin);
}

/// Deployment tests against the compiled officer contract.
#[cfg(feature = "testwasm")]
mod deploy {
    use super::*;
    use credit_mocks::{MockCToken, MockComptroller};

    mod credit_officer {
        soroban_sdk::contractimport!(
            file = "../../target/wasm32v1-none/release/credit_officer.wasm"
        );
    }

    fn setup_with_officer_wasm(
        env: &Env,
    ) -> (CreditOfficerFactoryClient<'_>, Address, Address, Address) {
        env.mock_all_auths();
        let admin = Address::generate(env);
        let token = env
            .register_stellar_asset_contract_v2(Address::generate(env))
            .address();
        let comptroller = env.register(MockComptroller, ());
        let ctoken = env.register(MockCToken, (token,));
        let wasm_hash = env.deployer().upload_contract_wasm(credit_officer::WASM);
        let factory_id = env.register(
            CreditOfficerFactory,
            (admin.clone(), comptroller.clone(), wasm_hash),
        );
        (
            CreditOfficerFactoryClient::new(env, &factory_id),
            admin,
            comptroller,
            ctoken,
        )
    }

    #[test]
    fn test_create() {
        let env = Env::default();
        let (factory, admin, comptroller, ctoken) = setup_with_officer_wasm(&env);
        let officer = factory.create(&ctoken);
        assert_eq!(factory.get_all_credit_officers(), vec![&env, officer.clone()]);

        let client = credit_officer::Client::new(&env, &officer);
        assert_eq!(client.admin(), admin);
        assert_eq!(client.comptroller(), comptroller);
        assert_eq!(client.ctoken(), ctoken);
        assert!(!client.paused());
    }

    #[test]
    fn test_create_appends_one_per_call() {
        let env = Env::default();
        let (factory, _admin, _comptroller, ctoken) = setup_with_officer_wasm(&env);
        let first = factory.create(&ctoken);
        let second = factory.create(&ctoken);
        let third = factory.create(&ctoken);
        let officers = factory.get_all_credit_officers();
        assert_eq!(officers.len(), 3);
        assert_eq!(officers, vec![&env, first.clone(), second.clone(), third]);
        assert_ne!(first, second);
        env.as_contract(&factory.address, || {
            assert_eq!(storage::officer_count(&env), 3);
        });
    }
}
