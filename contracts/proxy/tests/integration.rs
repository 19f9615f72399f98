//! Integration tests for the upgrade proxy using cw-multi-test.
//!
//! The messenger stands in for an upgradeable bridge contract; two stored
//! copies of it play the old and new implementation.

use cosmwasm_std::{to_json_binary, Addr, Empty};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use proxy::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

fn contract_proxy() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        proxy::contract::execute,
        proxy::contract::instantiate,
        proxy::contract::query,
    );
    Box::new(contract)
}

fn contract_target() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        messenger::contract::execute,
        messenger::contract::instantiate,
        messenger::contract::query,
    )
    .with_migrate(messenger::contract::migrate);
    Box::new(contract)
}

struct TestEnv {
    app: App,
    admin: Addr,
    proxy: Addr,
    target: Addr,
    v1: u64,
    v2: u64,
}

fn setup_with_target_admin(target_admin: Option<&str>) -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("admin");

    let proxy_code = app.store_code(contract_proxy());
    let proxy = app
        .instantiate_contract(
            proxy_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
            },
            &[],
            "proxy",
            None,
        )
        .unwrap();

    let v1 = app.store_code(contract_target());
    let v2 = app.store_code(contract_target());
    let wasm_admin = target_admin
        .map(str::to_string)
        .unwrap_or_else(|| proxy.to_string());
    let target = app
        .instantiate_contract(
            v1,
            admin.clone(),
            &messenger::msg::InstantiateMsg {
                owner: admin.to_string(),
                finality_delay_blocks: 1,
                cancellation_delay_seconds: 600,
            },
            &[],
            "target",
            Some(wasm_admin),
        )
        .unwrap();

    TestEnv {
        app,
        admin,
        proxy,
        target,
        v1,
        v2,
    }
}

fn setup() -> TestEnv {
    setup_with_target_admin(None)
}

fn initialize(
    env: &mut TestEnv,
    sender: &Addr,
    implementation: u64,
) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        sender.clone(),
        env.proxy.clone(),
        &ExecuteMsg::Initialize {
            target: env.target.to_string(),
            implementation,
        },
        &[],
    )
}

fn upgrade(env: &mut TestEnv, sender: &Addr, code_id: u64) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        sender.clone(),
        env.proxy.clone(),
        &ExecuteMsg::Upgrade {
            new_implementation: code_id,
            migrate_msg: to_json_binary(&messenger::msg::MigrateMsg {}).unwrap(),
        },
        &[],
    )
}

#[test]
fn test_upgrade_keeps_target_address() {
    let mut env = setup();
    let admin = env.admin.clone();
    let (v1, v2) = (env.v1, env.v2);

    initialize(&mut env, &admin, v1).unwrap();
    upgrade(&mut env, &admin, v2).unwrap();

    let info = env.app.wrap().query_wasm_contract_info(&env.target).unwrap();
    assert_eq!(info.code_id, v2);

    let config: ConfigResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.proxy, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.target, Some(env.target.clone()));
    assert_eq!(config.implementation, Some(v2));

    // still answers at the same address
    let _: messenger::msg::NonceResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.target, &messenger::msg::QueryMsg::L1ToL2Nonce {})
        .unwrap();
}

#[test]
fn test_initialize_checks_target() {
    let mut env = setup();
    let admin = env.admin.clone();
    let v2 = env.v2;

    let err = initialize(&mut env, &admin, v2)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("expected"),
        "Expected ImplementationMismatch, got: {}",
        err
    );

    let mut env = setup_with_target_admin(Some("someoneelse"));
    let admin = env.admin.clone();
    let v1 = env.v1;
    let err = initialize(&mut env, &admin, v1)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("not the wasm admin"),
        "Expected NotTargetAdmin, got: {}",
        err
    );
}

#[test]
fn test_initialize_only_once() {
    let mut env = setup();
    let admin = env.admin.clone();
    let v1 = env.v1;

    initialize(&mut env, &admin, v1).unwrap();
    let err = initialize(&mut env, &admin, v1)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("AlreadyInitialized"),
        "Expected AlreadyInitialized, got: {}",
        err
    );
}

#[test]
fn test_upgrade_requires_initialization() {
    let mut env = setup();
    let admin = env.admin.clone();
    let v2 = env.v2;

    let err = upgrade(&mut env, &admin, v2)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("NotInitialized"),
        "Expected NotInitialized, got: {}",
        err
    );
}

#[test]
fn test_admin_gating_and_change_admin() {
    let mut env = setup();
    let admin = env.admin.clone();
    let dao = Addr::unchecked("dao");
    let (v1, v2) = (env.v1, env.v2);

    let err = initialize(&mut env, &dao, v1)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err.contains("NotAdmin"), "Expected NotAdmin, got: {}", err);

    initialize(&mut env, &admin, v1).unwrap();
    env.app
        .execute_contract(
            admin.clone(),
            env.proxy.clone(),
            &ExecuteMsg::ChangeAdmin {
                admin: dao.to_string(),
            },
            &[],
        )
        .unwrap();

    let err = upgrade(&mut env, &admin, v2)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err.contains("NotAdmin"), "Expected NotAdmin, got: {}", err);

    upgrade(&mut env, &dao, v2).unwrap();
}
