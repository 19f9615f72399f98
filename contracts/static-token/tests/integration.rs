//! Integration tests for the static token using cw-multi-test.
//!
//! Tests:
//! - Bridge-only mint, burn and index push
//! - Rewards index monotonicity
//! - Accrual across mint, transfer and claim
//! - cw20 allowances and owner-only administration

use cosmwasm_std::{Addr, Binary, Empty, Uint128, Uint256};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use common::WAD;
use static_token::msg::{
    ClaimableRewardsResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
    RewardsIndexResponse,
};

// ============================================================================
// Test Setup
// ============================================================================

/// Stand-in bridge: records every `MintRewards` it receives
mod minter {
    use common::messaging::RewardsMinterMsg;
    use cosmwasm_std::{
        to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
        Uint128,
    };
    use cw_storage_plus::Map;

    pub const MINTED: Map<&str, Uint128> = Map::new("minted");

    pub fn instantiate(_: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _: Env,
        _: MessageInfo,
        msg: RewardsMinterMsg,
    ) -> StdResult<Response> {
        let RewardsMinterMsg::MintRewards { recipient, amount } = msg;
        MINTED.update(deps.storage, &recipient, |m| -> StdResult<_> {
            Ok(m.unwrap_or_default() + amount)
        })?;
        Ok(Response::new())
    }

    /// Total minted to the recipient named in the query
    pub fn query(deps: Deps, _: Env, recipient: String) -> StdResult<Binary> {
        to_json_binary(&MINTED.may_load(deps.storage, &recipient)?.unwrap_or_default())
    }
}

fn contract_static_token() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        static_token::contract::execute,
        static_token::contract::instantiate,
        static_token::contract::query,
    );
    Box::new(contract)
}

fn contract_minter() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(minter::execute, minter::instantiate, minter::query);
    Box::new(contract)
}

struct TestEnv {
    app: App,
    token: Addr,
    bridge: Addr,
    owner: Addr,
    alice: Addr,
    bob: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");

    let minter_code = app.store_code(contract_minter());
    let bridge = app
        .instantiate_contract(minter_code, owner.clone(), &Empty {}, &[], "bridge", None)
        .unwrap();

    let token_code = app.store_code(contract_static_token());
    let token = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &InstantiateMsg {
                name: "Static aDAI".to_string(),
                symbol: "stataDAI".to_string(),
                decimals: 18,
                initial_supply: Uint128::zero(),
                recipient: owner.to_string(),
                owner: owner.to_string(),
                bridge: bridge.to_string(),
            },
            &[],
            "static-adai",
            None,
        )
        .unwrap();

    TestEnv {
        app,
        token,
        bridge,
        owner,
        alice,
        bob,
    }
}

fn wad(n: u128) -> Uint256 {
    Uint256::from(n) * WAD
}

fn exec(env: &mut TestEnv, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
    env.app
        .execute_contract(sender.clone(), env.token.clone(), msg, &[])
}

fn mint(env: &mut TestEnv, recipient: &Addr, amount: u128) {
    let bridge = env.bridge.clone();
    exec(
        env,
        &bridge,
        &ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount: Uint128::new(amount),
        },
    )
    .unwrap();
}

fn push_index(
    env: &mut TestEnv,
    block_number: u64,
    index: Uint256,
) -> anyhow::Result<AppResponse> {
    let bridge = env.bridge.clone();
    exec(
        env,
        &bridge,
        &ExecuteMsg::PushRewardsIndex {
            block_number,
            index,
        },
    )
}

fn balance(env: &TestEnv, holder: &Addr) -> Uint128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &QueryMsg::Balance {
                address: holder.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn total_supply(env: &TestEnv) -> Uint128 {
    let res: TokenInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply
}

fn claimable(env: &TestEnv, holder: &Addr) -> Uint128 {
    let res: ClaimableRewardsResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &QueryMsg::ClaimableRewards {
                address: holder.to_string(),
            },
        )
        .unwrap();
    res.amount
}

fn minted_rewards(env: &TestEnv, recipient: &Addr) -> Uint128 {
    env.app
        .wrap()
        .query_wasm_smart(&env.bridge, &recipient.to_string())
        .unwrap()
}

// ============================================================================
// Instantiate
// ============================================================================

#[test]
fn test_instantiate_mints_initial_supply() {
    let mut app = App::default();
    let code = app.store_code(contract_static_token());
    let token = app
        .instantiate_contract(
            code,
            Addr::unchecked("owner"),
            &InstantiateMsg {
                name: "Static aDAI".to_string(),
                symbol: "stataDAI".to_string(),
                decimals: 18,
                initial_supply: Uint128::new(1_000),
                recipient: "treasury".to_string(),
                owner: "owner".to_string(),
                bridge: "bridge".to_string(),
            },
            &[],
            "static-adai",
            None,
        )
        .unwrap();

    let info: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(&token, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.total_supply, Uint128::new(1_000));
    assert_eq!(info.decimals, 18);

    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &token,
            &QueryMsg::Balance {
                address: "treasury".to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.balance, Uint128::new(1_000));

    let index: RewardsIndexResponse = app
        .wrap()
        .query_wasm_smart(&token, &QueryMsg::RewardsIndex {})
        .unwrap();
    assert_eq!(index.index, Uint256::zero());
    assert_eq!(index.block_number, 0);
}

// ============================================================================
// Bridge Authorization
// ============================================================================

#[test]
fn test_only_bridge_can_mint_and_burn() {
    let mut env = setup();
    let alice = env.alice.clone();
    mint(&mut env, &alice, 100);

    let err = exec(
        &mut env,
        &alice,
        &ExecuteMsg::Mint {
            recipient: alice.to_string(),
            amount: Uint128::new(5),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(err.contains("NotBridge"), "Expected NotBridge, got: {}", err);

    let owner = env.owner.clone();
    let err = exec(
        &mut env,
        &owner,
        &ExecuteMsg::Burn {
            holder: alice.to_string(),
            amount: Uint128::new(5),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(err.contains("NotBridge"), "Expected NotBridge, got: {}", err);

    assert_eq!(balance(&env, &alice), Uint128::new(100));
    assert_eq!(total_supply(&env), Uint128::new(100));

    let bridge = env.bridge.clone();
    exec(
        &mut env,
        &bridge,
        &ExecuteMsg::Burn {
            holder: alice.to_string(),
            amount: Uint128::new(40),
        },
    )
    .unwrap();
    assert_eq!(balance(&env, &alice), Uint128::new(60));
    assert_eq!(total_supply(&env), Uint128::new(60));
}

#[test]
fn test_burn_more_than_balance_fails() {
    let mut env = setup();
    let alice = env.alice.clone();
    mint(&mut env, &alice, 10);

    let bridge = env.bridge.clone();
    let err = exec(
        &mut env,
        &bridge,
        &ExecuteMsg::Burn {
            holder: alice.to_string(),
            amount: Uint128::new(11),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(
        err.contains("Cannot Sub with"),
        "Expected insufficient balance, got: {}",
        err
    );
}

// ============================================================================
// Rewards Index
// ============================================================================

#[test]
fn test_push_rewards_index_is_monotonic() {
    let mut env = setup();

    push_index(&mut env, 10, wad(1)).unwrap();
    push_index(&mut env, 11, wad(1)).unwrap();

    let err = push_index(&mut env, 11, wad(2))
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err.contains("StaleIndex"), "Expected StaleIndex, got: {}", err);

    let err = push_index(&mut env, 5, wad(2))
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err.contains("StaleIndex"), "Expected StaleIndex, got: {}", err);

    let err = push_index(&mut env, 12, wad(1) - Uint256::one())
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("IndexRegression"),
        "Expected IndexRegression, got: {}",
        err
    );

    // rejected pushes leave the index untouched
    let index: RewardsIndexResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::RewardsIndex {})
        .unwrap();
    assert_eq!(index.index, wad(1));
    assert_eq!(index.block_number, 11);
}

#[test]
fn test_only_bridge_can_push_index() {
    let mut env = setup();
    let alice = env.alice.clone();
    let err = exec(
        &mut env,
        &alice,
        &ExecuteMsg::PushRewardsIndex {
            block_number: 1,
            index: wad(1),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(err.contains("NotBridge"), "Expected NotBridge, got: {}", err);
}

// ============================================================================
// Claims
// ============================================================================

#[test]
fn test_claim_before_any_push_is_zero() {
    let mut env = setup();
    let alice = env.alice.clone();
    mint(&mut env, &alice, 28);

    assert_eq!(claimable(&env, &alice), Uint128::zero());
    let res = exec(
        &mut env,
        &alice,
        &ExecuteMsg::ClaimRewards {
            recipient: alice.to_string(),
        },
    )
    .unwrap();

    // no-op: nothing minted
    assert_eq!(res.events.iter().filter(|e| e.ty == "execute").count(), 1);
    assert_eq!(minted_rewards(&env, &alice), Uint128::zero());
}

#[test]
fn test_claim_is_idempotent() {
    let mut env = setup();
    let alice = env.alice.clone();
    let bob = env.bob.clone();
    mint(&mut env, &alice, 100);
    push_index(&mut env, 1, WAD / Uint256::from(2u8)).unwrap();

    assert_eq!(claimable(&env, &alice), Uint128::new(50));

    exec(
        &mut env,
        &alice,
        &ExecuteMsg::ClaimRewards {
            recipient: bob.to_string(),
        },
    )
    .unwrap();
    assert_eq!(minted_rewards(&env, &bob), Uint128::new(50));
    assert_eq!(claimable(&env, &alice), Uint128::zero());

    exec(
        &mut env,
        &alice,
        &ExecuteMsg::ClaimRewards {
            recipient: bob.to_string(),
        },
    )
    .unwrap();
    assert_eq!(minted_rewards(&env, &bob), Uint128::new(50));
}

#[test]
fn test_mint_after_push_does_not_earn_past_rewards() {
    let mut env = setup();
    let alice = env.alice.clone();
    push_index(&mut env, 1, wad(3)).unwrap();
    mint(&mut env, &alice, 10);

    assert_eq!(claimable(&env, &alice), Uint128::zero());

    push_index(&mut env, 2, wad(4)).unwrap();
    assert_eq!(claimable(&env, &alice), Uint128::new(10));
}

#[test]
fn test_transfer_settles_both_sides() {
    let mut env = setup();
    let alice = env.alice.clone();
    let bob = env.bob.clone();
    mint(&mut env, &alice, 100);
    push_index(&mut env, 1, wad(1)).unwrap();

    exec(
        &mut env,
        &alice,
        &ExecuteMsg::Transfer {
            recipient: bob.to_string(),
            amount: Uint128::new(50),
        },
    )
    .unwrap();

    push_index(&mut env, 2, wad(2)).unwrap();

    // alice: 100 * 1 before the transfer, 50 * 1 after
    assert_eq!(claimable(&env, &alice), Uint128::new(150));
    // bob only earns from the moment he received
    assert_eq!(claimable(&env, &bob), Uint128::new(50));
}

#[test]
fn test_burn_keeps_settled_rewards() {
    let mut env = setup();
    let alice = env.alice.clone();
    mint(&mut env, &alice, 100);
    push_index(&mut env, 1, wad(1)).unwrap();

    let bridge = env.bridge.clone();
    exec(
        &mut env,
        &bridge,
        &ExecuteMsg::Burn {
            holder: alice.to_string(),
            amount: Uint128::new(100),
        },
    )
    .unwrap();

    push_index(&mut env, 2, wad(5)).unwrap();
    assert_eq!(claimable(&env, &alice), Uint128::new(100));
}

// ============================================================================
// cw20 Allowances
// ============================================================================

#[test]
fn test_transfer_from_uses_allowance() {
    let mut env = setup();
    let alice = env.alice.clone();
    let bob = env.bob.clone();
    mint(&mut env, &alice, 100);

    exec(
        &mut env,
        &alice,
        &ExecuteMsg::IncreaseAllowance {
            spender: bob.to_string(),
            amount: Uint128::new(30),
            expires: None,
        },
    )
    .unwrap();

    exec(
        &mut env,
        &bob,
        &ExecuteMsg::TransferFrom {
            owner: alice.to_string(),
            recipient: bob.to_string(),
            amount: Uint128::new(20),
        },
    )
    .unwrap();
    assert_eq!(balance(&env, &alice), Uint128::new(80));
    assert_eq!(balance(&env, &bob), Uint128::new(20));

    let err = exec(
        &mut env,
        &bob,
        &ExecuteMsg::TransferFrom {
            owner: alice.to_string(),
            recipient: bob.to_string(),
            amount: Uint128::new(11),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(
        err.contains("Cannot Sub with 10 and 11"),
        "Expected allowance error, got: {}",
        err
    );
}

#[test]
fn test_transfer_zero_fails() {
    let mut env = setup();
    let alice = env.alice.clone();
    let bob = env.bob.clone();
    mint(&mut env, &alice, 1);

    let err = exec(
        &mut env,
        &alice,
        &ExecuteMsg::Transfer {
            recipient: bob.to_string(),
            amount: Uint128::zero(),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(err.contains("zero"), "Expected zero amount error, got: {}", err);
}

// ============================================================================
// Owner
// ============================================================================

#[test]
fn test_set_bridge_owner_only() {
    let mut env = setup();
    let alice = env.alice.clone();

    let err = exec(
        &mut env,
        &alice,
        &ExecuteMsg::SetBridge {
            bridge: alice.to_string(),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(err.contains("NotOwner"), "Expected NotOwner, got: {}", err);

    let owner = env.owner.clone();
    exec(
        &mut env,
        &owner,
        &ExecuteMsg::SetBridge {
            bridge: "newbridge".to_string(),
        },
    )
    .unwrap();

    let config: ConfigResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.bridge, Addr::unchecked("newbridge"));

    // the old bridge lost its rights immediately
    let bridge = env.bridge.clone();
    let err = exec(
        &mut env,
        &bridge,
        &ExecuteMsg::Mint {
            recipient: alice.to_string(),
            amount: Uint128::new(1),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(err.contains("NotBridge"), "Expected NotBridge, got: {}", err);

    // and the new one is the cw20 minter
    exec(
        &mut env,
        &Addr::unchecked("newbridge"),
        &ExecuteMsg::Mint {
            recipient: alice.to_string(),
            amount: Uint128::new(3),
        },
    )
    .unwrap();
    assert_eq!(balance(&env, &alice), Uint128::new(3));
}

#[test]
fn test_transfer_ownership() {
    let mut env = setup();
    let owner = env.owner.clone();
    let alice = env.alice.clone();

    exec(
        &mut env,
        &owner,
        &ExecuteMsg::TransferOwnership {
            new_owner: alice.to_string(),
        },
    )
    .unwrap();

    let err = exec(
        &mut env,
        &owner,
        &ExecuteMsg::SetBridge {
            bridge: owner.to_string(),
        },
    )
    .unwrap_err()
    .root_cause()
    .to_string();
    assert!(err.contains("NotOwner"), "Expected NotOwner, got: {}", err);

    exec(
        &mut env,
        &alice,
        &ExecuteMsg::SetBridge {
            bridge: alice.to_string(),
        },
    )
    .unwrap();
}

#[test]
fn test_send_invokes_receiver() {
    let mut env = setup();
    let alice = env.alice.clone();
    mint(&mut env, &alice, 10);

    // the minter does not implement Receive, so the whole send reverts
    let bridge = env.bridge.clone();
    let err = exec(
        &mut env,
        &alice,
        &ExecuteMsg::Send {
            contract: bridge.to_string(),
            amount: Uint128::new(4),
            msg: Binary::default(),
        },
    );
    assert!(err.is_err());
    assert_eq!(balance(&env, &alice), Uint128::new(10));
}
