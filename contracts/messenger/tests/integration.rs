//! Integration tests for the messenger using cw-multi-test.
//!
//! Tests:
//! - L1 -> L2 nonce assignment, finality and delivery
//! - Failed delivery leaves the message pending
//! - Per-route delivery order
//! - Two-step cancellation and its race with delivery
//! - L2 -> L1 consumption, finality and replay protection

use cosmwasm_std::{to_json_binary, Addr, Binary, Empty};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use messenger::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, L1ToL2MessageResponse, L2ToL1MessageResponse,
    NonceResponse, QueryMsg,
};
use messenger::state::MessageStatus;

const FINALITY_BLOCKS: u64 = 5;
const CANCELLATION_DELAY: u64 = 600;

// ============================================================================
// Test Setup
// ============================================================================

/// Minimal L2 recipient: records the last delivered message, rejects "fail"
mod receiver {
    use common::L2HandlerMsg;
    use cosmwasm_std::{
        to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
        StdResult,
    };
    use cw_storage_plus::Item;

    pub const LAST: Item<(String, Binary)> = Item::new("last");

    pub fn instantiate(_: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _: Env,
        _: MessageInfo,
        msg: L2HandlerMsg,
    ) -> StdResult<Response> {
        let L2HandlerMsg::ReceiveFromL1 {
            from_address,
            payload,
        } = msg;
        if payload == to_json_binary(&"fail")? {
            return Err(StdError::generic_err("receiver rejected payload"));
        }
        LAST.save(deps.storage, &(from_address, payload))?;
        Ok(Response::new())
    }

    pub fn query(deps: Deps, _: Env, _: Empty) -> StdResult<Binary> {
        to_json_binary(&LAST.may_load(deps.storage)?)
    }
}

fn contract_messenger() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        messenger::contract::execute,
        messenger::contract::instantiate,
        messenger::contract::query,
    );
    Box::new(contract)
}

fn contract_receiver() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(receiver::execute, receiver::instantiate, receiver::query);
    Box::new(contract)
}

struct TestEnv {
    app: App,
    messenger: Addr,
    receiver: Addr,
    owner: Addr,
    l1_sender: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let l1_sender = Addr::unchecked("l1sender");

    let messenger_code = app.store_code(contract_messenger());
    let messenger = app
        .instantiate_contract(
            messenger_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                finality_delay_blocks: FINALITY_BLOCKS,
                cancellation_delay_seconds: CANCELLATION_DELAY,
            },
            &[],
            "messenger",
            None,
        )
        .unwrap();

    let receiver_code = app.store_code(contract_receiver());
    let receiver = app
        .instantiate_contract(receiver_code, owner.clone(), &Empty {}, &[], "receiver", None)
        .unwrap();

    TestEnv {
        app,
        messenger,
        receiver,
        owner,
        l1_sender,
    }
}

fn payload(text: &str) -> Binary {
    to_json_binary(&text).unwrap()
}

fn advance(app: &mut App, blocks: u64, seconds: u64) {
    app.update_block(|block| {
        block.height += blocks;
        block.time = block.time.plus_seconds(seconds);
    });
}

fn send_to_l2(env: &mut TestEnv, body: &Binary) -> (AppResponse, u64) {
    let nonce: NonceResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.messenger, &QueryMsg::L1ToL2Nonce {})
        .unwrap();
    let res = env
        .app
        .execute_contract(
            env.l1_sender.clone(),
            env.messenger.clone(),
            &ExecuteMsg::SendMessageToL2 {
                to: env.receiver.to_string(),
                payload: body.clone(),
            },
            &[],
        )
        .unwrap();
    (res, nonce.nonce)
}

fn relay(env: &mut TestEnv, body: &Binary, nonce: u64) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        Addr::unchecked("relayer"),
        env.messenger.clone(),
        &ExecuteMsg::RelayMessageToL2 {
            from: env.l1_sender.to_string(),
            to: env.receiver.to_string(),
            payload: body.clone(),
            nonce,
        },
        &[],
    )
}

fn message_status(env: &TestEnv, body: &Binary, nonce: u64) -> L1ToL2MessageResponse {
    env.app
        .wrap()
        .query_wasm_smart(
            &env.messenger,
            &QueryMsg::L1ToL2Message {
                from: env.l1_sender.to_string(),
                to: env.receiver.to_string(),
                payload: body.clone(),
                nonce,
            },
        )
        .unwrap()
}

// ============================================================================
// L1 -> L2
// ============================================================================

#[test]
fn test_nonces_increase_per_message() {
    let mut env = setup();
    let body = payload("hello");

    let (_, first) = send_to_l2(&mut env, &body);
    let (res, second) = send_to_l2(&mut env, &body);

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    let data: u64 = cosmwasm_std::from_json(res.data.unwrap()).unwrap();
    assert_eq!(data, 1);

    // identical payloads with different nonces are distinct messages
    assert_ne!(
        message_status(&env, &body, 0).key,
        message_status(&env, &body, 1).key
    );
}

#[test]
fn test_relay_requires_finality() {
    let mut env = setup();
    let body = payload("hello");
    let (_, nonce) = send_to_l2(&mut env, &body);

    let err = relay(&mut env, &body, nonce).unwrap_err().root_cause().to_string();
    assert!(
        err.contains("NotYetFinalized"),
        "Expected NotYetFinalized, got: {}",
        err
    );

    advance(&mut env.app, FINALITY_BLOCKS, 30);
    relay(&mut env, &body, nonce).unwrap();

    let last: Option<(String, Binary)> = env
        .app
        .wrap()
        .query_wasm_smart(&env.receiver, &Empty {})
        .unwrap();
    assert_eq!(last, Some((env.l1_sender.to_string(), body.clone())));
    assert_eq!(
        message_status(&env, &body, nonce).status,
        Some(MessageStatus::Consumed)
    );
}

#[test]
fn test_relay_twice_fails_already_consumed() {
    let mut env = setup();
    let body = payload("hello");
    let (_, nonce) = send_to_l2(&mut env, &body);
    advance(&mut env.app, FINALITY_BLOCKS, 30);

    relay(&mut env, &body, nonce).unwrap();
    let err = relay(&mut env, &body, nonce).unwrap_err().root_cause().to_string();
    assert!(
        err.contains("AlreadyConsumed"),
        "Expected AlreadyConsumed, got: {}",
        err
    );
}

#[test]
fn test_relay_unknown_message_fails() {
    let mut env = setup();
    let err = relay(&mut env, &payload("never sent"), 0)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err.contains("not found"), "Expected not found, got: {}", err);
}

#[test]
fn test_failed_delivery_leaves_message_pending() {
    let mut env = setup();
    let body = payload("fail");
    let (_, nonce) = send_to_l2(&mut env, &body);
    advance(&mut env.app, FINALITY_BLOCKS, 30);

    let err = relay(&mut env, &body, nonce).unwrap_err().root_cause().to_string();
    assert!(
        err.contains("receiver rejected"),
        "Expected receiver error, got: {}",
        err
    );
    assert_eq!(
        message_status(&env, &body, nonce).status,
        Some(MessageStatus::Pending)
    );
}

#[test]
fn test_relay_preserves_send_order() {
    let mut env = setup();
    let first = payload("first");
    let second = payload("second");
    let (_, first_nonce) = send_to_l2(&mut env, &first);
    let (_, second_nonce) = send_to_l2(&mut env, &second);
    advance(&mut env.app, FINALITY_BLOCKS, 30);

    let err = relay(&mut env, &second, second_nonce)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("OutOfOrder: message 1 waits on earlier message 0"),
        "Expected OutOfOrder, got: {}",
        err
    );

    relay(&mut env, &first, first_nonce).unwrap();
    relay(&mut env, &second, second_nonce).unwrap();

    let last: Option<(String, Binary)> = env
        .app
        .wrap()
        .query_wasm_smart(&env.receiver, &Empty {})
        .unwrap();
    assert_eq!(last, Some((env.l1_sender.to_string(), second)));
}

#[test]
fn test_other_senders_are_not_blocked() {
    let mut env = setup();
    let body = payload("hello");
    send_to_l2(&mut env, &body);

    let other = Addr::unchecked("other_sender");
    let nonce: NonceResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.messenger, &QueryMsg::L1ToL2Nonce {})
        .unwrap();
    env.app
        .execute_contract(
            other.clone(),
            env.messenger.clone(),
            &ExecuteMsg::SendMessageToL2 {
                to: env.receiver.to_string(),
                payload: body.clone(),
            },
            &[],
        )
        .unwrap();
    advance(&mut env.app, FINALITY_BLOCKS, 30);

    env.app
        .execute_contract(
            Addr::unchecked("relayer"),
            env.messenger.clone(),
            &ExecuteMsg::RelayMessageToL2 {
                from: other.to_string(),
                to: env.receiver.to_string(),
                payload: body,
                nonce: nonce.nonce,
            },
            &[],
        )
        .unwrap();
}

// ============================================================================
// Cancellation
// ============================================================================

fn start_cancellation(
    env: &mut TestEnv,
    sender: &Addr,
    body: &Binary,
    nonce: u64,
) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        sender.clone(),
        env.messenger.clone(),
        &ExecuteMsg::StartL1ToL2MessageCancellation {
            to: env.receiver.to_string(),
            payload: body.clone(),
            nonce,
        },
        &[],
    )
}

fn cancel(
    env: &mut TestEnv,
    sender: &Addr,
    body: &Binary,
    nonce: u64,
) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        sender.clone(),
        env.messenger.clone(),
        &ExecuteMsg::CancelL1ToL2Message {
            to: env.receiver.to_string(),
            payload: body.clone(),
            nonce,
        },
        &[],
    )
}

#[test]
fn test_cancellation_flow() {
    let mut env = setup();
    let body = payload("hello");
    let (_, nonce) = send_to_l2(&mut env, &body);
    let sender = env.l1_sender.clone();

    let err = cancel(&mut env, &sender, &body, nonce)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("Cancellation not started"),
        "Expected not started, got: {}",
        err
    );

    start_cancellation(&mut env, &sender, &body, nonce).unwrap();
    let status = message_status(&env, &body, nonce);
    assert!(status.cancellation_requested_at.is_some());

    advance(&mut env.app, 1, CANCELLATION_DELAY - 1);
    let err = cancel(&mut env, &sender, &body, nonce)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("Cancellation not ready"),
        "Expected not ready, got: {}",
        err
    );

    advance(&mut env.app, 1, 1);
    cancel(&mut env, &sender, &body, nonce).unwrap();
    assert_eq!(
        message_status(&env, &body, nonce).status,
        Some(MessageStatus::Cancelled)
    );

    // a cancelled message can no longer be delivered
    advance(&mut env.app, FINALITY_BLOCKS, 30);
    let err = relay(&mut env, &body, nonce).unwrap_err().root_cause().to_string();
    assert!(err.contains("cancelled"), "Expected cancelled, got: {}", err);
}

#[test]
fn test_only_sender_can_cancel() {
    let mut env = setup();
    let body = payload("hello");
    let (_, nonce) = send_to_l2(&mut env, &body);

    // the key is recomputed with the caller as sender, so it does not match
    let err = start_cancellation(&mut env, &Addr::unchecked("mallory"), &body, nonce)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err.contains("not found"), "Expected not found, got: {}", err);
}

#[test]
fn test_delivery_wins_race_against_cancellation() {
    let mut env = setup();
    let body = payload("hello");
    let (_, nonce) = send_to_l2(&mut env, &body);
    let sender = env.l1_sender.clone();

    start_cancellation(&mut env, &sender, &body, nonce).unwrap();
    advance(&mut env.app, FINALITY_BLOCKS, CANCELLATION_DELAY);

    // delivery commits first
    relay(&mut env, &body, nonce).unwrap();

    let err = cancel(&mut env, &sender, &body, nonce)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("NotCancellable"),
        "Expected NotCancellable, got: {}",
        err
    );
}

#[test]
fn test_cancelled_message_unblocks_later_ones() {
    let mut env = setup();
    let stuck = payload("fail");
    let next = payload("next");
    let (_, stuck_nonce) = send_to_l2(&mut env, &stuck);
    let (_, next_nonce) = send_to_l2(&mut env, &next);
    let sender = env.l1_sender.clone();
    advance(&mut env.app, FINALITY_BLOCKS, 30);

    // the first message can never be delivered and holds up the route
    assert!(relay(&mut env, &stuck, stuck_nonce).is_err());
    assert!(relay(&mut env, &next, next_nonce).is_err());

    start_cancellation(&mut env, &sender, &stuck, stuck_nonce).unwrap();
    advance(&mut env.app, 1, CANCELLATION_DELAY);
    cancel(&mut env, &sender, &stuck, stuck_nonce).unwrap();

    relay(&mut env, &next, next_nonce).unwrap();
    assert_eq!(
        message_status(&env, &next, next_nonce).status,
        Some(MessageStatus::Consumed)
    );
}

// ============================================================================
// L2 -> L1
// ============================================================================

fn consume(
    env: &mut TestEnv,
    consumer: &Addr,
    from: &str,
    body: &Binary,
) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        consumer.clone(),
        env.messenger.clone(),
        &ExecuteMsg::ConsumeMessageFromL2 {
            from: from.to_string(),
            payload: body.clone(),
        },
        &[],
    )
}

#[test]
fn test_l2_to_l1_consumption() {
    let mut env = setup();
    let l2_sender = Addr::unchecked("l2sender");
    let l1_recipient = Addr::unchecked("l1recipient");
    let body = payload("withdraw");

    env.app
        .execute_contract(
            l2_sender.clone(),
            env.messenger.clone(),
            &ExecuteMsg::SendMessageToL1 {
                to: l1_recipient.to_string(),
                payload: body.clone(),
            },
            &[],
        )
        .unwrap();

    let err = consume(&mut env, &l1_recipient, l2_sender.as_str(), &body)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("NotYetFinalized"),
        "Expected NotYetFinalized, got: {}",
        err
    );

    advance(&mut env.app, FINALITY_BLOCKS, 30);

    // only the addressed contract can consume
    let err = consume(&mut env, &Addr::unchecked("other"), l2_sender.as_str(), &body)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(err.contains("not found"), "Expected not found, got: {}", err);

    consume(&mut env, &l1_recipient, l2_sender.as_str(), &body).unwrap();

    let err = consume(&mut env, &l1_recipient, l2_sender.as_str(), &body)
        .unwrap_err()
        .root_cause()
        .to_string();
    assert!(
        err.contains("AlreadyConsumed"),
        "Expected AlreadyConsumed, got: {}",
        err
    );

    let status: L2ToL1MessageResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.messenger,
            &QueryMsg::L2ToL1Message {
                from: l2_sender.to_string(),
                to: l1_recipient.to_string(),
                payload: body,
            },
        )
        .unwrap();
    assert_eq!(status.pending, 0);
    assert_eq!(status.consumed, 1);
}

#[test]
fn test_identical_l2_messages_are_counted() {
    let mut env = setup();
    let l2_sender = Addr::unchecked("l2sender");
    let l1_recipient = Addr::unchecked("l1recipient");
    let body = payload("withdraw");

    for _ in 0..2 {
        env.app
            .execute_contract(
                l2_sender.clone(),
                env.messenger.clone(),
                &ExecuteMsg::SendMessageToL1 {
                    to: l1_recipient.to_string(),
                    payload: body.clone(),
                },
                &[],
            )
            .unwrap();
    }
    advance(&mut env.app, FINALITY_BLOCKS, 30);

    consume(&mut env, &l1_recipient, l2_sender.as_str(), &body).unwrap();
    consume(&mut env, &l1_recipient, l2_sender.as_str(), &body).unwrap();
    assert!(consume(&mut env, &l1_recipient, l2_sender.as_str(), &body).is_err());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_update_config_owner_only() {
    let mut env = setup();

    let res = env.app.execute_contract(
        Addr::unchecked("mallory"),
        env.messenger.clone(),
        &ExecuteMsg::UpdateConfig {
            finality_delay_blocks: Some(0),
            cancellation_delay_seconds: None,
        },
        &[],
    );
    assert!(res.is_err());

    env.app
        .execute_contract(
            env.owner.clone(),
            env.messenger.clone(),
            &ExecuteMsg::UpdateConfig {
                finality_delay_blocks: Some(0),
                cancellation_delay_seconds: None,
            },
            &[],
        )
        .unwrap();

    let config: ConfigResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.messenger, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.finality_delay_blocks, 0);
    assert_eq!(config.cancellation_delay_seconds, CANCELLATION_DELAY);
}
