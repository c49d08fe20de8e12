mod common;

use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;

use common::*;
use esusu_api::prelude::*;
use esusu_client as esusu;
use esusu_client::{
    connect, DepositMode, DepositReceipt, Gateway, GatewayConfig, GatewayError,
};

#[tokio::test]
async fn read_pool_returns_contract_fields_verbatim() {
    let mock = Arc::new(MockProvider::new());
    let alice = Pubkey::new_unique();
    let pool = make_pool(7, PoolStatus::Pending, &[alice], 4);
    insert_pool(&mock, &pool);

    let session = test_session(mock.clone());
    let (got, address) = esusu::get_pool(&session, 7).await.unwrap();

    assert_eq!(got, pool);
    assert_eq!(address, pool_pda(7).0);
    assert_eq!(got.pool_status(), PoolStatus::Pending);
    assert_eq!(from_name(&got.name), "circle-7");
}

#[tokio::test]
async fn missing_pool_surfaces_a_structured_error() {
    let mock = Arc::new(MockProvider::new());
    let session = test_session(mock);

    let err = esusu::get_pool(&session, 99).await.unwrap_err();
    assert!(matches!(err, GatewayError::AccountNotFound(_)));
}

#[tokio::test]
async fn native_deposit_settles_with_base_unit_value() {
    let mock = Arc::new(MockProvider::new());
    let session = test_session(mock.clone());

    let receipt = esusu::deposit_asset(&session, "sol", 2.5).await.unwrap();

    assert!(matches!(receipt, DepositReceipt::Settled(_)));
    assert_eq!(mock.sent_count(), 1);
    assert_eq!(mock.simulated_count(), 0);

    let tx = mock.sent_transaction(0);
    let ix = &tx.message.instructions[0];
    assert_eq!(ix.data[0], InstructionType::DepositAsset as u8);

    let args: DepositAsset = bytemuck::pod_read_unaligned(&ix.data[1..]);
    assert_eq!(from_asset(&args.asset), "SOL");
    assert_eq!(u64::from_le_bytes(args.amount), 2_500_000_000);
}

#[tokio::test]
async fn non_native_deposit_only_simulates_by_default() {
    let mock = Arc::new(MockProvider::new());
    let session = test_session(mock.clone());

    let receipt = esusu::deposit_asset(&session, "USDT", 40.0).await.unwrap();

    match receipt {
        DepositReceipt::Simulated(outcome) => assert!(outcome.succeeded()),
        DepositReceipt::Settled(_) => panic!("non-native deposit settled in simulate mode"),
    }
    assert_eq!(mock.sent_count(), 0);
    assert_eq!(mock.simulated_count(), 1);

    let tx = mock.simulated_transaction(0);
    let args: DepositAsset = bytemuck::pod_read_unaligned(&tx.message.instructions[0].data[1..]);
    assert_eq!(u64::from_le_bytes(args.amount), 40 * ONE_UNIT);
}

#[tokio::test]
async fn settle_mode_submits_non_native_deposits() {
    let mock = Arc::new(MockProvider::new());
    let session = test_session_with_mode(mock.clone(), DepositMode::Settle);

    let receipt = esusu::deposit_asset(&session, "USDT", 40.0).await.unwrap();

    assert!(matches!(receipt, DepositReceipt::Settled(_)));
    assert_eq!(mock.sent_count(), 1);
    assert_eq!(mock.simulated_count(), 0);
}

#[tokio::test]
async fn create_pool_sends_exactly_one_transaction() {
    let mock = Arc::new(MockProvider::new());
    insert_registry(&mock, &make_registry(3));

    let session = test_session(mock.clone());
    let (pool_id, _signature) = esusu::create_pool(&session, "adire-circle", "usdt", 50.0, "sol")
        .await
        .unwrap();

    assert_eq!(pool_id, 3);
    assert_eq!(mock.sent_count(), 1);

    let tx = mock.sent_transaction(0);
    let ix = &tx.message.instructions[0];
    assert_eq!(ix.data[0], InstructionType::CreatePool as u8);

    let args: CreatePool = bytemuck::pod_read_unaligned(&ix.data[1..]);
    assert_eq!(from_name(&args.name), "adire-circle");
    assert_eq!(from_asset(&args.pool_asset), "USDT");
    assert_eq!(from_asset(&args.stake_asset), "SOL");
    assert_eq!(u64::from_le_bytes(args.asset_amount), 50 * ONE_UNIT);
}

#[tokio::test]
async fn join_pool_sends_exactly_one_transaction() {
    let mock = Arc::new(MockProvider::new());
    insert_pool(&mock, &make_pool(1, PoolStatus::Pending, &[], 4));

    let session = test_session(mock.clone());
    esusu::join_pool(&session, 1).await.unwrap();

    assert_eq!(mock.sent_count(), 1);
    let tx = mock.sent_transaction(0);
    assert_eq!(tx.message.instructions.len(), 1);
    assert_eq!(tx.message.instructions[0].data[0], InstructionType::JoinPool as u8);
}

#[tokio::test]
async fn rejected_write_is_returned_not_retried() {
    let mock = Arc::new(MockProvider::rejecting());
    insert_registry(&mock, &make_registry(0));

    let session = test_session(mock.clone());
    let err = esusu::create_pool(&session, "adire-circle", "USDT", 50.0, "SOL")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Contract(EsusuError::InsufficientBalance)));
    assert_eq!(mock.sent_count(), 1);
}

#[test]
fn provider_absence_leaves_the_gateway_disconnected() {
    let gateway = connect(GatewayConfig {
        rpc_url: "http://127.0.0.1:8899".to_string(),
        keypair_path: "/definitely/not/a/wallet.json".into(),
        deposit_mode: DepositMode::Simulate,
    });

    assert!(!gateway.is_connected());
    assert!(matches!(gateway.session(), Err(GatewayError::Disconnected)));
    assert!(matches!(
        gateway.current_account(),
        Err(GatewayError::NoAccount)
    ));
}

#[test]
fn disconnect_clears_the_session() {
    let mock = Arc::new(MockProvider::new());
    let mut gateway = Gateway::attach(test_session(mock));

    assert!(gateway.is_connected());
    assert!(gateway.current_account().is_ok());

    gateway.disconnect();

    assert!(!gateway.is_connected());
    assert!(matches!(gateway.session(), Err(GatewayError::Disconnected)));
}

#[tokio::test]
async fn pool_lists_pass_through_unmodified() {
    let mock = Arc::new(MockProvider::new());
    insert_pool(&mock, &make_pool(1, PoolStatus::Pending, &[], 4));
    insert_pool(&mock, &make_pool(2, PoolStatus::Running, &[Pubkey::new_unique()], 4));

    let session = test_session(mock.clone());

    assert_eq!(esusu::get_pending_pools(&session).await.unwrap(), vec![1]);
    assert_eq!(esusu::get_running_pools(&session).await.unwrap(), vec![2]);
    assert!(esusu::get_concluded_pools(&session).await.unwrap().is_empty());

    // Join pool 1; once the contract flips it to running with us in the
    // member list, the account-scoped view reports it untouched.
    esusu::join_pool(&session, 1).await.unwrap();
    let us = session.account();
    insert_pool(&mock, &make_pool(1, PoolStatus::Running, &[us], 4));

    let mine = esusu::get_running_pools_for_account(&session, &us).await.unwrap();
    assert_eq!(mine, vec![1]);

    let theirs = esusu::get_running_pools_for_account(&session, &Pubkey::new_unique())
        .await
        .unwrap();
    assert!(theirs.is_empty());
}

#[tokio::test]
async fn dashboard_rows_match_vault_records() {
    let mock = Arc::new(MockProvider::new());
    let session = test_session(mock.clone());
    let us = session.account();

    insert_vault(&mock, &make_vault(us, "SOL", 5 * ONE_UNIT, ONE_UNIT, 0));
    insert_vault(&mock, &make_vault(us, "USDT", 0, 0, 120 * ONE_UNIT));
    // Someone else's vault must not leak into our dashboard.
    insert_vault(&mock, &make_vault(Pubkey::new_unique(), "SOL", 9 * ONE_UNIT, 0, 0));

    let mut rows = esusu::get_dashboard(&session, &us).await.unwrap();
    rows.sort_by(|a, b| a.asset.cmp(&b.asset));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].asset, "SOL");
    assert_eq!(rows[0].available, 5 * ONE_UNIT);
    assert_eq!(rows[0].staked, ONE_UNIT);
    assert_eq!(rows[1].asset, "USDT");
    assert_eq!(rows[1].contributed, 120 * ONE_UNIT);
}

#[tokio::test]
async fn connected_accounts_are_detected_by_their_native_vault() {
    let mock = Arc::new(MockProvider::new());
    let session = test_session(mock.clone());
    let us = session.account();

    assert!(!esusu::is_account_connected(&session, &us).await.unwrap());

    insert_vault(&mock, &make_vault(us, "SOL", 0, 0, 0));
    assert!(esusu::is_account_connected(&session, &us).await.unwrap());
}
