use std::{
    collections::HashMap,
    path::PathBuf,
};

use client::{
    provider::{
        Commitment,
        Provider,
        ProviderConfig,
    },
    runner,
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
    },
};
use serde_json::{
    json,
    Value,
};
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_request::RpcRequest,
};
use solana_sdk::{
    signature::Keypair,
    signer::Signer,
};

/// Nothing listens on port 1, so every request fails to connect.
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

fn write_wallet() -> anyhow::Result<(PathBuf, Keypair)> {
    let keypair = Keypair::new();
    let path = std::env::temp_dir().join(format!("sol-arc-{}.json", keypair.pubkey()));
    std::fs::write(&path, serde_json::to_string(&keypair.to_bytes().to_vec())?)?;
    Ok((path, keypair))
}

fn offline_provider() -> anyhow::Result<(Provider, PathBuf)> {
    let (wallet, keypair) = write_wallet()?;
    let provider = Provider::new(
        &ProviderConfig {
            url: UNREACHABLE_URL.into(),
            wallet: wallet.clone(),
            commitment: Commitment::Confirmed,
        },
        SendTransactionConfig::default(),
    )?;
    assert_eq!(provider.payer_address(), keypair.pubkey());
    Ok((provider, wallet))
}

#[tokio::test(flavor = "current_thread")]
async fn unreachable_endpoint_fails_without_a_signature() -> anyhow::Result<()> {
    let (provider, wallet) = offline_provider()?;

    let error = runner::run(&provider, "registry").await.unwrap_err();
    assert!(error
        .to_string()
        .contains("Couldn't fetch the `registry` program account"));

    std::fs::remove_file(wallet)?;
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_programs_fail_before_any_request() -> anyhow::Result<()> {
    let (provider, wallet) = offline_provider()?;

    // An unreachable cluster would fail with a fetch error instead.
    let error = runner::run(&provider, "swap_router").await.unwrap_err();
    assert!(error.to_string().contains("isn't a workspace program"));

    std::fs::remove_file(wallet)?;
    Ok(())
}

/// A provider whose cluster holds `program_account` at every program address. The mock cluster
/// lands any transaction sent to it.
fn mock_provider(program_account: Value) -> Provider {
    let client = RpcClient::new_mock_with_mocks(
        "succeeds".to_string(),
        HashMap::from([(
            RpcRequest::GetAccountInfo,
            json!({ "context": { "slot": 1 }, "value": program_account }),
        )]),
    );

    Provider {
        rpc: CustomRpcClient::new(Some(client), None),
        payer: Keypair::new(),
    }
}

fn program_account(executable: bool) -> Value {
    json!({
        "lamports": 1_141_440,
        "data": ["", "base64"],
        "owner": "BPFLoaderUpgradeab1e11111111111111111111111",
        "executable": executable,
        "rentEpoch": 0,
        "space": 0,
    })
}

#[tokio::test(flavor = "current_thread")]
async fn missing_programs_fail_before_initialize() -> anyhow::Result<()> {
    // A landed `initialize` would return a signature instead.
    let error = runner::run(&mock_provider(Value::Null), "registry")
        .await
        .unwrap_err();
    assert!(error.to_string().contains("isn't deployed"));

    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn non_executable_accounts_arent_deployed_programs() -> anyhow::Result<()> {
    let error = runner::run(&mock_provider(program_account(false)), "tsab")
        .await
        .unwrap_err();
    assert!(error.to_string().contains("Program `tsab`"));
    assert!(error.to_string().contains("isn't deployed"));

    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn deployed_programs_report_one_signature_line() -> anyhow::Result<()> {
    let signature = runner::run(&mock_provider(program_account(true)), "registry").await?;

    let mut out = vec![];
    runner::report(&mut out, &signature)?;
    let out = String::from_utf8(out)?;
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![format!("Your transaction signature: {signature}")]
    );

    Ok(())
}
