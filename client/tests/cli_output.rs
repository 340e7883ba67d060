use std::process::Command;

use client::provider::{
    PROVIDER_URL_ENV,
    WALLET_ENV,
};
use solana_sdk::{
    signature::Keypair,
    signer::Signer,
};

#[test]
fn failures_write_nothing_to_stdout() -> anyhow::Result<()> {
    let keypair = Keypair::new();
    let wallet = std::env::temp_dir().join(format!("sol-arc-cli-{}.json", keypair.pubkey()));
    std::fs::write(&wallet, serde_json::to_string(&keypair.to_bytes().to_vec())?)?;

    // Nothing listens on port 1.
    let output = Command::new(env!("CARGO_BIN_EXE_sol-arc"))
        .args(["--url", "http://127.0.0.1:1", "--verbose", "--wallet"])
        .arg(&wallet)
        .env_remove(PROVIDER_URL_ENV)
        .env_remove(WALLET_ENV)
        .env("NO_COLOR", "1")
        .output()?;
    std::fs::remove_file(wallet)?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains(&keypair.pubkey().to_string()));
    assert!(stderr.contains("Couldn't fetch the `registry` program account"));

    Ok(())
}
