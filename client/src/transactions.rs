//! Lightweight, nonblocking RPC client utilities for funding accounts, sending transactions and
//! printing the logs of the ARC programs they invoke.

use std::collections::HashSet;

use anyhow::{
    bail,
    Context,
};
use colored::Colorize;
use itertools::Itertools;
use solana_address::Address;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta,
    UiTransactionEncoding,
};

use crate::{
    eprint_kv,
    logs::log_divider,
    program_errors::InstructionFailure,
    LogColor,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(
                DEFAULT_RPC_URL.into(),
                CommitmentConfig::confirmed(),
            ),
            config: Default::default(),
        }
    }
}

impl CustomRpcClient {
    pub fn new(client: Option<RpcClient>, config: Option<SendTransactionConfig>) -> Self {
        let client = client.unwrap_or_else(|| {
            RpcClient::new_with_commitment(DEFAULT_RPC_URL.into(), CommitmentConfig::confirmed())
        });
        Self {
            client,
            config: config.unwrap_or_default(),
        }
    }

    pub fn new_from_url(
        url: &str,
        commitment: CommitmentConfig,
        config: SendTransactionConfig,
    ) -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(url.into(), commitment),
            config,
        }
    }

    pub fn url(&self) -> String {
        self.client.url()
    }

    pub async fn fund_account(&self, address: &Address) -> anyhow::Result<()> {
        fund(&self.client, address).await
    }

    pub async fn fund_new_account(&self) -> anyhow::Result<Keypair> {
        let kp = Keypair::new();
        fund(&self.client, &kp.pubkey()).await?;

        Ok(kp)
    }

    /// Sends and confirms a single signer transaction with the signer passed in as the payer and
    /// sole signer.
    pub async fn send_single_signer(
        &self,
        signer: &Keypair,
        instructions: impl AsRef<[Instruction]>,
    ) -> anyhow::Result<Signature> {
        self.send_and_confirm_txn(signer, &[], instructions.as_ref())
            .await
    }

    /// Sends and confirms a transaction paid for by `payer` and also signed by `signers`.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        send_transaction_with_config(&self.client, payer, signers, instructions, &self.config).await
    }

    pub async fn account_exists(&self, address: &Address) -> anyhow::Result<bool> {
        account_exists(&self.client, address).await
    }
}

const MAX_TRIES: u8 = 20;

pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

async fn fund(rpc: &RpcClient, address: &Address) -> anyhow::Result<()> {
    let airdrop_signature: Signature = rpc
        .request_airdrop(address, DEFAULT_FUND_AMOUNT)
        .await
        .context("Failed to request airdrop")?;

    let mut i = 0;
    // Wait for airdrop confirmation.
    while !rpc
        .confirm_transaction(&airdrop_signature)
        .await
        .context("Couldn't confirm transaction")?
        && i < MAX_TRIES
    {
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        i += 1;
    }

    if i == MAX_TRIES {
        bail!("Airdrop did not land.");
    }

    Ok(())
}

#[derive(Clone, Default)]
pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    /// Prints the confirmed transaction's logs to stderr.
    pub debug_logs: Option<bool>,
    /// Only logs emitted while one of these programs runs are printed. Empty prints every log.
    pub program_id_filter: HashSet<Address>,
}

async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
    config: &SendTransactionConfig,
) -> anyhow::Result<Signature> {
    let bh = rpc
        .get_latest_blockhash()
        .await
        .context("Couldn't fetch the latest blockhash")?;

    let final_instructions: &[Instruction] = &[
        config.compute_budget.map_or(vec![], |budget| {
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(budget),
                ComputeBudgetInstruction::set_compute_unit_price(1),
            ]
        }),
        instructions.to_vec(),
    ]
    .concat();

    let msg = Message::new(final_instructions, Some(&payer.pubkey()));

    let mut tx = Transaction::new_unsigned(msg);
    let all_signers = std::iter::once(payer)
        .chain(signers.iter().copied())
        .unique_by(|kp| kp.pubkey())
        .collect_vec();
    tx.try_sign(&all_signers, bh)
        .context("Couldn't sign the transaction")?;

    match rpc.send_and_confirm_transaction(&tx).await {
        Ok(signature) => {
            // The transaction landed, so failing to fetch its logs doesn't fail the send.
            if matches!(config.debug_logs, Some(true)) {
                match fetch_transaction_json(rpc, signature).await {
                    Ok(encoded) => {
                        print_transaction_logs(signature, encoded, &config.program_id_filter)
                    }
                    Err(error) => {
                        eprint_kv!("Logs unavailable", format!("{error:#}"), LogColor::Warning)
                    }
                }
            }
            Ok(signature)
        }
        Err(error) => {
            if let Some(failure) = InstructionFailure::from_client_error(&error) {
                eprint_kv!("Program error", failure, LogColor::Error);
                eprint_kv!("Payer", payer.pubkey(), LogColor::Error);
            }
            Err(error).context("Failed transaction submission")
        }
    }
}

fn print_transaction_logs(
    signature: Signature,
    encoded: EncodedConfirmedTransactionWithStatusMeta,
    program_id_filter: &HashSet<Address>,
) {
    let Some(meta) = encoded.transaction.meta else {
        return;
    };
    let logs: Vec<String> = meta.log_messages.unwrap_or(vec![]);

    log_divider();
    eprint_kv!("Transaction", signature, LogColor::Header);
    for line in filter_program_logs(&logs, program_id_filter) {
        eprintln!("  {}", line.dimmed());
    }
    log_divider();
}

/// Returns the log lines emitted while a program in `filter` is executing, including the lines of
/// any programs it invokes. An empty filter keeps every line.
pub fn filter_program_logs<'a>(logs: &'a [String], filter: &HashSet<Address>) -> Vec<&'a str> {
    if filter.is_empty() {
        return logs.iter().map(String::as_str).collect();
    }

    // The invocation depth at which a filtered program was entered, if one is running.
    let mut entered_at: Option<usize> = None;
    let mut depth = 0;
    let mut kept = vec![];

    for line in logs {
        if let Some(program) = invoked_program(line) {
            depth += 1;
            if entered_at.is_none() && filter.contains(&program) {
                entered_at = Some(depth);
            }
        }

        if entered_at.is_some() {
            kept.push(line.as_str());
        }

        if is_program_exit(line) {
            if entered_at == Some(depth) {
                entered_at = None;
            }
            depth = depth.saturating_sub(1);
        }
    }

    kept
}

/// Parses `Program <address> invoke [<depth>]`.
fn invoked_program(line: &str) -> Option<Address> {
    let rest = line.strip_prefix("Program ")?;
    let (address, rest) = rest.split_once(' ')?;
    if !rest.starts_with("invoke [") {
        return None;
    }
    address.parse().ok()
}

/// Matches `Program <address> success` and `Program <address> failed: <reason>`.
fn is_program_exit(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("Program ") else {
        return false;
    };
    match rest.split_once(' ') {
        Some((address, status)) => {
            (status == "success" || status.starts_with("failed"))
                && address.parse::<Address>().is_ok()
        }
        None => false,
    }
}

async fn fetch_transaction_json(
    rpc: &RpcClient,
    sig: Signature,
) -> anyhow::Result<EncodedConfirmedTransactionWithStatusMeta> {
    rpc.get_transaction_with_config(
        &sig,
        solana_client::rpc_config::RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Json),
            commitment: Some(rpc.commitment()),
            max_supported_transaction_version: Some(0),
        },
    )
    .await
    .with_context(|| format!("Couldn't fetch transaction {sig}"))
}

/// Checks if an account at the given address exists on-chain.
pub async fn account_exists(rpc: &RpcClient, address: &Address) -> anyhow::Result<bool> {
    Ok(rpc
        .get_account_with_commitment(address, rpc.commitment())
        .await
        .context("Couldn't retrieve account data")?
        .value
        .is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logs(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn filters_logs_to_invocations_of_listed_programs() {
        let registry = sol_arc_interface::program::registry::ID;
        let core_ds = sol_arc_interface::program::core_ds::ID;
        let system = Address::default();
        let logs = logs(&[
            &format!("Program {system} invoke [1]"),
            &format!("Program {system} success"),
            &format!("Program {registry} invoke [1]"),
            "Program log: Initialize",
            &format!("Program {core_ds} invoke [2]"),
            "Program log: InitRegistry",
            &format!("Program {core_ds} success"),
            &format!("Program {registry} consumed 4200 of 200000 compute units"),
            &format!("Program {registry} success"),
            &format!("Program {system} invoke [1]"),
            &format!("Program {system} success"),
        ]);

        let kept = filter_program_logs(&logs, &HashSet::from([registry]));
        assert_eq!(kept.len(), 7);
        assert_eq!(kept[0], logs[2]);
        assert_eq!(kept[6], logs[8]);

        let inner_only = filter_program_logs(&logs, &HashSet::from([core_ds]));
        assert_eq!(inner_only, vec![&logs[4], &logs[5], &logs[6]]);

        assert_eq!(filter_program_logs(&logs, &HashSet::new()).len(), logs.len());
    }

    #[test]
    fn failed_invocations_close_the_filtered_range() {
        let registry = sol_arc_interface::program::registry::ID;
        let logs = logs(&[
            &format!("Program {registry} invoke [1]"),
            &format!("Program {registry} failed: custom program error: 0x7"),
            "Program log: unrelated",
        ]);
        assert_eq!(
            filter_program_logs(&logs, &HashSet::from([registry])),
            vec![&logs[0], &logs[1]]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn landed_transactions_succeed_without_their_logs() -> anyhow::Result<()> {
        use std::collections::HashMap;

        use solana_client::rpc_request::RpcRequest;

        // The mock lands every transaction but can't return one.
        let client = RpcClient::new_mock_with_mocks(
            "succeeds".to_string(),
            HashMap::from([(RpcRequest::GetTransaction, serde_json::Value::Null)]),
        );
        let rpc = CustomRpcClient::new(
            Some(client),
            Some(SendTransactionConfig {
                debug_logs: Some(true),
                ..Default::default()
            }),
        );

        let payer = Keypair::new();
        let recipient = Address::new_unique();
        let transfer = solana_system_interface::instruction::transfer(&payer.pubkey(), &recipient, 1);
        let signature = rpc.send_single_signer(&payer, [transfer]).await?;
        assert_ne!(signature, Signature::default());

        Ok(())
    }
}
