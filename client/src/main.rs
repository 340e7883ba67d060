//! `sol-arc`: binds a provider, resolves a workspace program and calls its `initialize` once.
//!
//! Stdout holds exactly one line, the transaction signature. `--verbose` writes the provider and
//! program details to stderr.

use std::collections::HashSet;

use clap::Parser;
use client::{
    eprint_kv,
    provider::{
        expand_tilde,
        Commitment,
        Provider,
        ProviderConfig,
        DEFAULT_WALLET_PATH,
        PROVIDER_URL_ENV,
        WALLET_ENV,
    },
    runner,
    transactions::{
        SendTransactionConfig,
        DEFAULT_RPC_URL,
    },
    workspace::{
        find_program,
        ProgramHandle,
    },
    LogColor,
};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "sol-arc")]
pub struct CliArgs {
    /// Cluster RPC URL.
    #[arg(long, env = PROVIDER_URL_ENV, default_value = DEFAULT_RPC_URL)]
    pub url: String,

    /// Path to the JSON keypair that pays for and signs the transaction.
    #[arg(long, env = WALLET_ENV, default_value = DEFAULT_WALLET_PATH)]
    pub wallet: String,

    /// Workspace name of the program to initialize.
    #[arg(short = 'p', long, default_value = "registry")]
    pub program: String,

    #[arg(long, value_enum, default_value_t = Commitment::Confirmed)]
    pub commitment: Commitment,

    /// Print the provider and program details and the transaction logs to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            url: self.url.clone(),
            wallet: expand_tilde(&self.wallet),
            commitment: self.commitment,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = args.provider_config();

    let provider = Provider::new(
        &config,
        SendTransactionConfig {
            compute_budget: None,
            debug_logs: Some(args.verbose),
            program_id_filter: find_program(&args.program)
                .map(|(_, program_id)| HashSet::from([program_id]))
                .unwrap_or_default(),
        },
    )?;

    if args.verbose {
        eprint_kv!("Cluster", config.url, LogColor::Info);
        eprint_kv!("Commitment", config.commitment, LogColor::Info);
        eprint_kv!("Wallet", config.wallet.display(), LogColor::Info);
        eprint_kv!("Payer", provider.payer_address(), LogColor::Info);
    }

    let program = ProgramHandle::resolve(&provider, &args.program).await?;

    if args.verbose {
        eprint_kv!("Program", program.name, LogColor::Info);
        eprint_kv!("Program id", program.program_id, LogColor::Info);
    }

    let signature = runner::initialize(&provider, &program).await?;

    runner::report(&mut std::io::stdout().lock(), &signature)?;

    Ok(())
}
