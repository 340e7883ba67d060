use std::collections::{
    BTreeMap,
    HashSet,
};

use client::{
    context::{
        registry::RegistryContext,
        tsab::{
            component_key,
            TsabContext,
        },
    },
    print_kv,
    runner::METADATA_COMPONENT,
    token_instructions::create_nft_mint_instructions,
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
    },
    LogColor,
};
use colored::Colorize;
use sol_arc_interface::{
    program,
    state::tsab::ComponentMetadata,
};
use solana_sdk::{
    program_pack::Pack,
    signature::Keypair,
    signer::Signer,
};
use spl_token_interface::state::Mint;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let rpc = CustomRpcClient::new(
        None,
        Some(SendTransactionConfig {
            compute_budget: None,
            debug_logs: Some(true),
            program_id_filter: HashSet::from([
                program::core_ds::ID,
                program::registry::ID,
                program::tsab::ID,
            ]),
        }),
    );

    let payer = rpc.fund_new_account().await?;
    let registry = RegistryContext::new()?;
    let tsab = TsabContext::new()?;

    // The registry and tsab configs are singletons, so only the first run creates them.
    if !rpc.account_exists(&registry.registry_config).await? {
        rpc.send_single_signer(&payer, [registry.initialize(payer.pubkey())?])
            .await?;
    }
    let (metadata_component, register_metadata) =
        registry.register_component(payer.pubkey(), METADATA_COMPONENT)?;
    if !rpc.account_exists(&metadata_component).await? {
        rpc.send_single_signer(&payer, [register_metadata]).await?;
    }
    if !rpc.account_exists(&tsab.tsab_config).await? {
        let components = BTreeMap::from([(component_key(METADATA_COMPONENT), metadata_component)]);
        rpc.send_single_signer(&payer, [tsab.initialize(payer.pubkey(), components)?])
            .await?;
    }

    // A fresh instance per run, owned by the new payer.
    let instance_id = u64::from_le_bytes(payer.pubkey().to_bytes()[..8].try_into()?);
    let (instance, instance_registry) = registry.instance_registry(payer.pubkey(), instance_id)?;
    rpc.send_single_signer(
        &payer,
        [
            instance_registry,
            instance.register_action_bundle(payer.pubkey(), payer.pubkey(), tsab.tsab_config)?,
            instance.add_components_to_registration(
                payer.pubkey(),
                payer.pubkey(),
                tsab.tsab_config,
                vec![metadata_component],
            )?,
        ],
    )
    .await?;
    print_kv!("Instance", instance_id, LogColor::Info);

    let mint = Keypair::new();
    let rent = rpc
        .client
        .get_minimum_balance_for_rent_exemption(Mint::LEN)
        .await?;
    let create_mint = create_nft_mint_instructions(
        &payer.pubkey(),
        &mint.pubkey(),
        &payer.pubkey(),
        rent,
        &spl_token_interface::ID,
    )?;
    rpc.send_and_confirm_txn(&payer, &[&mint], &create_mint)
        .await?;

    let (entity, arcnft, mint_metadata) = tsab.mint_metadata(
        payer.pubkey(),
        &instance,
        1,
        ComponentMetadata {
            update_authority: payer.pubkey(),
            mint: mint.pubkey(),
            name: "Arc #1".into(),
            symbol: "ARC".into(),
            uri: "https://example.com/arc/1.json".into(),
            is_mutable: true,
        },
    )?;
    let signature = rpc.send_single_signer(&payer, [mint_metadata]).await?;

    print_kv!("Mint", mint.pubkey(), LogColor::Info);
    print_kv!("Entity", entity, LogColor::Info);
    print_kv!("ARC-NFT", arcnft, LogColor::Info);
    print_kv!("Signature", signature, LogColor::Highlight);

    Ok(())
}
