use std::{
    collections::HashMap,
    path::PathBuf,
};

use anyhow::{
    bail,
    Context,
};
use mollusk_svm::{
    program::{
        create_program_account_loader_v3,
        keyed_account_for_system_program,
    },
    Mollusk,
    MolluskContext,
};
use sol_arc_interface::{
    program,
    state::{
        tsab::METADATA_COMPONENT_HASH,
        ProgramAccount,
        SYSTEM_PROGRAM_ID,
    },
};
use solana_account::Account;
use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::{
    program_pack::Pack,
    pubkey,
    rent::Rent,
};
use spl_token_interface::state::Mint;

use crate::{
    context::{
        registry::{
            InstanceContext,
            RegistryContext,
        },
        tsab::TsabContext,
    },
    runner::METADATA_COMPONENT,
    token_instructions::create_nft_mint_instructions,
};

pub type ArcMolluskContext = MolluskContext<HashMap<Address, Account>>;

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `registry.so` would return the absolute path version
/// of `target/deploy/registry`, which is exactly what [`Mollusk::new`] expects.
fn deploy_file_to_program_name(program_name: &str) -> String {
    PathBuf::from(env!("CARGO_WORKSPACE_DIR"))
        .join("target/deploy/")
        .join(program_name)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

/// The ARC programs with their deploy files.
pub const ARC_PROGRAMS: [(Address, &str); 3] = [
    (program::core_ds::ID, "core_ds.so"),
    (program::registry::ID, "registry.so"),
    (program::tsab::ID, "tsab.so"),
];

pub const MOLLUSK_DEFAULT_PAYER: Address = pubkey!("payer11111111111111111111111111111111111111");
pub const MOLLUSK_DEFAULT_MINT: Address = pubkey!("mint111111111111111111111111111111111111111");
pub const MOLLUSK_DEFAULT_INSTANCE: u64 = 0;
pub const MOLLUSK_DEFAULT_FUNDS: u64 = 100_000_000_000;

pub fn funded_system_account(lamports: u64) -> Account {
    Account::new(lamports, 0, &SYSTEM_PROGRAM_ID)
}

/// A rent-exempt account owned by `owner` that already holds `state`.
pub fn program_account<T: ProgramAccount>(owner: &Address, state: &T) -> anyhow::Result<Account> {
    let mut data = vec![0; state.account_len()];
    state.pack_into(&mut data)?;

    Ok(Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner: *owner,
        executable: false,
        rent_epoch: 0,
    })
}

/// Creates and returns a [`MolluskContext`] with the following created and initialized:
/// - The `core_ds`, `registry` and `tsab` programs
/// - The system program
/// - The SPL token and token 2022 programs
/// - The accounts passed
pub fn new_arc_mollusk_context(accounts: Vec<(Address, Account)>) -> ArcMolluskContext {
    let [(first_id, first_file), rest @ ..] = ARC_PROGRAMS;
    let mut mollusk = Mollusk::new(&first_id, &deploy_file_to_program_name(first_file));
    for (program_id, deploy_file) in rest {
        mollusk.add_program(&program_id, &deploy_file_to_program_name(deploy_file));
    }
    mollusk_svm_programs_token::token::add_program(&mut mollusk);
    mollusk_svm_programs_token::token2022::add_program(&mut mollusk);

    // Create mollusk context with the simple hashmap implementation for the AccountStore.
    let context = mollusk.with_context(HashMap::new());

    {
        let mut store = context.account_store.borrow_mut();
        // Programs invoked through CPI must be present as executable accounts.
        for (program_id, _) in ARC_PROGRAMS {
            store.insert(program_id, create_program_account_loader_v3(&program_id));
        }
        let (system_program, system_account) = keyed_account_for_system_program();
        store.insert(system_program, system_account);
        let (token_program, token_account) = mollusk_svm_programs_token::token::keyed_account();
        store.insert(token_program, token_account);

        for (address, account) in accounts {
            store.insert(address, account);
        }
    }

    context
}

/// Processes `instructions` as one chain, failing with the program result if any fails.
pub fn process(context: &ArcMolluskContext, instructions: &[Instruction]) -> anyhow::Result<()> {
    let result = context.process_instruction_chain(instructions);
    if result.program_result.is_err() {
        bail!("Instruction chain failed: {:?}", result.program_result);
    }
    Ok(())
}

/// Decodes a program account from the context's account store.
pub fn fetch<T: ProgramAccount>(context: &ArcMolluskContext, address: &Address) -> anyhow::Result<T> {
    let store = context.account_store.borrow();
    let account = store
        .get(address)
        .with_context(|| format!("No account at {address}"))?;
    Ok(T::unpack(&account.data)?)
}

/// The contexts of a fully set up ARC deployment.
pub struct MolluskArc {
    pub registry: RegistryContext,
    pub instance: InstanceContext,
    pub tsab: TsabContext,
    /// The `metadata` component schema PDA.
    pub metadata_component: Address,
}

/// Creates and returns a [`MolluskContext`] with an ARC deployment ready to mint, paid for by
/// [`MOLLUSK_DEFAULT_PAYER`]:
/// - The registry initialized and instanced as [`MOLLUSK_DEFAULT_INSTANCE`]
/// - The `metadata` component registered
/// - The tsab initialized and registered on the instance, permitted to write `metadata`
/// - An SPL mint at [`MOLLUSK_DEFAULT_MINT`]
pub fn new_arc_mollusk_context_with_tsab(
    accounts: Vec<(Address, Account)>,
) -> anyhow::Result<(ArcMolluskContext, MolluskArc)> {
    let payer = MOLLUSK_DEFAULT_PAYER;
    let context = new_arc_mollusk_context(
        [
            accounts,
            vec![(payer, funded_system_account(MOLLUSK_DEFAULT_FUNDS))],
        ]
        .concat(),
    );

    let registry = RegistryContext::new()?;
    let tsab = TsabContext::new()?;
    let (instance, instance_registry) =
        registry.instance_registry(payer, MOLLUSK_DEFAULT_INSTANCE)?;
    let (metadata_component, register_metadata) =
        registry.register_component(payer, METADATA_COMPONENT)?;

    let [create_mint, initialize_mint] = create_nft_mint_instructions(
        &payer,
        &MOLLUSK_DEFAULT_MINT,
        &payer,
        Rent::default().minimum_balance(Mint::LEN),
        &spl_token_interface::ID,
    )?;

    process(
        &context,
        &[
            registry.initialize(payer)?,
            instance_registry,
            register_metadata,
            tsab.initialize(
                payer,
                [(METADATA_COMPONENT_HASH, metadata_component)].into(),
            )?,
            instance.register_action_bundle(payer, payer, tsab.tsab_config)?,
            instance.add_components_to_registration(
                payer,
                payer,
                tsab.tsab_config,
                vec![metadata_component],
            )?,
            create_mint,
            initialize_mint,
        ],
    )?;

    Ok((
        context,
        MolluskArc {
            registry,
            instance,
            tsab,
            metadata_component,
        },
    ))
}
