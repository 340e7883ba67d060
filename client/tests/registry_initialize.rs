use std::collections::BTreeSet;

use client::{
    context::registry::{
        InstanceContext,
        RegistryContext,
    },
    mollusk_helpers::{
        fetch,
        funded_system_account,
        new_arc_mollusk_context,
        process,
        program_account,
        MOLLUSK_DEFAULT_FUNDS,
    },
    runner::initialize_instruction,
    workspace::{
        find_program,
        ProgramHandle,
    },
};
use mollusk_svm::result::ProgramResult;
use sol_arc_interface::{
    error::ArcError,
    program,
    seeds::find_instance_authority_address,
    state::{
        core_ds::RegistryInstance,
        registry::{
            ActionBundleRegistration,
            InstanceAuthority,
            RegistryConfig,
        },
        tsab::TsabConfig,
        ProgramAccount,
    },
};
use solana_address::Address;
use solana_program_error::ProgramError;
use solana_sdk::rent::Rent;

fn handle(name: &str) -> ProgramHandle {
    let (name, program_id) = find_program(name).unwrap();
    ProgramHandle { name, program_id }
}

#[test]
fn runner_initialize_creates_the_registry_config_once() -> anyhow::Result<()> {
    let payer = Address::new_unique();
    let ctx = new_arc_mollusk_context(vec![(payer, funded_system_account(MOLLUSK_DEFAULT_FUNDS))]);
    let registry = RegistryContext::new()?;

    let initialize = initialize_instruction(&handle("registry"), payer)?;
    process(&ctx, &[initialize.clone()])?;

    let config: RegistryConfig = fetch(&ctx, &registry.registry_config)?;
    assert_eq!(config.core_ds, program::core_ds::ID);
    assert_eq!(config.components, 0);
    let store = ctx.account_store.borrow();
    let account = &store[&registry.registry_config];
    assert_eq!(account.owner, program::registry::ID);
    assert_eq!(account.data.len(), config.account_len());
    drop(store);

    // A second `initialize` fails: the config already exists.
    assert_eq!(
        ctx.process_instruction(&initialize).program_result,
        ProgramResult::Failure(ProgramError::from(ArcError::AlreadyInitializedAccount))
    );

    Ok(())
}

#[test]
fn runner_initialize_tops_up_a_prefunded_config() -> anyhow::Result<()> {
    let payer = Address::new_unique();
    let registry = RegistryContext::new()?;
    // Anyone can send lamports to the config's address before it is created.
    let ctx = new_arc_mollusk_context(vec![
        (payer, funded_system_account(MOLLUSK_DEFAULT_FUNDS)),
        (registry.registry_config, funded_system_account(1)),
    ]);

    process(&ctx, &[initialize_instruction(&handle("registry"), payer)?])?;

    let config: RegistryConfig = fetch(&ctx, &registry.registry_config)?;
    assert_eq!(config.core_ds, program::core_ds::ID);
    let store = ctx.account_store.borrow();
    let account = &store[&registry.registry_config];
    assert_eq!(account.owner, program::registry::ID);
    assert_eq!(account.data.len(), config.account_len());
    assert_eq!(
        account.lamports,
        Rent::default().minimum_balance(config.account_len())
    );

    Ok(())
}

#[test]
fn registrations_follow_the_configured_core_ds() -> anyhow::Result<()> {
    let payer = Address::new_unique();
    let core_ds = Address::new_unique();
    let registry = RegistryContext::new()?;

    // An instance of this registry held by a core data store other than the default one.
    let registry_instance = Address::new_unique();
    let instance_authority = find_instance_authority_address(&registry_instance)
        .map(|(address, _)| address)
        .ok_or_else(|| anyhow::anyhow!("No instance authority address"))?;
    let ctx = new_arc_mollusk_context(vec![
        (payer, funded_system_account(MOLLUSK_DEFAULT_FUNDS)),
        (
            registry.registry_config,
            program_account(
                &program::registry::ID,
                &RegistryConfig {
                    core_ds,
                    components: 0,
                },
            )?,
        ),
        (
            registry_instance,
            program_account(
                &core_ds,
                &RegistryInstance {
                    registry: program::registry::ID,
                    instance: 9,
                    entities: 0,
                },
            )?,
        ),
        (
            instance_authority,
            program_account(
                &program::registry::ID,
                &InstanceAuthority {
                    instance: 9,
                    authority: payer,
                },
            )?,
        ),
    ]);

    let instance = InstanceContext {
        registry,
        instance: 9,
        registry_instance,
        instance_authority,
    };
    let action_bundle = Address::new_unique();
    process(
        &ctx,
        &[instance.register_action_bundle(payer, payer, action_bundle)?],
    )?;

    let registration: ActionBundleRegistration =
        fetch(&ctx, &instance.action_bundle(action_bundle)?.registration)?;
    assert_eq!(registration.instances, BTreeSet::from([9]));

    Ok(())
}

#[test]
fn runner_initialize_creates_the_tsab_config() -> anyhow::Result<()> {
    let payer = Address::new_unique();
    let ctx = new_arc_mollusk_context(vec![(payer, funded_system_account(MOLLUSK_DEFAULT_FUNDS))]);

    let initialize = initialize_instruction(&handle("tsab"), payer)?;
    let tsab_config = initialize.accounts[2].pubkey;
    process(&ctx, &[initialize])?;

    let config: TsabConfig = fetch(&ctx, &tsab_config)?;
    assert_eq!(config.authority, payer);
    assert_eq!(config.components.len(), 1);
    assert!(config.metadata_component().is_ok());

    Ok(())
}

#[test]
fn instance_authority_gates_registrations() -> anyhow::Result<()> {
    let payer = Address::new_unique();
    let stranger = Address::new_unique();
    let ctx = new_arc_mollusk_context(vec![
        (payer, funded_system_account(MOLLUSK_DEFAULT_FUNDS)),
        (stranger, funded_system_account(MOLLUSK_DEFAULT_FUNDS)),
    ]);
    let registry = RegistryContext::new()?;
    let (instance, instance_registry) = registry.instance_registry(payer, 5)?;
    process(&ctx, &[registry.initialize(payer)?, instance_registry])?;

    let authority: InstanceAuthority = fetch(&ctx, &instance.instance_authority)?;
    assert_eq!(
        authority,
        InstanceAuthority {
            instance: 5,
            authority: payer,
        }
    );

    let action_bundle = Address::new_unique();
    assert_eq!(
        ctx.process_instruction(&instance.register_action_bundle(
            stranger,
            stranger,
            action_bundle
        )?)
        .program_result,
        ProgramResult::Failure(ProgramError::from(ArcError::InvalidInstanceAuthority))
    );

    process(
        &ctx,
        &[
            instance.register_action_bundle(stranger, payer, action_bundle)?,
            instance.add_instances_to_registration(payer, payer, action_bundle, vec![6, 7])?,
        ],
    )?;

    let registration: ActionBundleRegistration =
        fetch(&ctx, &instance.action_bundle(action_bundle)?.registration)?;
    assert_eq!(
        registration.instances.into_iter().collect::<Vec<_>>(),
        vec![5, 6, 7]
    );

    Ok(())
}

#[test]
fn schemas_longer_than_a_seed_are_rejected() -> anyhow::Result<()> {
    let payer = Address::new_unique();
    let ctx = new_arc_mollusk_context(vec![(payer, funded_system_account(MOLLUSK_DEFAULT_FUNDS))]);
    let registry = RegistryContext::new()?;
    process(&ctx, &[registry.initialize(payer)?])?;

    // Derivation itself fails client-side for seeds over 32 bytes.
    assert!(registry.register_component(payer, &"s".repeat(33)).is_err());

    let (component, register) = registry.register_component(payer, &"s".repeat(32))?;
    process(&ctx, &[register])?;
    assert!(ctx.account_store.borrow().contains_key(&component));
    assert_eq!(
        fetch::<RegistryConfig>(&ctx, &registry.registry_config)?.components,
        1
    );

    Ok(())
}
