use std::collections::BTreeMap;

use client::{
    context::registry::ActionBundleContext,
    mollusk_helpers::{
        fetch,
        new_arc_mollusk_context_with_tsab,
        process,
        ArcMolluskContext,
        MolluskArc,
        MOLLUSK_DEFAULT_PAYER,
    },
};
use mollusk_svm::result::ProgramResult;
use sol_arc_interface::{
    error::ArcError,
    program,
    state::{
        core_ds::{
            Entity,
            RegistryInstance,
            SerializedComponent,
        },
        ProgramAccount,
    },
};
use solana_address::Address;
use solana_instruction::Instruction;
use solana_program_error::ProgramError;

const PAYER: Address = MOLLUSK_DEFAULT_PAYER;

struct Fixture {
    ctx: ArcMolluskContext,
    arc: MolluskArc,
    bundle: ActionBundleContext,
    position: Address,
}

/// Registers a `position` component and a keypair-less action bundle permitted to write it.
fn setup() -> anyhow::Result<Fixture> {
    let (ctx, arc) = new_arc_mollusk_context_with_tsab(vec![])?;
    let action_bundle = Address::new_unique();
    let (position, register_position) = arc.registry.register_component(PAYER, "position")?;

    process(
        &ctx,
        &[
            register_position,
            arc.instance
                .register_action_bundle(PAYER, PAYER, action_bundle)?,
            arc.instance.add_components_to_registration(
                PAYER,
                PAYER,
                action_bundle,
                vec![position],
            )?,
        ],
    )?;

    let bundle = arc.instance.action_bundle(action_bundle)?;
    Ok(Fixture {
        ctx,
        arc,
        bundle,
        position,
    })
}

fn expect_error(ctx: &ArcMolluskContext, instruction: &Instruction, error: ArcError) {
    let result = ctx.process_instruction(instruction);
    assert_eq!(
        result.program_result,
        ProgramResult::Failure(ProgramError::from(error))
    );
}

fn lamports(ctx: &ArcMolluskContext, address: &Address) -> u64 {
    ctx.account_store
        .borrow()
        .get(address)
        .map_or(0, |account| account.lamports)
}

fn data_len(ctx: &ArcMolluskContext, address: &Address) -> usize {
    ctx.account_store
        .borrow()
        .get(address)
        .map_or(0, |account| account.data.len())
}

#[test]
fn entity_lifecycle() -> anyhow::Result<()> {
    let Fixture {
        ctx,
        arc,
        bundle,
        position,
    } = setup()?;

    let (entity, init_entity) = bundle.init_entity(
        PAYER,
        &arc.instance,
        1,
        BTreeMap::from([(position, SerializedComponent::new(16, vec![1; 8]))]),
    )?;
    process(&ctx, &[init_entity])?;

    let state: Entity = fetch(&ctx, &entity)?;
    assert_eq!(state.entity_id, 1);
    assert_eq!(state.instance, arc.instance.instance);
    assert_eq!(state.registry, program::registry::ID);
    assert_eq!(data_len(&ctx, &entity), state.account_len());
    let instance: RegistryInstance = fetch(&ctx, &arc.instance.registry_instance)?;
    assert_eq!(instance.entities, 1);

    // Data may grow up to the component's max size, never past it.
    process(
        &ctx,
        &[bundle.req_modify_components(entity, vec![(position, vec![2; 16])])?],
    )?;
    assert_eq!(
        fetch::<Entity>(&ctx, &entity)?.components[&position].data,
        vec![2; 16]
    );
    expect_error(
        &ctx,
        &bundle.req_modify_components(entity, vec![(position, vec![3; 17])])?,
        ArcError::InvalidDataLength,
    );

    expect_error(
        &ctx,
        &bundle.req_remove_entity(PAYER, entity)?,
        ArcError::EntityNotEmpty,
    );
    expect_error(
        &ctx,
        &bundle.req_remove_components(PAYER, entity, vec![arc.metadata_component])?,
        ArcError::ComponentNotPermitted,
    );

    // Removing the last component shrinks the entity and refunds the freed rent.
    let payer_before = lamports(&ctx, &PAYER);
    process(
        &ctx,
        &[bundle.req_remove_components(PAYER, entity, vec![position])?],
    )?;
    assert!(fetch::<Entity>(&ctx, &entity)?.components.is_empty());
    assert_eq!(data_len(&ctx, &entity), 8 + Entity::BASE_LEN);
    assert!(lamports(&ctx, &PAYER) > payer_before);

    expect_error(
        &ctx,
        &bundle.req_remove_components(PAYER, entity, vec![position])?,
        ArcError::ComponentNotFound,
    );

    let entity_lamports = lamports(&ctx, &entity);
    let payer_before = lamports(&ctx, &PAYER);
    process(&ctx, &[bundle.req_remove_entity(PAYER, entity)?])?;
    assert_eq!(lamports(&ctx, &entity), 0);
    assert_eq!(lamports(&ctx, &PAYER), payer_before + entity_lamports);

    Ok(())
}

#[test]
fn add_components_grows_the_entity() -> anyhow::Result<()> {
    let Fixture {
        ctx,
        arc,
        bundle,
        position,
    } = setup()?;

    let (entity, init_entity) = bundle.init_entity(PAYER, &arc.instance, 7, BTreeMap::new())?;
    process(&ctx, &[init_entity])?;
    let empty_len = data_len(&ctx, &entity);

    process(
        &ctx,
        &[bundle.req_add_components(
            PAYER,
            entity,
            vec![(position, SerializedComponent::new(64, vec![9; 4]))],
        )?],
    )?;

    let state: Entity = fetch(&ctx, &entity)?;
    assert_eq!(state.components[&position].max_size, 64);
    assert_eq!(data_len(&ctx, &entity), empty_len + 64 + 44);

    // Oversized data is rejected before anything is stored.
    expect_error(
        &ctx,
        &bundle.req_add_components(
            PAYER,
            entity,
            vec![(position, SerializedComponent::new(2, vec![0; 3]))],
        )?,
        ArcError::InvalidDataLength,
    );

    Ok(())
}

#[test]
fn entity_ids_are_unique_per_instance() -> anyhow::Result<()> {
    let Fixture {
        ctx, arc, bundle, ..
    } = setup()?;

    let (_, init_entity) = bundle.init_entity(PAYER, &arc.instance, 3, BTreeMap::new())?;
    process(&ctx, &[init_entity.clone()])?;
    expect_error(&ctx, &init_entity, ArcError::AlreadyInitializedAccount);

    Ok(())
}

#[test]
fn unregistered_action_bundles_are_rejected() -> anyhow::Result<()> {
    let Fixture { ctx, arc, .. } = setup()?;

    // A bundle registered on the instance, pretending to be another bundle.
    let impostor = ActionBundleContext {
        action_bundle: Address::new_unique(),
        ..arc.tsab.action_bundle(&arc.instance)?
    };
    let (_, init_entity) = impostor.init_entity(PAYER, &arc.instance, 1, BTreeMap::new())?;
    expect_error(&ctx, &init_entity, ArcError::ActionBundleMismatch);

    Ok(())
}

#[test]
fn action_bundles_are_limited_to_their_instances() -> anyhow::Result<()> {
    let Fixture {
        ctx, arc, bundle, ..
    } = setup()?;

    let (other_instance, instance_registry) = arc.registry.instance_registry(PAYER, 1)?;
    process(&ctx, &[instance_registry])?;

    // The bundle is only registered on the default instance.
    let (_, init_entity) = bundle.init_entity(PAYER, &other_instance, 1, BTreeMap::new())?;
    expect_error(&ctx, &init_entity, ArcError::InstanceNotRegistered);

    process(
        &ctx,
        &[
            arc.instance.add_instances_to_registration(
                PAYER,
                PAYER,
                bundle.action_bundle,
                vec![other_instance.instance],
            )?,
            init_entity,
        ],
    )?;
    let state: Entity = fetch(&ctx, &other_instance.entity_address(1)?)?;
    assert_eq!(state.instance, other_instance.instance);

    Ok(())
}
