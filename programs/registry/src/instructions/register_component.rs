//! See [`process_register_component`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    accounts::{
        check_pda,
        init_pda_account,
        signer_seeds,
        store,
    },
    error::ArcError,
    instructions::{
        registry::RegisterComponentArgs,
        InstructionArgs,
    },
    state::registry::{
        ComponentSchema,
        MAX_SCHEMA_LEN,
    },
};

use crate::{
    context::register_component_context::RegisterComponentContext,
    debug,
};

/// Registers a component schema at the PDA `[schema]`. Anyone may register a schema, as long as
/// it is unique.
pub fn process_register_component(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let RegisterComponentArgs { schema } = RegisterComponentArgs::unpack(instruction_data)?;
    let mut ctx = RegisterComponentContext::load(accounts)?;

    debug!("RegisterComponent");

    if schema.len() > MAX_SCHEMA_LEN {
        return Err(ArcError::InvalidDataLength.into());
    }

    let component = ComponentSchema { url: schema };
    let seeds: &[&[u8]] = &[component.url.as_bytes()];
    let bump = [check_pda(ctx.component, seeds, &crate::ID)?];

    init_pda_account(
        ctx.payer,
        ctx.component,
        &crate::ID,
        &signer_seeds(seeds, &bump),
        &component,
    )?;

    let config = &mut ctx.registry_signer.config;
    config.components = config
        .components
        .checked_add(1)
        .ok_or(ArcError::ArithmeticOverflow)?;
    store(ctx.registry_signer.account, config)
}
