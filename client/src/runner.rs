//! The single invocation runner: resolve a program, call its `initialize` once and return the
//! transaction signature.
//!
//! Nothing is retried and nothing is validated locally. Any failure is returned to the caller as
//! is, with context attached.

use std::{
    collections::BTreeMap,
    io::Write,
};

use anyhow::{
    bail,
    Context,
};
use sol_arc_interface::{
    program,
    seeds::find_component_schema_address,
};
use solana_instruction::Instruction;
use solana_sdk::signature::Signature;

use crate::{
    context::{
        derived,
        registry::RegistryContext,
        tsab::{
            component_key,
            TsabContext,
        },
    },
    provider::Provider,
    workspace::ProgramHandle,
};

/// The component schema the tsab writes its metadata to.
pub const METADATA_COMPONENT: &str = "metadata";

/// Builds the `initialize` instruction of `program`, paid for by `payer`.
///
/// The registry is initialized with the core data store it writes to, and the tsab with the
/// metadata component it mints. The core data store has no `initialize`.
pub fn initialize_instruction(
    program: &ProgramHandle,
    payer: solana_address::Address,
) -> anyhow::Result<Instruction> {
    match program.program_id {
        id if id == program::registry::ID => RegistryContext::new()?.initialize(payer),
        id if id == program::tsab::ID => {
            let metadata = derived(
                find_component_schema_address(METADATA_COMPONENT),
                "metadata component",
            )?;
            TsabContext::new()?.initialize(
                payer,
                BTreeMap::from([(component_key(METADATA_COMPONENT), metadata)]),
            )
        }
        _ => bail!("Program `{}` has no `initialize` instruction", program.name),
    }
}

/// Sends `initialize` to `program` and waits for confirmation.
pub async fn initialize(provider: &Provider, program: &ProgramHandle) -> anyhow::Result<Signature> {
    let instruction = initialize_instruction(program, provider.payer_address())?;
    provider
        .rpc
        .send_single_signer(&provider.payer, [instruction])
        .await
        .with_context(|| format!("`initialize` failed on `{}`", program.name))
}

/// Writes the runner's only output line.
pub fn report(out: &mut impl Write, signature: &Signature) -> std::io::Result<()> {
    writeln!(out, "Your transaction signature: {signature}")
}

/// Resolves `program_name` through `provider`, then calls its `initialize`.
pub async fn run(provider: &Provider, program_name: &str) -> anyhow::Result<Signature> {
    let program = ProgramHandle::resolve(provider, program_name).await?;
    initialize(provider, &program).await
}

#[cfg(test)]
mod tests {
    use sol_arc_interface::instructions::{
        registry::RegistryInstruction,
        tsab::TsabInstruction,
    };
    use solana_address::Address;

    use super::*;
    use crate::workspace::find_program;

    fn handle(name: &str) -> ProgramHandle {
        let (name, program_id) = find_program(name).unwrap();
        ProgramHandle { name, program_id }
    }

    #[test]
    fn initialize_dispatches_on_the_program() {
        let payer = Address::new_unique();

        let registry = initialize_instruction(&handle("registry"), payer).unwrap();
        assert_eq!(registry.program_id, program::registry::ID);
        assert_eq!(registry.data[0], RegistryInstruction::Initialize as u8);

        let tsab = initialize_instruction(&handle("tsab"), payer).unwrap();
        assert_eq!(tsab.program_id, program::tsab::ID);
        assert_eq!(tsab.data[0], TsabInstruction::Initialize as u8);
        // One map entry: the u32 length, a 32-byte key and a 32-byte schema address.
        assert_eq!(tsab.data.len(), 1 + 4 + 32 + 32);

        let error = initialize_instruction(&handle("core_ds"), payer).unwrap_err();
        assert!(error.to_string().contains("no `initialize`"));
    }

    #[test]
    fn report_is_one_line() {
        let signature = Signature::from([7; 64]);
        let mut out = vec![];
        report(&mut out, &signature).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, format!("Your transaction signature: {signature}\n"));
        assert_eq!(out.lines().count(), 1);
    }
}
