//! Resolves ARC programs by their workspace name to handles of deployed programs.

use anyhow::{
    bail,
    Context,
};
use sol_arc_interface::program;
use solana_address::Address;

use crate::provider::Provider;

/// Every program in the workspace, by the name of its crate with `-` replaced by `_`.
pub const WORKSPACE_PROGRAMS: [(&str, Address); 3] = [
    ("core_ds", program::core_ds::ID),
    ("registry", program::registry::ID),
    ("tsab", program::tsab::ID),
];

/// Looks up a workspace program. Dashes and case are ignored, so `core-ds`, `core_ds` and
/// `CORE_DS` all name the core data store.
pub fn find_program(name: &str) -> Option<(&'static str, Address)> {
    let normalized = name.trim().replace('-', "_").to_ascii_lowercase();
    WORKSPACE_PROGRAMS
        .into_iter()
        .find(|(workspace_name, _)| *workspace_name == normalized)
}

/// A program of the workspace that is deployed on the provider's cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramHandle {
    pub name: &'static str,
    pub program_id: Address,
}

impl ProgramHandle {
    /// Resolves `name` and checks its program account exists and is executable. Unknown names fail
    /// before any request is made.
    pub async fn resolve(provider: &Provider, name: &str) -> anyhow::Result<Self> {
        let Some((name, program_id)) = find_program(name) else {
            bail!(
                "`{name}` isn't a workspace program, expected one of: {}",
                WORKSPACE_PROGRAMS.map(|(name, _)| name).join(", ")
            );
        };

        let account = provider
            .rpc
            .client
            .get_account_with_commitment(&program_id, provider.rpc.client.commitment())
            .await
            .with_context(|| format!("Couldn't fetch the `{name}` program account"))?
            .value;

        match account {
            Some(account) if account.executable => Ok(Self { name, program_id }),
            _ => bail!(
                "Program `{name}` ({program_id}) isn't deployed on {}",
                provider.rpc.url()
            ),
        }
    }
}
