//! Contextual address data for building ARC instructions.

use anyhow::Context;
use solana_address::Address;

pub mod registry;
pub mod tsab;

/// Unwraps the result of a `sol_arc_interface::seeds::find_*` derivation.
pub(crate) fn derived(found: Option<(Address, u8)>, account: &str) -> anyhow::Result<Address> {
    found
        .map(|(address, _bump)| address)
        .with_context(|| format!("Couldn't derive the {account} address"))
}
