//! Checks shared by the core data store's instruction contexts.

use pinocchio::{
    account::AccountView,
    Address,
};
use sol_arc_interface::{
    error::ArcError,
    seeds::find_registry_signer_address,
    state::core_ds::SerializedComponent,
};

/// Checks that `registry_signer` signed and is the signer PDA of `registry`.
#[inline(always)]
pub fn check_registry_signer(
    registry_signer: &AccountView,
    registry: &Address,
) -> Result<(), ArcError> {
    if !registry_signer.is_signer() {
        return Err(ArcError::MissingRequiredSignature);
    }

    let (expected, _bump) =
        find_registry_signer_address(registry).ok_or(ArcError::AddressDerivationFailed)?;
    if registry_signer.address() != &expected {
        return Err(ArcError::InvalidRegistrySigner);
    }

    Ok(())
}

#[inline(always)]
pub fn validate_components<'a>(
    mut components: impl Iterator<Item = &'a SerializedComponent>,
) -> Result<(), ArcError> {
    components.try_for_each(SerializedComponent::validate)
}
