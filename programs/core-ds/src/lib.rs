//! The ARC core data store: registry instances, entities and their components, and ARC-NFTs.
//!
//! The data store has no opinion on what components mean. It only checks that every mutation is
//! signed by the registry that owns the instance or entity being touched.

pub mod context;
pub mod debug;
#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;
pub mod instructions;
pub mod shared;
pub mod validation;

pub use sol_arc_interface::program::core_ds::ID;
