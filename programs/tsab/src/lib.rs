//! The token-standard action bundle (tsab): mints entities that carry NFT metadata.
//!
//! The tsab config PDA is the action bundle that the registry knows. It signs every request the
//! tsab makes to the registry.

pub mod context;
pub mod debug;
#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;
pub mod instructions;

pub use sol_arc_interface::program::tsab::ID;
