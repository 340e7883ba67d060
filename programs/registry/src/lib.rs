//! The ARC registry: component schemas, registry instances and the permissions of action bundles.
//!
//! Action bundles never write to the core data store directly. They ask the registry, which checks
//! the bundle is registered for the instance and the components it touches, then forwards the
//! request to the core data store signed by the registry config PDA.

pub mod context;
pub mod debug;
#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;
pub mod instructions;
pub mod validation;

pub use sol_arc_interface::program::registry::ID;
