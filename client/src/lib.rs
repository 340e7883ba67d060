//! Client-side utilities for the ARC programs.
//!
//! Includes provider binding, workspace program handles, instruction contexts, transaction sending
//! and mollusk helpers, plus the runner behind the `sol-arc` binary.

pub mod context;
pub mod logs;
pub mod mollusk_helpers;
pub mod program_errors;
pub mod provider;
pub mod runner;
pub mod token_instructions;
pub mod transactions;
pub mod workspace;

pub use logs::LogColor;
