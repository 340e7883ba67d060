pub mod initialize;
pub mod mint_metadata;

pub use initialize::*;
pub use mint_metadata::*;
