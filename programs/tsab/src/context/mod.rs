pub mod initialize_context;
pub mod mint_metadata_context;
