pub mod entity_context;
pub mod init_entity_context;
pub mod init_registry_context;
pub mod mint_arcnft_context;
