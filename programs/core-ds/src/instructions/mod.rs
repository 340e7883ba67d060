pub mod add_components;
pub mod init_entity;
pub mod init_registry;
pub mod mint_arcnft;
pub mod modify_components;
pub mod remove_components;
pub mod remove_entity;

pub use add_components::*;
pub use init_entity::*;
pub use init_registry::*;
pub use mint_arcnft::*;
pub use modify_components::*;
pub use remove_components::*;
pub use remove_entity::*;
