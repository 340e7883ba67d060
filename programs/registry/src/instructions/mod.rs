pub mod add_components_to_registration;
pub mod add_instances_to_registration;
pub mod entity_requests;
pub mod initialize;
pub mod instance_registry;
pub mod register_action_bundle;
pub mod register_component;

pub use add_components_to_registration::*;
pub use add_instances_to_registration::*;
pub use entity_requests::*;
pub use initialize::*;
pub use instance_registry::*;
pub use register_action_bundle::*;
pub use register_component::*;
