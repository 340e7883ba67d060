pub mod action_bundle_context;
pub mod initialize_context;
pub mod instance_registry_context;
pub mod register_component_context;
pub mod registration_context;
