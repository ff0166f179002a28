//! Interaction routing: classification of inbound actions, custom-id
//! vocabulary, modal form schemas and the component handlers.

pub mod forms;
pub mod ids;
pub mod presence_handler;
pub mod profile_handler;
pub mod router;

pub use router::Router;
