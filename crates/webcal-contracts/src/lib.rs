// Public contracts for the Web Calendar API
// This crate defines the DTOs returned by the HTTP layer and their OpenAPI schemas

pub mod common;
pub mod event;

pub use common::*;
pub use event::*;
