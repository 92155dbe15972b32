// SQLite storage layer with sqlx
//
// This crate provides the event store:
// - Database: sqlx pool wrapper with the events queries
// - EventStore: the trait the API layer depends on, implemented by Database

pub mod models;
pub mod repositories;
pub mod store;

pub use models::*;
pub use repositories::*;
pub use store::EventStore;
