// EventStore trait
//
// The API layer depends on this trait rather than on Database directly, so the
// store handle is injected into handlers instead of living in a global.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{CreateEvent, DateFilter, EventRow};
use crate::repositories::Database;

/// Persistence contract for events. Every call is a single statement that
/// is committed before it returns.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Insert an event, returning the stored row with its assigned id
    async fn insert(&self, input: CreateEvent) -> Result<EventRow>;

    async fn get(&self, id: i64) -> Result<Option<EventRow>>;

    /// Delete by id. Returns `false` when no row matched.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Events matching `filter`, in creation order
    async fn list(&self, filter: DateFilter) -> Result<Vec<EventRow>>;
}

#[async_trait]
impl EventStore for Database {
    async fn insert(&self, input: CreateEvent) -> Result<EventRow> {
        let row = self.create_event(input).await?;
        tracing::debug!(event_id = row.id, "Inserted event");
        Ok(row)
    }

    async fn get(&self, id: i64) -> Result<Option<EventRow>> {
        self.get_event(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.delete_event(id).await?;
        tracing::debug!(event_id = id, deleted, "Deleted event");
        Ok(deleted)
    }

    async fn list(&self, filter: DateFilter) -> Result<Vec<EventRow>> {
        self.list_events(filter).await
    }
}
