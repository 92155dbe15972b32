// Event service for business logic

use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use webcal_contracts::Event;
use webcal_storage::{CreateEvent, DateFilter, EventRow, EventStore};

use crate::validation::CreateEventArgs;

/// Current local calendar date
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct EventService {
    store: Arc<dyn EventStore>,
    today: fn() -> NaiveDate,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            today: local_today,
        }
    }

    /// Replace the clock used by `list_today`
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn create(&self, args: CreateEventArgs) -> Result<Event> {
        let input = CreateEvent {
            event: args.event,
            date: args.date,
        };
        let row = self.store.insert(input).await?;
        Ok(Self::row_to_event(row))
    }

    pub async fn get(&self, id: i64) -> Result<Option<Event>> {
        let row = self.store.get(id).await?;
        Ok(row.map(Self::row_to_event))
    }

    pub async fn list(&self, filter: DateFilter) -> Result<Vec<Event>> {
        let rows = self.store.list(filter).await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn list_today(&self) -> Result<Vec<Event>> {
        self.list(DateFilter::On((self.today)())).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.store.delete(id).await
    }

    fn row_to_event(row: EventRow) -> Event {
        Event {
            id: row.id,
            event: row.event,
            date: row.date,
        }
    }
}
