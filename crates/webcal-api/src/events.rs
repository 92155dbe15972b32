// Event HTTP routes

use anyhow::Context;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use webcal_contracts::{
    CreateEventRequest, Event, EventCreated, FieldErrorResponse, MessageResponse,
    EVENT_DELETED_MESSAGE,
};
use webcal_storage::EventStore;

use crate::error::ApiError;
use crate::services::EventService;
use crate::validation::{CreateEventArgs, CreateEventBody, RangeArgs, RangeParams, RangeQuery};

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self::from_service(EventService::new(store))
    }

    pub fn from_service(service: EventService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Create event routes
///
/// `/event/today` is a static segment, so it wins over `/event/{event_id}`.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/event", get(list_events).post(create_event))
        .route("/event/today", get(list_today))
        .route("/event/{event_id}", get(get_event).delete(delete_event))
        .with_state(state)
}

/// Ids that are not integers cannot name an event
fn parse_event_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// GET /event - List events, optionally within [start_time, end_time)
#[utoipa::path(
    get,
    path = "/event",
    params(RangeQuery),
    responses(
        (status = 200, description = "Matching events", body = Vec<Event>),
        (status = 400, description = "Malformed date bound", body = FieldErrorResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    RangeParams(query): RangeParams,
) -> Result<Json<Vec<Event>>, ApiError> {
    let range = RangeArgs::parse(query)?;
    let events = state
        .service
        .list(range.filter())
        .await
        .context("Failed to list events")?;

    Ok(Json(events))
}

/// POST /event - Create a new event
#[utoipa::path(
    post,
    path = "/event",
    request_body(
        content = CreateEventRequest,
        content_type = "application/json",
        description = "Also accepted as an urlencoded form"
    ),
    responses(
        (status = 200, description = "Event created", body = EventCreated),
        (status = 400, description = "Missing or malformed field", body = FieldErrorResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    CreateEventBody(req): CreateEventBody,
) -> Result<Json<EventCreated>, ApiError> {
    let args = CreateEventArgs::parse(req)?;
    let event = state
        .service
        .create(args)
        .await
        .context("Failed to create event")?;

    tracing::info!(event_id = event.id, "Created event {}", event);

    Ok(Json(EventCreated::new(event.event, event.date)))
}

/// GET /event/today - List events dated today
#[utoipa::path(
    get,
    path = "/event/today",
    responses(
        (status = 200, description = "Events dated today", body = Vec<Event>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "events"
)]
pub async fn list_today(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state
        .service
        .list_today()
        .await
        .context("Failed to list today's events")?;

    Ok(Json(events))
}

/// GET /event/{event_id} - Get event by ID
#[utoipa::path(
    get,
    path = "/event/{event_id}",
    params(
        ("event_id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let event_id = parse_event_id(&event_id)?;
    let event = state
        .service
        .get(event_id)
        .await
        .context("Failed to get event")?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(event))
}

/// DELETE /event/{event_id} - Delete event
#[utoipa::path(
    delete,
    path = "/event/{event_id}",
    params(
        ("event_id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 404, description = "Event not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let event_id = parse_event_id(&event_id)?;
    let deleted = state
        .service
        .delete(event_id)
        .await
        .context("Failed to delete event")?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    tracing::info!(event_id, "Deleted event");

    Ok(Json(MessageResponse::new(EVENT_DELETED_MESSAGE)))
}
