// Request argument schemas
//
// Two explicit parse functions, one for event creation and one for range
// listing. Each returns validated arguments or an ApiError naming the field.

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use chrono::NaiveDate;
use utoipa::IntoParams;
use webcal_contracts::CreateEventRequest;
use webcal_storage::DateFilter;

use crate::error::ApiError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const EVENT_REQUIRED: &str = "The event name is required!";
pub const DATE_REQUIRED: &str =
    "The event date with the correct format is required! The correct format is YYYY-MM-DD!";
pub const START_TIME_FORMAT: &str =
    "The start_time with the correct format is required! The correct format is YYYY-MM-DD!";
pub const END_TIME_FORMAT: &str =
    "The end_time with the correct format is required! The correct format is YYYY-MM-DD!";

/// Parse a `YYYY-MM-DD` calendar date.
///
/// Only digits and dashes are accepted; chrono alone would let padding
/// whitespace and a sign on the year through.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !raw.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Validated arguments for `POST /event`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventArgs {
    pub event: String,
    pub date: NaiveDate,
}

impl CreateEventArgs {
    /// `event` is checked before `date`, so a request missing both reports the name.
    pub fn parse(raw: CreateEventRequest) -> Result<Self, ApiError> {
        let event = raw
            .event
            .filter(|name| !name.trim().is_empty())
            .ok_or(ApiError::validation("event", EVENT_REQUIRED))?;

        let date = raw
            .date
            .as_deref()
            .and_then(parse_date)
            .ok_or(ApiError::validation("date", DATE_REQUIRED))?;

        Ok(Self { event, date })
    }
}

/// Query string of `GET /event`
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub start_time: Option<String>,
    /// Exclusive upper bound, `YYYY-MM-DD`
    pub end_time: Option<String>,
}

impl RangeQuery {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            start_time: first_value(pairs, "start_time"),
            end_time: first_value(pairs, "end_time"),
        }
    }
}

/// Validated range bounds for `GET /event`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeArgs {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeArgs {
    pub fn parse(raw: RangeQuery) -> Result<Self, ApiError> {
        let start = parse_optional_date(raw.start_time.as_deref(), "start_time", START_TIME_FORMAT)?;
        let end = parse_optional_date(raw.end_time.as_deref(), "end_time", END_TIME_FORMAT)?;
        Ok(Self { start, end })
    }

    pub fn filter(&self) -> DateFilter {
        DateFilter::range(self.start, self.end)
    }
}

fn parse_optional_date(
    raw: Option<&str>,
    field: &'static str,
    help: &'static str,
) -> Result<Option<NaiveDate>, ApiError> {
    match raw {
        None => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or(ApiError::validation(field, help)),
    }
}

/// Decoded `key=value` pairs of a query string or form body, in order
type Pairs = Vec<(String, String)>;

/// First value given for `name`; later repeats are ignored.
fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

/// Query extractor for `GET /event`.
///
/// Repeated keys keep their first value, and an undecodable query string
/// becomes an `ApiError` so the response stays JSON.
pub struct RangeParams(pub RangeQuery);

impl<S> FromRequestParts<S> for RangeParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Pairs>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(RangeQuery::from_pairs(&pairs)))
    }
}

/// Argument extractor for `POST /event`.
///
/// Reads a JSON object or an urlencoded form body; fields the body does not
/// carry fall back to the query string. Any other body carries no arguments,
/// which then fails validation on the first field.
pub struct CreateEventBody(pub CreateEventRequest);

impl<S> FromRequest<S> for CreateEventBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Pairs>::try_from_uri(req.uri())
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let body = if content_type.starts_with("application/json") {
            let Json(value) = Json::<serde_json::Value>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            from_json(&value)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Pairs>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            CreateEventRequest {
                event: first_value(&pairs, "event"),
                date: first_value(&pairs, "date"),
            }
        } else {
            CreateEventRequest::default()
        };

        Ok(Self(CreateEventRequest {
            event: body.event.or_else(|| first_value(&query, "event")),
            date: body.date.or_else(|| first_value(&query, "date")),
        }))
    }
}

/// Pick string fields out of a JSON body. Non-string values count as missing.
fn from_json(value: &serde_json::Value) -> CreateEventRequest {
    let field = |name: &str| {
        value
            .get(name)
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    };
    CreateEventRequest {
        event: field("event"),
        date: field("date"),
    }
}
