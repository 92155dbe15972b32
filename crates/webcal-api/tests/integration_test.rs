// Integration tests for the Web Calendar API
// Run against a live server with: cargo test --test integration_test -- --ignored

use serde_json::json;
use webcal_contracts::{Event, EventCreated, MessageResponse};

const API_BASE_URL: &str = "http://127.0.0.1:5000";

#[tokio::test]
#[ignore] // Requires a running server
async fn test_full_event_workflow() {
    let client = reqwest::Client::new();

    println!("Testing full event workflow...");

    // Step 1: Create an event
    let create_response = client
        .post(format!("{}/event", API_BASE_URL))
        .json(&json!({"event": "Integration Meeting", "date": "2031-07-04"}))
        .send()
        .await
        .expect("Failed to create event");

    assert_eq!(create_response.status(), 200);
    let created: EventCreated = create_response
        .json()
        .await
        .expect("Failed to parse create response");
    assert_eq!(created.message, "The event has been added!");
    assert_eq!(created.event, "Integration Meeting");
    assert_eq!(created.date.to_string(), "2031-07-04");

    // Step 2: Find it through the range filter
    let events: Vec<Event> = client
        .get(format!("{}/event", API_BASE_URL))
        .query(&[("start_time", "2031-07-04"), ("end_time", "2031-07-05")])
        .send()
        .await
        .expect("Failed to list events")
        .json()
        .await
        .expect("Failed to parse events");

    let event = events
        .into_iter()
        .find(|e| e.event == "Integration Meeting")
        .expect("Created event missing from range listing");

    // Step 3: Get by ID
    let get_response = client
        .get(format!("{}/event/{}", API_BASE_URL, event.id))
        .send()
        .await
        .expect("Failed to get event");
    assert_eq!(get_response.status(), 200);
    let fetched: Event = get_response.json().await.expect("Failed to parse event");
    assert_eq!(fetched, event);

    // Step 4: Delete it
    let delete_response = client
        .delete(format!("{}/event/{}", API_BASE_URL, event.id))
        .send()
        .await
        .expect("Failed to delete event");
    assert_eq!(delete_response.status(), 200);
    let deleted: MessageResponse = delete_response
        .json()
        .await
        .expect("Failed to parse delete response");
    assert_eq!(deleted.message, "The event has been deleted!");

    // Step 5: It is gone
    let missing = client
        .get(format!("{}/event/{}", API_BASE_URL, event.id))
        .send()
        .await
        .expect("Failed to get event");
    assert_eq!(missing.status(), 404);
    let body: MessageResponse = missing.json().await.expect("Failed to parse 404 body");
    assert_eq!(body.message, "The event doesn't exist!");
}

#[tokio::test]
#[ignore]
async fn test_home_and_health_endpoints() {
    let client = reqwest::Client::new();

    let home: String = client
        .get(format!("{}/", API_BASE_URL))
        .send()
        .await
        .expect("Failed to call home endpoint")
        .json()
        .await
        .expect("Failed to parse home response");
    assert_eq!(home, "Home Page");

    let health = client
        .get(format!("{}/health", API_BASE_URL))
        .send()
        .await
        .expect("Failed to call health endpoint");
    assert_eq!(health.status(), 200);
}
