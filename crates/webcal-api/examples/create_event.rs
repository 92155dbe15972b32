// Example: Create, list and delete an event via the API
// Run with: cargo run --example create_event
//
// Prerequisites:
// 1. Start the API in another terminal: cargo run -p webcal-api

use webcal_contracts::{Event, EventCreated, MessageResponse};

const API_BASE_URL: &str = "http://127.0.0.1:5000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();

    // Step 1: Create an event
    println!("Creating event...");
    let create_response = client
        .post(format!("{}/event", API_BASE_URL))
        .form(&[("event", "Team Meeting"), ("date", "2024-01-15")])
        .send()
        .await?;

    if !create_response.status().is_success() {
        eprintln!("Failed to create event: {}", create_response.status());
        eprintln!("Response: {}", create_response.text().await?);
        return Ok(());
    }

    let created: EventCreated = create_response.json().await?;
    println!("{}", created.message);
    println!("   Name: {}", created.event);
    println!("   Date: {}", created.date);

    // Step 2: List events in January 2024
    println!("\nListing events in January 2024...");
    let events: Vec<Event> = client
        .get(format!("{}/event", API_BASE_URL))
        .query(&[("start_time", "2024-01-01"), ("end_time", "2024-02-01")])
        .send()
        .await?
        .json()
        .await?;
    for event in &events {
        println!("   {}", event);
    }

    // Step 3: Delete the events we just listed
    for event in events.iter().filter(|e| e.event == created.event) {
        let deleted: MessageResponse = client
            .delete(format!("{}/event/{}", API_BASE_URL, event.id))
            .send()
            .await?
            .json()
            .await?;
        println!("\nEvent {}: {}", event.id, deleted.message);
    }

    Ok(())
}
