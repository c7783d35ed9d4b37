//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_probes_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_capacity_roundtrip() {
    let client = Client::new();

    let response = client
        .put(format!("{}/capacity", BASE_URL))
        .json(&json!({ "value": 40 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/capacity", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["value"], 40);
}

#[tokio::test]
#[ignore]
async fn test_negative_capacity_rejected() {
    let client = Client::new();

    let response = client
        .put(format!("{}/capacity", BASE_URL))
        .json(&json!({ "value": -1 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_client_crud() {
    let client = Client::new();

    let response = client
        .post(format!("{}/clients", BASE_URL))
        .json(&json!({
            "name": "Ana",
            "surname": "Garcia",
            "phone_number": "600111222",
            "email": "ana.garcia@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No id in response");

    let response = client
        .put(format!("{}/clients/{}", BASE_URL, id))
        .json(&json!({ "phone_number": "600333444" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["phone_number"], "600333444");
    assert_eq!(updated["name"], "Ana");

    let response = client
        .get(format!("{}/clients/duplicates?phone=600333444", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let duplicates: Value = response.json().await.expect("Failed to parse response");
    assert!(duplicates
        .as_array()
        .expect("Expected array")
        .iter()
        .any(|c| c["id"] == created["id"]));

    let response = client
        .delete(format!("{}/clients/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_create_client_requires_name() {
    let client = Client::new();

    let response = client
        .post(format!("{}/clients", BASE_URL))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_product_with_bath_composition() {
    let client = Client::new();

    let response = client
        .post(format!("{}/products", BASE_URL))
        .json(&json!({
            "name": "Couple relax pack",
            "price": "96.00",
            "uses_massagist": true,
            "baths": [
                { "massage_type": "relax", "massage_duration": 60, "quantity": 2 }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let product: Value = response.json().await.expect("Failed to parse response");
    let id = product["id"].as_i64().expect("No id in response");

    let response = client
        .get(format!("{}/products/{}/baths", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let baths: Value = response.json().await.expect("Failed to parse response");
    let baths = baths.as_array().expect("Expected array");
    assert_eq!(baths.len(), 1);
    assert_eq!(baths[0]["massage_duration"], 60);
    assert_eq!(baths[0]["quantity"], 2);
}

#[tokio::test]
#[ignore]
async fn test_product_rejects_off_menu_duration() {
    let client = Client::new();

    let response = client
        .post(format!("{}/products", BASE_URL))
        .json(&json!({
            "name": "Broken pack",
            "price": "10.00",
            "baths": [
                { "massage_type": "relax", "massage_duration": 45, "quantity": 1 }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_lifecycle() {
    let client = Client::new();

    // Staff create with a new client and two bath lines
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "client": { "name": "Luis", "phone_number": "600555666" },
            "booking_date": "2030-06-21",
            "hour": "11:00",
            "people": 3,
            "baths": [
                { "massage_type": "relax", "minutes": 60, "quantity": 2 },
                { "massage_type": "none", "minutes": 0, "quantity": 1 }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let booking: Value = response.json().await.expect("Failed to parse response");
    let id = booking["id"].as_i64().expect("No id in response");

    // Order id: ddmmyyyy plus four digits
    let order_id = booking["internal_order_id"].as_str().expect("No order id");
    assert_eq!(order_id.len(), 12);
    assert!(order_id.starts_with("21062030"));

    // The hidden product carries the composition
    let baths = booking["product_baths"].as_array().expect("Expected baths");
    assert_eq!(baths.len(), 2);

    // Edit people and check the audit log records the change
    let response = client
        .put(format!("{}/bookings/{}", BASE_URL, id))
        .json(&json!({ "people": 4, "log_comment": "phone change" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/bookings/{}/logs", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let logs: Value = response.json().await.expect("Failed to parse response");
    let logs = logs.as_array().expect("Expected array");
    assert!(!logs.is_empty());
    let last = logs.last().unwrap()["comment"].as_str().unwrap();
    assert!(last.contains("people: 3 -> 4"));
    assert!(last.contains("phone change"));

    let response = client
        .delete(format!("{}/bookings/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_misaligned_hour() {
    let client = Client::new();

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "client": { "name": "Marta" },
            "booking_date": "2030-06-22",
            "hour": "11:10",
            "people": 1,
            "baths": [ { "massage_type": "none", "minutes": 0, "quantity": 1 } ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_availability_grid_and_schedule() {
    let client = Client::new();

    // 25 slots on the default 10:00-22:00, 30' timeline
    let mut cells = vec![0; 25];
    for cell in cells.iter_mut().take(4) {
        *cell = 2;
    }

    let response = client
        .post(format!("{}/availability/day", BASE_URL))
        .json(&json!({ "date": "2030-07-01", "cells": cells }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let record: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(record["type"], "punctual");

    let response = client
        .get(format!("{}/schedule/2030-07-01", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let schedule: Value = response.json().await.expect("Failed to parse response");
    let slots = schedule["slots"].as_array().expect("Expected slots");
    assert_eq!(slots.len(), 25);
    assert_eq!(slots[0]["massagists"], 2);
    assert_eq!(slots[0]["available_minutes"], 50);
    assert_eq!(slots[4]["massagists"], 0);
}

#[tokio::test]
#[ignore]
async fn test_availability_rejects_mixed_scope() {
    let client = Client::new();

    let response = client
        .post(format!("{}/availability", BASE_URL))
        .json(&json!({
            "type": "punctual",
            "punctual_day": "2030-07-01",
            "weekday": 6,
            "ranges": []
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_schedule_rejects_malformed_date() {
    let client = Client::new();

    let response = client
        .get(format!("{}/schedule/01-07-2030", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_constraint_save_and_clear() {
    let client = Client::new();

    let mut cells = vec![false; 25];
    cells[0] = true;
    cells[1] = true;

    let response = client
        .post(format!("{}/constraints/day", BASE_URL))
        .json(&json!({ "date": "2030-07-02", "cells": cells }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let saved: Value = response.json().await.expect("Failed to parse response");
    // Only the restricted run is stored
    assert_eq!(saved["ranges"].as_array().expect("Expected ranges").len(), 1);

    // Booking into the restricted slot fails
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "client": { "name": "Pep" },
            "booking_date": "2030-07-02",
            "hour": "10:00",
            "people": 1,
            "baths": [ { "massage_type": "none", "minutes": 0, "quantity": 1 } ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // All-open cells remove the record
    let response = client
        .post(format!("{}/constraints/day", BASE_URL))
        .json(&json!({ "date": "2030-07-02", "cells": vec![false; 25] }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let cleared: Value = response.json().await.expect("Failed to parse response");
    assert!(cleared["detail"].is_string());

    let response = client
        .get(format!("{}/constraints/by-date/2030-07-02", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_null());
}

#[tokio::test]
#[ignore]
async fn test_gift_voucher_single_use() {
    let client = Client::new();

    let response = client
        .post(format!("{}/clients", BASE_URL))
        .json(&json!({ "name": "Buyer" }))
        .send()
        .await
        .expect("Failed to send request");
    let buyer: Value = response.json().await.expect("Failed to parse response");

    let response = client
        .post(format!("{}/products", BASE_URL))
        .json(&json!({ "name": "Voucher pack", "price": "48.00" }))
        .send()
        .await
        .expect("Failed to send request");
    let product: Value = response.json().await.expect("Failed to parse response");

    let response = client
        .post(format!("{}/gift-vouchers", BASE_URL))
        .json(&json!({
            "price": "48.00",
            "buyer_client_id": buyer["id"],
            "product_id": product["id"]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let voucher: Value = response.json().await.expect("Failed to parse response");
    let id = voucher["id"].as_i64().expect("No id in response");
    assert!(!voucher["code"].as_str().expect("No code").is_empty());

    let response = client
        .post(format!("{}/gift-vouchers/{}/use", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/gift-vouchers/{}/use", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}
