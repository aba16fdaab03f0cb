//! End-to-end tests of the HTTP API over a real socket
//!
//! The store is in memory; the vehicle registry and mailer are stubs.

mod common;

use common::{StubRegistry, TestApp};
use police_domain::{FailureKind, LookupOutcome, RegistryVehicle, RemoteFailure, VehicleStatus};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn body(response: reqwest::Response) -> Value {
    response.json().await.unwrap()
}

// =============================================================================
// Gate and health
// =============================================================================

#[tokio::test]
async fn test_health_is_open() {
    let app = TestApp::spawn(StubRegistry::default()).await;
    let url = app.base.replace("/api/police", "/health");

    let response = app.client.get(url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_missing_bearer_is_401() {
    let app = TestApp::spawn(StubRegistry::default()).await;

    let response = app.client.get(app.url("/stolen")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body(response).await["code"], "MISSING_CREDENTIAL");

    let response = app
        .client
        .get(app.url("/vehicles/plate/BG-123"))
        .header("Authorization", "Bearer   ")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Writes
// =============================================================================

#[tokio::test]
async fn test_accident_with_failed_notification_is_created_with_warning() {
    let app = TestApp::spawn(StubRegistry {
        fail_notifications: true,
        ..Default::default()
    })
    .await;

    let response = app
        .post(
            "/accidents",
            json!({"involvedPlates": "BG-123,NS-456", "severity": "MAJOR", "location": "Slavija"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body(response).await;
    assert_eq!(created["data"]["severity"], "MAJOR");
    assert!(created["warning"].as_str().unwrap().contains("registry"));

    let listed = body(app.get("/accidents/plate/NS-456").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(app.registry.notified.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_accident_with_delivered_notification_has_no_warning() {
    let app = TestApp::spawn(StubRegistry::default()).await;

    let response = app
        .post("/accidents", json!({"involvedPlates": "KG-789"}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body(response).await;
    assert!(created.get("warning").is_none());
    assert_eq!(created["data"]["severity"], "MINOR");
    assert_eq!(
        app.registry.notified.lock().unwrap().clone(),
        vec![("KG-789".to_string(), VehicleStatus::Accident)]
    );
}

#[tokio::test]
async fn test_validation_and_malformed_json() {
    let app = TestApp::spawn(StubRegistry::default()).await;

    let response = app
        .post(
            "/violations",
            json!({"vehiclePlate": "BG-123", "fineAmount": 10, "type": "JAYWALKING"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body(response).await;
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["error"].as_str().unwrap().contains("type"));

    let response = app
        .client
        .post(app.url("/violations"))
        .bearer_auth("test-token")
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_pay_twice_conflicts() {
    let app = TestApp::spawn(StubRegistry::default()).await;

    let created = body(
        app.post("/violations", json!({"vehiclePlate": "BG-123", "fineAmount": 25.5}))
            .await,
    )
    .await;
    let id = created["data"]["id"].as_u64().unwrap();

    let response = app.put(&format!("/violations/{}/pay", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(response).await["data"]["status"], "PAID");

    let response = app.put(&format!("/violations/{}/pay", id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body(response).await["code"], "INVALID_TRANSITION");

    let response = app.put("/violations/999/pay").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.put("/violations/abc/pay").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_active_stolen_report_conflicts() {
    let app = TestApp::spawn(StubRegistry::default()).await;

    let first = app.post("/stolen", json!({"vehiclePlate": "BG-123"})).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let id = body(first).await["data"]["id"].as_u64().unwrap();

    let second = app.post("/stolen", json!({"vehiclePlate": "BG-123"})).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let recovered = app.put(&format!("/stolen/{}/recover", id)).await;
    assert_eq!(recovered.status(), StatusCode::OK);
    assert_eq!(body(recovered).await["data"]["status"], "RECOVERED");

    let again = app.post("/stolen", json!({"vehiclePlate": "BG-123"})).await;
    assert_eq!(again.status(), StatusCode::CREATED);
}

// =============================================================================
// Dossier
// =============================================================================

#[tokio::test]
async fn test_unknown_plate_is_all_clear() {
    let app = TestApp::spawn(StubRegistry::default()).await;

    let response = app.get("/status/ZZ-999").await;
    assert_eq!(response.status(), StatusCode::OK);

    let dossier = body(response).await;
    assert_eq!(dossier["plateNumber"], "ZZ-999");
    assert_eq!(dossier["isStolen"], false);
    assert_eq!(dossier["activeFlags"], json!([]));
    assert_eq!(dossier["unpaidViolations"], json!([]));
    assert_eq!(dossier["accidentCount"], 0);
    assert_eq!(dossier["totalFinesDue"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_full_dossier_scenario() {
    let app = TestApp::spawn(StubRegistry::default()).await;

    app.post("/stolen", json!({"vehiclePlate": "BG-123", "description": "Red Yugo"}))
        .await;
    app.post("/flags", json!({"vehiclePlate": "BG-123", "flagType": "WARRANT"}))
        .await;
    app.post("/flags", json!({"vehiclePlate": "BG-123", "flagType": "EXPIRED_REG"}))
        .await;
    app.post("/violations", json!({"vehiclePlate": "BG-123", "fineAmount": 50.0}))
        .await;
    let paid = body(
        app.post("/violations", json!({"vehiclePlate": "BG-123", "fineAmount": 120.0}))
            .await,
    )
    .await;
    app.put(&format!("/violations/{}/pay", paid["data"]["id"]))
        .await;
    app.post("/accidents", json!({"involvedPlates": "BG-123,NS-456"}))
        .await;
    app.post("/accidents", json!({"involvedPlates": "KG-789;BG-123"}))
        .await;

    let dossier = body(app.get("/status/BG-123").await).await;
    assert_eq!(dossier["isStolen"], true);
    assert_eq!(dossier["stolenDetails"]["vehiclePlate"], "BG-123");
    assert_eq!(dossier["activeFlags"].as_array().unwrap().len(), 2);
    assert_eq!(dossier["unpaidViolations"].as_array().unwrap().len(), 1);
    assert_eq!(dossier["totalFinesDue"].as_f64(), Some(50.0));
    assert_eq!(dossier["accidentCount"], 2);
}

// =============================================================================
// Proxy
// =============================================================================

#[tokio::test]
async fn test_proxy_found() {
    let vehicle = RegistryVehicle {
        id: 3,
        registration_number: "BG-123".to_string(),
        make: "Fiat".to_string(),
        model: "Punto".to_string(),
        owner_name: "Milan Nikolic".to_string(),
        owner_identifier: "0505980710011".to_string(),
        color: "blue".to_string(),
        year: Some(2008),
    };
    let app = TestApp::spawn(StubRegistry {
        lookup: Some(LookupOutcome::Found(vehicle)),
        ..Default::default()
    })
    .await;

    let response = app.get("/vehicles/plate/BG-123").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(response).await["ownerIdentifier"], "0505980710011");
}

#[tokio::test]
async fn test_proxy_outcomes() {
    let app = TestApp::spawn(StubRegistry::default()).await;
    let response = app.get("/vehicles/plate/BG-123").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = TestApp::spawn(StubRegistry {
        lookup: Some(LookupOutcome::Unauthorized),
        ..Default::default()
    })
    .await;
    let response = app.get("/vehicles/plate/BG-123").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body(response).await["code"], "UPSTREAM_CREDENTIALS_REJECTED");

    let app = TestApp::spawn(StubRegistry {
        lookup: Some(LookupOutcome::Failure(RemoteFailure::new(
            FailureKind::Status(500),
            "Internal Server Error",
        ))),
        ..Default::default()
    })
    .await;
    let response = app.get("/vehicles/plate/BG-123").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let error = body(response).await;
    assert_eq!(error["code"], "UPSTREAM_UNAVAILABLE");
    assert_eq!(error["details"], "HTTP 500: Internal Server Error");
}
