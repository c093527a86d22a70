//! End-to-end client flows against an in-process stub server.
//!
//! The stub mirrors the wire contract of the real handlers (plain-text
//! error bodies, JSON user descriptors) without requiring `PostgreSQL`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use billet::client::{AuthClient, ClientError, Credentials};
use billet::events::{EventCard, EventRecord};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

const USER_ID: &str = "5f0c3a3e-0000-4000-8000-000000000001";

async fn stub_login(payload: Option<Json<Value>>) -> Response {
    let Some(Json(payload)) = payload else {
        return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response();
    };

    if payload["password"] == "password1" {
        Json(json!({ "id": USER_ID, "email": payload["email"] })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            "Invalid email or password".to_string(),
        )
            .into_response()
    }
}

async fn stub_signup(Json(payload): Json<Value>) -> Response {
    if payload["email"] == "taken@example.com" {
        (StatusCode::CONFLICT, "User already exists".to_string()).into_response()
    } else {
        (
            StatusCode::CREATED,
            Json(json!({ "id": USER_ID, "email": payload["email"] })),
        )
            .into_response()
    }
}

async fn stub_events() -> Json<Vec<EventRecord>> {
    Json(vec![EventRecord {
        id: Uuid::parse_str(USER_ID).unwrap(),
        title: "Rust Meetup".to_string(),
        description: "Monthly Rust meetup".to_string(),
        image: "abc.png".to_string(),
        date: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
    }])
}

async fn spawn_stub_server() -> String {
    let app = Router::new()
        .route("/login", post(stub_login))
        .route("/signup", post(stub_signup))
        .route("/events", get(stub_events));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn sign_in_success_sets_session() {
    let base_url = spawn_stub_server().await;
    let client = AuthClient::new(&base_url).unwrap();
    let session = client.session();

    assert!(!session.is_authenticated());

    let user = client
        .sign_in(&Credentials::new("user@example.com", "password1"))
        .await
        .unwrap();

    assert_eq!(user.email, "user@example.com");
    assert!(session.is_authenticated());
    assert_eq!(session.current_user(), Some(user));
}

#[tokio::test]
async fn sign_in_rejected_surfaces_message_and_leaves_session() {
    let base_url = spawn_stub_server().await;
    let client = AuthClient::new(&base_url).unwrap();

    let err = client
        .sign_in(&Credentials::new("user@example.com", "wrongpassword"))
        .await
        .unwrap_err();

    match &err {
        ClientError::Rejected { status, message } => {
            assert_eq!(*status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("expected rejection, got: {other:?}"),
    }

    // the message the UI shows is the server message, unchanged
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn sign_in_invalid_shape_never_reaches_network() {
    // a closed port: any network attempt would fail with a request error
    let client = AuthClient::new("http://127.0.0.1:1").unwrap();

    let err = client
        .sign_in(&Credentials::new("user@example.com", "12345"))
        .await
        .unwrap_err();

    match err {
        ClientError::Invalid(errors) => {
            assert_eq!(
                errors.to_string(),
                "Password must be at least 6 characters"
            );
        }
        other => panic!("expected validation failure, got: {other:?}"),
    }

    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn sign_up_returns_user_without_touching_session() {
    let base_url = spawn_stub_server().await;
    let client = AuthClient::new(&base_url).unwrap();

    let user = client
        .sign_up(&Credentials::new("new@example.com", "password1"))
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn sign_up_conflict_surfaces_server_message() {
    let base_url = spawn_stub_server().await;
    let client = AuthClient::new(&base_url).unwrap();

    let err = client
        .sign_up(&Credentials::new("taken@example.com", "password1"))
        .await
        .unwrap_err();

    match err {
        ClientError::Rejected { status, message } => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(message, "User already exists");
        }
        other => panic!("expected rejection, got: {other:?}"),
    }
}

#[tokio::test]
async fn events_listing_renders_cards() {
    let base_url = spawn_stub_server().await;
    let client = AuthClient::new(&base_url).unwrap();

    let events = client.events().await.unwrap();
    assert_eq!(events.len(), 1);

    let card = EventCard::render(&events[0]);
    assert_eq!(card.image_src, "http://localhost:3000/images/abc.png");
    assert_eq!(card.title, "Rust Meetup");
    assert_eq!(card.date_label, "Friday Jan 5 2024");
}
