use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use estimation_hub::infrastructure::AppState;
use estimation_hub::{db, seed, server};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test app
async fn setup_test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    server::build_router(db, &[])
}

// Send one request and decode the JSON body
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_meeting(app: &Router, name: &str) -> String {
    let (status, body) = send(app, "POST", "/api/meetings", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_user(app: &Router, name: &str) -> String {
    let (status, body) = send(app, "POST", "/api/users", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app().await;
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_user_crud() {
    let app = setup_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "name": "Ada", "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ada");
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", &format!("/api/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ada@example.com");

    let (_, body) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "DELETE", &format!("/api/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User successfully deleted" }));

    let (status, body) = send(&app, "GET", &format!("/api/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No user found for that id");
}

#[tokio::test]
async fn test_create_user_requires_name() {
    let app = setup_test_app().await;
    let (status, body) = send(&app, "POST", "/api/users", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User name is required");
}

#[tokio::test]
async fn test_attendee_membership_flow() {
    let app = setup_test_app().await;
    let meeting_id = create_meeting(&app, "Planning").await;
    let user_id = create_user(&app, "Ada").await;
    let uri = format!("/api/meetings/{}/attendees", meeting_id);

    for _ in 0..2 {
        let (status, body) = send(&app, "POST", &uri, Some(json!({ "id": user_id }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Attendee successfully added" }));
    }

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([user_id]));

    // The meeting document carries the same set
    let (_, meeting) = send(&app, "GET", &format!("/api/meetings/{}", meeting_id), None).await;
    assert_eq!(meeting["attendees"], json!([user_id]));

    let (status, body) = send(&app, "DELETE", &uri, Some(json!({ "id": user_id }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Attendee successfully removed" }));

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_attendee_errors() {
    let app = setup_test_app().await;
    let meeting_id = create_meeting(&app, "Planning").await;
    let user_id = create_user(&app, "Ada").await;

    let uri = format!("/api/meetings/{}/attendees", meeting_id);
    let (status, body) = send(&app, "POST", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No user id");

    let (status, body) = send(&app, "POST", &uri, Some(json!({ "id": "ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No user found for that id");

    let (status, body) = send(
        &app,
        "POST",
        "/api/meetings/ghost/attendees",
        Some(json!({ "id": user_id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No meeting found for that id");

    let (status, _) = send(&app, "GET", "/api/meetings/ghost/attendees", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_from_missing_meeting_confirms() {
    let app = setup_test_app().await;

    let (status, body) = send(
        &app,
        "DELETE",
        "/api/meetings/ghost/attendees",
        Some(json!({ "id": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Attendee successfully removed" }));

    let (status, body) = send(
        &app,
        "DELETE",
        "/api/meetings/ghost/tickets",
        Some(json!({ "id": "t1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Ticket successfully removed" }));

    let (status, body) = send(&app, "DELETE", "/api/stories/ghost/estimates/e1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Estimate successfully removed" }));
}

#[tokio::test]
async fn test_ticket_scenario() {
    let app = setup_test_app().await;
    let m1 = create_meeting(&app, "m1").await;
    let uri = format!("/api/meetings/{}/tickets", m1);

    let (status, body) = send(&app, "POST", &uri, Some(json!({ "title": "t1" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Ticket successfully added" }));

    let (_, tickets) = send(&app, "GET", &uri, None).await;
    let tickets = tickets.as_array().unwrap().clone();
    assert_eq!(tickets.len(), 1);
    let t1 = tickets[0].as_str().unwrap().to_string();

    let (status, body) = send(&app, "DELETE", &uri, Some(json!({ "id": t1 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Ticket successfully removed" }));

    let (_, tickets) = send(&app, "GET", &uri, None).await;
    assert_eq!(tickets, json!([]));

    let (status, ticket) = send(&app, "GET", &format!("/api/tickets/{}", t1), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["title"], "t1");
}

#[tokio::test]
async fn test_story_endpoints() {
    let app = setup_test_app().await;
    let meeting_id = create_meeting(&app, "meeting a").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/stories?meetingId=ghost",
        Some(json!({ "name": "story a" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No meeting found for that id");

    let (status, body) = send(
        &app,
        "POST",
        "/api/stories",
        Some(json!({ "name": "story a" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No meeting id");

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/stories?meetingId={}", meeting_id),
        Some(json!({ "name": "story a" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Story successfully created" }));

    let (status, stories) = send(
        &app,
        "GET",
        &format!("/api/stories?meetingId={}", meeting_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stories = stories.as_array().unwrap().clone();
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0]["meeting"]["id"], meeting_id.as_str());
    assert_eq!(stories[0]["meeting"]["name"], "meeting a");

    let (_, others) = send(&app, "GET", "/api/stories?meetingId=ghost", None).await;
    assert_eq!(others, json!([]));

    let story_id = stories[0]["id"].as_str().unwrap().to_string();
    let (status, body) = send(&app, "DELETE", &format!("/api/stories/{}", story_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Story successfully removed" }));

    let (_, all) = send(&app, "GET", "/api/stories", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_delete_missing_story_confirms() {
    let app = setup_test_app().await;
    let (status, body) = send(&app, "DELETE", "/api/stories/123", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Story successfully removed" }));
}

#[tokio::test]
async fn test_story_estimates() {
    let app = setup_test_app().await;
    let meeting_id = create_meeting(&app, "meeting a").await;
    send(
        &app,
        "POST",
        &format!("/api/stories?meetingId={}", meeting_id),
        Some(json!({ "name": "story a" })),
    )
    .await;
    let (_, stories) = send(&app, "GET", "/api/stories", None).await;
    let story_id = stories[0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/stories/{}/estimates", story_id);

    let (_, estimates) = send(&app, "GET", &uri, None).await;
    assert_eq!(estimates, json!([]));

    let (status, body) = send(&app, "POST", &uri, Some(json!({ "id": "abc123" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Estimate successfully added" }));

    let (_, estimates) = send(&app, "GET", &uri, None).await;
    assert_eq!(estimates, json!(["abc123"]));

    let (status, body) = send(&app, "DELETE", &format!("{}/abc123", uri), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Estimate successfully removed" }));

    let (_, estimates) = send(&app, "GET", &uri, None).await;
    assert_eq!(estimates, json!([]));

    let (status, _) = send(&app, "GET", "/api/stories/ghost/estimates", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seed_demo_data_runs_once() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let state = AppState::new(db);

    seed::seed_demo_data(&state).await.expect("Seed failed");
    seed::seed_demo_data(&state).await.expect("Second seed failed");

    let meetings = state.directory.list_meetings().await.unwrap();
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].attendees.len(), 3);
    assert_eq!(meetings[0].tickets.len(), 2);

    let stories = state
        .stories
        .list_stories_by_meeting(&meetings[0].id)
        .await
        .unwrap();
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].estimates, vec!["3".to_string()]);
}
