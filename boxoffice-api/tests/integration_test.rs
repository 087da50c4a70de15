use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use boxoffice_api::{app, AppState};
use boxoffice_core::Toggles;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app(guest_checkout: bool, auto_seating: bool) -> Router {
    let pages = concat!(env!("CARGO_MANIFEST_DIR"), "/../templates");
    app(AppState::new(Toggles::new(guest_checkout, auto_seating), pages))
}

async fn send(app: &Router, method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(req).await.unwrap()
}

fn session_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
        .expect("response should set a session cookie")
}

async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_guest_checkout_flow() {
    let app = test_app(true, true);

    let resp = send(&app, "GET", "/api/init-flow", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);
    let decision = json_body(resp).await;
    assert_eq!(decision["action"], "redirect");
    assert_eq!(decision["target"], "guest.html");
    assert_eq!(decision["mode"], "guest_experiment");
    assert_eq!(decision["debug_token"].as_str().unwrap().len(), 22);

    let booking = json!({"movie": "Dune", "email": "fan@example.com", "preference": "center", "count": 1});
    let resp = send(&app, "POST", "/api/book", Some(&cookie), Some(booking)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let confirmation = json_body(resp).await;
    assert_eq!(confirmation["success"], true);
    assert_eq!(confirmation["seats"], json!(["A3"]));
    assert_eq!(confirmation["target"], "success.html");

    let resp = send(&app, "GET", "/api/orders", None, None).await;
    let orders = json_body(resp).await;
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["customer"], "guest:fan@example.com");
    assert_eq!(orders[0]["id"], confirmation["order_id"]);
}

#[tokio::test]
async fn test_route_decision_alias_issues_fresh_tokens() {
    let app = test_app(true, false);

    let first = json_body(send(&app, "GET", "/api/route-decision", None, None).await).await;
    let second = json_body(send(&app, "GET", "/api/route-decision", None, None).await).await;
    assert_eq!(first["target"], "guest.html");
    assert_ne!(first["debug_token"], second["debug_token"]);
}

#[tokio::test]
async fn test_member_login_flow() {
    let app = test_app(false, false);

    let resp = send(&app, "GET", "/api/init-flow", None, None).await;
    let decision = json_body(resp).await;
    assert_eq!(decision["target"], "login.html");
    assert_eq!(decision["mode"], "login_required");
    assert!(decision.get("debug_token").is_none());

    let resp = send(&app, "POST", "/api/login", None, Some(json!({"username": "admin", "password": "nope"}))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await["success"], false);

    let resp = send(&app, "POST", "/api/login", None, Some(json!({"username": "admin", "password": "1234"}))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);
    let login = json_body(resp).await;
    assert_eq!(login["success"], true);
    assert_eq!(login["status"], "ok");
    assert_eq!(login["target"], "standard.html");

    let decision = json_body(send(&app, "GET", "/api/init-flow", Some(&cookie), None).await).await;
    assert_eq!(decision["target"], "standard.html");
    assert_eq!(decision["mode"], "standard_member");

    let booking = json!({"movie": "Dune", "selected_seats": ["B2", "B3"]});
    let resp = send(&app, "POST", "/api/book", Some(&cookie), Some(booking)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["seats"], json!(["B2", "B3"]));
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = test_app(false, false);

    let resp = send(&app, "POST", "/api/login", None, Some(json!({"username": "admin"}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_without_session_is_unauthorized() {
    let app = test_app(false, true);

    let resp = send(&app, "POST", "/api/book", None, Some(json!({"movie": "Dune"}))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(json_body(resp).await["error"].as_str().unwrap().contains("Unauthorized"));
}

#[tokio::test]
async fn test_repeated_bookings_get_distinct_orders_and_seats() {
    let app = test_app(true, true);
    let cookie = session_cookie(&send(&app, "GET", "/api/init-flow", None, None).await);
    let booking = json!({"movie": "Dune", "email": "fan@example.com", "preference": "aisle", "count": 1});

    let first = json_body(send(&app, "POST", "/api/book", Some(&cookie), Some(booking.clone())).await).await;
    let second = json_body(send(&app, "POST", "/api/book", Some(&cookie), Some(booking)).await).await;

    assert_ne!(first["order_id"], second["order_id"]);
    assert_eq!(first["seats"], json!(["A1"]));
    assert_eq!(second["seats"], json!(["B1"]));
}

#[tokio::test]
async fn test_oversized_auto_booking_is_rejected() {
    let app = test_app(true, true);
    let cookie = session_cookie(&send(&app, "GET", "/api/init-flow", None, None).await);

    let booking = json!({"movie": "Dune", "email": "fan@example.com", "preference": "back", "count": 8});
    let resp = send(&app, "POST", "/api/book", Some(&cookie), Some(booking)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let config = json_body(send(&app, "GET", "/api/seat-config", None, None).await).await;
    assert_eq!(config["mode"], "auto");
    let orders = json_body(send(&app, "GET", "/api/orders", None, None).await).await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_seat_config_follows_auto_seating() {
    let manual = json_body(send(&test_app(false, false), "GET", "/api/seat-config", None, None).await).await;
    assert_eq!(manual["mode"], "manual");
    assert!(manual.get("preferences").is_none());
    let seats = manual["seats"].as_array().unwrap();
    assert_eq!(seats.len(), 8);
    assert_eq!(seats[4], json!({"id": "A5", "row": "A", "col": 5, "type": "aisle", "status": 1}));

    let auto = json_body(send(&test_app(false, true), "GET", "/api/seat-config", None, None).await).await;
    assert_eq!(auto["mode"], "auto");
    assert!(auto.get("seats").is_none());
    let keys: Vec<_> = auto["preferences"].as_array().unwrap()
        .iter()
        .map(|p| p["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, vec!["front", "back", "center", "aisle"]);
}

#[tokio::test]
async fn test_diagnostics_and_pages() {
    let app = test_app(true, false);

    let flags = json_body(send(&app, "GET", "/api/flags", None, None).await).await;
    assert_eq!(flags, json!({"guest_checkout": true, "auto_seating": false}));

    let health = json_body(send(&app, "GET", "/health", None, None).await).await;
    assert_eq!(health["status"], "ok");

    let resp = send(&app, "GET", "/login.html", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_bodies_get_json_400() {
    let app = test_app(true, true);
    let cookie = session_cookie(&send(&app, "GET", "/api/init-flow", None, None).await);

    let resp = send(&app, "POST", "/api/book", Some(&cookie), Some(json!({"movie": "Dune", "count": "two"}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    let resp = send(&app, "POST", "/api/login", None, Some(json!({"username": 1, "password": "1234"}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());

    let req = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username": "admin", "pass"#))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());

    let req = Request::builder()
        .method("POST")
        .uri("/api/book")
        .header(header::COOKIE, &cookie)
        .body(Body::from(json!({"movie": "Dune", "email": "fan@example.com"}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].as_str().unwrap().contains("Content-Type"));

    let orders = json_body(send(&app, "GET", "/api/orders", None, None).await).await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_auto_bookings_never_share_seats() {
    let app = test_app(true, true);
    let cookie = session_cookie(&send(&app, "GET", "/api/init-flow", None, None).await);

    let handles: Vec<_> = (0..7)
        .map(|_| {
            let app = app.clone();
            let cookie = cookie.clone();
            tokio::spawn(async move {
                let booking = json!({"movie": "Dune", "email": "fan@example.com", "preference": "center", "count": 1});
                let resp = send(&app, "POST", "/api/book", Some(&cookie), Some(booking)).await;
                assert_eq!(resp.status(), StatusCode::OK);
                json_body(resp).await["seats"][0].as_str().unwrap().to_string()
            })
        })
        .collect();

    let mut seats = Vec::new();
    for handle in handles {
        seats.push(handle.await.unwrap());
    }
    seats.sort();
    seats.dedup();
    assert_eq!(seats.len(), 7);
    assert!(!seats.contains(&"A5".to_string()));

    let resp = send(&app, "POST", "/api/book", Some(&cookie),
        Some(json!({"movie": "Dune", "email": "fan@example.com", "count": 1}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
