use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use item_store::http::build_router;
use item_store::ItemStore;
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("item_store_test_http_{}.json", name))
}

fn app(name: &str) -> (Router, Arc<ItemStore>, std::path::PathBuf) {
    let path = temp_path(name);
    let _ = std::fs::remove_file(&path);
    let store = Arc::new(ItemStore::open(&path));
    (build_router(Arc::clone(&store)), store, path)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn crud_scenario() {
    let (app, _store, path) = app("scenario");

    let (status, body) = send(&app, Method::POST, "/items", Some(json!({"name": "a"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"name": "a", "id": 1}));

    let (status, body) = send(&app, Method::POST, "/items", Some(json!({"name": "b"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"name": "b", "id": 2}));

    let (status, body) = send(&app, Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"name": "a", "id": 1}, {"name": "b", "id": 2}]));

    let (status, body) = send(&app, Method::DELETE, "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"mensaje": "Elemento eliminado"}));

    let (status, body) = send(&app, Method::GET, "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Elemento no encontrado"}));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn list_starts_empty() {
    let (app, _store, path) = app("list_empty");
    let (status, body) = send(&app, Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn create_requires_name() {
    let (app, store, path) = app("create_bad");
    let expected = json!({"error": "Solicitud incorrecta: El campo 'name' es obligatorio"});

    let (status, body) = send(&app, Method::POST, "/items", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    let (status, body) = send(&app, Method::POST, "/items", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ nope"))
        .unwrap();
    let response = app.clone().oneshot(malformed).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(store.is_empty());
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn update_merges_and_reports_missing() {
    let (app, _store, path) = app("update");
    send(&app, Method::POST, "/items", Some(json!({"name": "a", "qty": 1}))).await;

    let (status, body) = send(&app, Method::PUT, "/items/1", Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "X", "qty": 1, "id": 1}));

    let (status, body) = send(&app, Method::PUT, "/items/9", Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Elemento no encontrado"}));

    let (status, _) = send(&app, Method::PUT, "/items/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::PUT, "/items/1", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Solicitud incorrecta: El cuerpo debe ser un objeto JSON"})
    );
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let (app, _store, path) = app("delete_missing");
    let (status, body) = send(&app, Method::DELETE, "/items/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Elemento no encontrado"}));
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn non_integer_ids_and_unknown_routes_are_json_404s() {
    let (app, _store, path) = app("bad_routes");
    for uri in ["/items/abc", "/items/-1", "/nothing"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["error"].as_str().unwrap().starts_with("404 Not Found"));
    }
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn save_failure_is_a_500_with_save_message() {
    let path = std::env::temp_dir()
        .join("item_store_test_http_no_such_dir")
        .join("data.json");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
    let store = Arc::new(ItemStore::open(&path));
    let app = build_router(Arc::clone(&store));

    let (status, body) = send(&app, Method::POST, "/items", Some(json!({"name": "a"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Error guardando los datos: "));
    // not rolled back
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _store, path) = app("cors");
    let req = Request::builder()
        .uri("/items")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn wrong_method_is_a_json_405() {
    let (app, store, path) = app("wrong_method");
    send(&app, Method::POST, "/items", Some(json!({"name": "a"}))).await;

    for (method, uri) in [(Method::PATCH, "/items"), (Method::POST, "/items/1")] {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "b"}).to_string()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "{uri}"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("405 Method Not Allowed"));
    }
    assert_eq!(store.len(), 1);
    let _ = std::fs::remove_file(&path);
}
