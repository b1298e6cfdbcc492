//! Mock GoCMS admin API and helpers shared by the integration tests.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::{delete, get};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub method: String,
    /// Path including the query string, exactly as received.
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
struct MockState {
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    /// When set, `DELETE /posts` replies with this status and body instead
    /// of the default echo. Used to test raw passthrough of server answers.
    delete_reply: Option<(u16, String)>,
}

/// In-process admin API double. Records every request it sees and answers
/// with the wire shapes the real GoCMS admin app produces.
pub struct MockAdminApi {
    pub addr: SocketAddr,
    state: MockState,
    handle: tokio::task::JoinHandle<()>,
}

impl MockAdminApi {
    pub async fn start() -> Self {
        Self::start_inner(None).await
    }

    pub async fn start_with_delete_reply(status: u16, body: &str) -> Self {
        Self::start_inner(Some((status, body.to_string()))).await
    }

    async fn start_inner(delete_reply: Option<(u16, String)>) -> Self {
        let state = MockState {
            captured: Arc::new(Mutex::new(Vec::new())),
            delete_reply,
        };

        let app = Router::new()
            .route(
                "/posts",
                get(list_posts)
                    .post(add_post)
                    .put(update_post)
                    .delete(delete_post),
            )
            .route("/posts/{id}", get(get_post))
            .route(
                "/pages",
                get(list_pages)
                    .post(add_page)
                    .put(update_page)
                    .delete(delete_page),
            )
            .route("/images/{name}", delete(delete_image))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock admin API");
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().unwrap().clone()
    }
}

impl Drop for MockAdminApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct TestClient {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(server: &MockAdminApi) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: server.base_url(),
        }
    }
}

/// Address with no listener behind it, for transport failure tests.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn record(state: &MockState, method: &str, uri: &Uri, headers: &HeaderMap, body: String) {
    let path = uri
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.captured.lock().unwrap().push(CapturedRequest {
        method: method.to_string(),
        path,
        content_type,
        body,
    });
}

fn body_field(body: &str, field: &str) -> serde_json::Value {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get(field).cloned())
        .unwrap_or(serde_json::Value::Null)
}

// =============================================================================
// POSTS HANDLERS
// =============================================================================

async fn list_posts(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> String {
    record(&state, "GET", &uri, &headers, String::new());
    serde_json::json!({
        "posts": [
            { "id": 1, "title": "First", "content": "Hello world", "excerpt": "hello" }
        ]
    })
    .to_string()
}

async fn get_post(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, String) {
    record(&state, "GET", &uri, &headers, String::new());
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            serde_json::json!({ "error": "post id not found", "msg": "no such post" }).to_string(),
        );
    }
    (
        StatusCode::OK,
        serde_json::json!({
            "id": id, "title": "First", "content": "Hello world", "excerpt": "hello"
        })
        .to_string(),
    )
}

async fn add_post(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body_text = String::from_utf8_lossy(&body).to_string();
    record(&state, "POST", &uri, &headers, body_text);
    (
        StatusCode::CREATED,
        serde_json::json!({ "id": 42 }).to_string(),
    )
}

async fn update_post(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body_text = String::from_utf8_lossy(&body).to_string();
    let id = body_field(&body_text, "id");
    record(&state, "PUT", &uri, &headers, body_text);
    (StatusCode::OK, serde_json::json!({ "id": id }).to_string())
}

async fn delete_post(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body_text = String::from_utf8_lossy(&body).to_string();
    let id = body_field(&body_text, "id");
    record(&state, "DELETE", &uri, &headers, body_text);

    if let Some((status, reply)) = &state.delete_reply {
        return (StatusCode::from_u16(*status).unwrap(), reply.clone());
    }
    (StatusCode::OK, serde_json::json!({ "id": id }).to_string())
}

// =============================================================================
// PAGES HANDLERS
// =============================================================================

async fn list_pages(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> String {
    record(&state, "GET", &uri, &headers, String::new());
    serde_json::json!({
        "pages": [
            { "id": 1, "title": "About", "content": "About us", "link": "about" }
        ]
    })
    .to_string()
}

async fn add_page(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body_text = String::from_utf8_lossy(&body).to_string();
    let link = body_field(&body_text, "link");
    record(&state, "POST", &uri, &headers, body_text);
    (
        StatusCode::CREATED,
        serde_json::json!({ "id": 7, "link": link }).to_string(),
    )
}

async fn update_page(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body_text = String::from_utf8_lossy(&body).to_string();
    let id = body_field(&body_text, "id");
    let link = body_field(&body_text, "link");
    record(&state, "PUT", &uri, &headers, body_text);
    (
        StatusCode::OK,
        serde_json::json!({ "id": id, "link": link }).to_string(),
    )
}

async fn delete_page(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body_text = String::from_utf8_lossy(&body).to_string();
    let link = body_field(&body_text, "link");
    record(&state, "DELETE", &uri, &headers, body_text);
    (StatusCode::OK, serde_json::json!({ "link": link }).to_string())
}

// =============================================================================
// IMAGES HANDLERS
// =============================================================================

async fn delete_image(
    State(state): State<MockState>,
    Path(name): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body_text = String::from_utf8_lossy(&body).to_string();
    record(&state, "DELETE", &uri, &headers, body_text);
    (
        StatusCode::OK,
        serde_json::json!({ "id": name }).to_string(),
    )
}
