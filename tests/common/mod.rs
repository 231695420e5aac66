#![allow(dead_code)]

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use url::Url;
use users_proxy::config::{Config, Credentials};
use users_proxy::infrastructure::backendless::BackendlessUserRepository;
use users_proxy::routes::router;
use users_proxy::state::AppState;

pub const TABLE_PATH: &str = "/api/data/UsersDB";

/// A request as received by the fake Backendless service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync>;

#[derive(Clone)]
struct Backend {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    respond: Responder,
}

/// Handle to a running fake Backendless service.
pub struct FakeBackend {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, TABLE_PATH)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one upstream request");
        requests.into_iter().next().unwrap()
    }
}

async fn capture(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let (status, body) = (backend.respond)(&request);
    backend.requests.lock().unwrap().push(request);

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Starts a fake Backendless service on an ephemeral port.
///
/// Every request is recorded and answered by `respond`.
pub async fn start_fake_backend<F>(respond: F) -> FakeBackend
where
    F: Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let backend = Backend {
        requests: requests.clone(),
        respond: Arc::new(respond),
    };

    let app = Router::new().fallback(capture).with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeBackend { addr, requests }
}

/// Fake backend that always answers with the same status and body.
pub async fn start_fixed_backend(status: StatusCode, body: &str) -> FakeBackend {
    let body = body.to_string();
    start_fake_backend(move |_| (status, body.clone())).await
}

pub fn test_config(base_url: &str, credentials: Option<Credentials>) -> Config {
    Config {
        base_url: Url::parse(base_url).unwrap(),
        credentials,
        port: 8000,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

pub fn create_test_state(base_url: &str, credentials: Option<Credentials>) -> AppState {
    let config = test_config(base_url, credentials);
    let client = BackendlessUserRepository::client_builder(&config)
        .unwrap()
        .no_proxy()
        .build()
        .unwrap();

    AppState::new(BackendlessUserRepository::from_client(
        client,
        config.base_url.clone(),
    ))
}

pub fn make_server(backend: &FakeBackend) -> TestServer {
    TestServer::new(router(create_test_state(&backend.base_url(), None))).unwrap()
}

pub fn make_server_with_credentials(backend: &FakeBackend, credentials: Credentials) -> TestServer {
    TestServer::new(router(create_test_state(
        &backend.base_url(),
        Some(credentials),
    )))
    .unwrap()
}

/// Address with nothing listening on it.
pub async fn unused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
