#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use tokio::task::JoinHandle;

use krest_client::GatewayConfig;

/// A request as the mock gateway saw it.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: String,
}

impl Seen {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<HashMap<(Method, String), (StatusCode, String)>>,
    seen: Arc<Mutex<Vec<Seen>>>,
}

/// Canned REST proxy on an ephemeral local port. Unknown routes get 404.
pub struct MockGateway {
    port: u16,
    seen: Arc<Mutex<Vec<Seen>>>,
    server: JoinHandle<()>,
}

impl MockGateway {
    pub async fn start(routes: &[(Method, &str, u16, &str)]) -> Self {
        let routes = routes
            .iter()
            .map(|(method, path, status, body)| {
                let status = StatusCode::from_u16(*status).expect("valid status");
                ((method.clone(), path.to_string()), (status, body.to_string()))
            })
            .collect();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            routes: Arc::new(routes),
            seen: seen.clone(),
        };

        let app = Router::new().fallback(handle).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock gateway");
        let port = listener.local_addr().expect("local addr").port();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock gateway serve");
        });

        Self { port, seen, server }
    }

    pub fn config(&self) -> GatewayConfig {
        GatewayConfig {
            host: "127.0.0.1".into(),
            port: self.port,
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<Seen> {
        self.seen.lock().expect("seen lock").clone()
    }
}

impl Drop for MockGateway {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    let path = uri.path().to_string();
    state.seen.lock().expect("seen lock").push(Seen {
        method: method.clone(),
        path: path.clone(),
        content_type: header_str(header::CONTENT_TYPE),
        accept: header_str(header::ACCEPT),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match state.routes.get(&(method, path)) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
