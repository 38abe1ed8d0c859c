//! In-process fake node for end-to-end runs
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// What the fake node answers to `/query`
#[derive(Clone)]
pub enum QueryReply {
    Jobs { results: Vec<Value>, total: u64 },
    Errors(Vec<&'static str>),
    Malformed,
}

pub struct FakeNode {
    pub password: String,
    pub reply: QueryReply,
    pub queries: Mutex<Vec<Value>>,
}

fn session_cookie(password: &str) -> String {
    format!("clsession=session-for-{}", password)
}

async fn sessions(State(node): State<Arc<FakeNode>>, Json(body): Json<Value>) -> Response {
    if body["password"] != node.password.as_str() || body["email"].as_str().is_none() {
        return (StatusCode::UNAUTHORIZED, "Invalid email or password").into_response();
    }

    (
        StatusCode::OK,
        [
            (
                header::SET_COOKIE,
                format!("{}; Path=/; HttpOnly; SameSite=Strict", session_cookie(&node.password)),
            ),
        ],
        Json(json!({ "data": { "type": "session", "attributes": { "authenticated": true } } })),
    )
        .into_response()
}

async fn query(
    State(node): State<Arc<FakeNode>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if cookie != session_cookie(&node.password) {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    node.queries.lock().unwrap().push(body);

    match &node.reply {
        QueryReply::Jobs { results, total } => Json(json!({
            "data": {
                "jobs": {
                    "results": results,
                    "metadata": { "total": total, "__typename": "JobsPayload_Metadata" },
                    "__typename": "JobsPayload"
                }
            }
        }))
        .into_response(),
        QueryReply::Errors(messages) => Json(json!({
            "data": null,
            "errors": messages.iter().map(|m| json!({ "message": m })).collect::<Vec<_>>()
        }))
        .into_response(),
        QueryReply::Malformed => Json(json!({ "data": { "jobs": { "items": [] } } })).into_response(),
    }
}

/// Starts a fake node on a random local port, returning its base URL
pub async fn spawn_node(node: Arc<FakeNode>) -> String {
    let app = Router::new()
        .route("/sessions", post(sessions))
        .route("/query", post(query))
        .with_state(node);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn fake_node(password: &str, reply: QueryReply) -> Arc<FakeNode> {
    Arc::new(FakeNode {
        password: password.to_string(),
        reply,
        queries: Mutex::new(Vec::new()),
    })
}

pub fn ocr_job(id: &str, name: &str, contract: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "externalJobID": format!("00000000-0000-0000-0000-00000000000{}", id),
        "createdAt": "2023-05-10T14:22:01.5Z",
        "spec": {
            "__typename": "OCRSpec",
            "contractAddress": contract,
            "keyBundleID": "f2c5b0d4",
            "transmitterAddress": "0x7a9e"
        },
        "__typename": "Job"
    })
}

pub fn plain_job(id: &str, name: &str, typename: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "externalJobID": format!("10000000-0000-0000-0000-00000000000{}", id),
        "createdAt": "2023-05-11T08:00:00Z",
        "spec": { "__typename": typename },
        "__typename": "Job"
    })
}
