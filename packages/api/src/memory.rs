use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::ApiError;

/// In-memory Transport for testing.
///
/// Responses are scripted per method and URL and handed out in the order they
/// were queued. Every request is recorded, including ones nothing was
/// scripted for (those fail as a transport error).
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    responses: Arc<Mutex<HashMap<(Method, String), VecDeque<ApiResponse>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response for `method url`.
    pub fn respond(&self, method: Method, url: &str, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(ApiResponse {
                status,
                body: body.into(),
            });
    }

    /// Queue a JSON response for `method url`.
    pub fn respond_json(&self, method: Method, url: &str, status: u16, body: &impl Serialize) {
        let body = serde_json::to_string(body).unwrap();
        self.respond(method, url, status, body);
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.url.to_string());
        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| ApiError::Transport(format!("connection refused: {} {}", key.0, key.1)))
    }
}
