//! Shared test doubles for the controller tests.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use vigil_core::ui::{ConfirmationPrompt, Navigator, NotificationSink, Screen, Severity};
use vigil_core::{ApiGateway, Result, VigilError};

/// One request observed by the recording gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Gateway double bound to an always-ready session: GETs answer from a
/// route table (query stripped), mutations replay a queue of canned
/// results, and every call is recorded.
pub struct RecordingGateway {
    get_routes: Mutex<HashMap<String, Value>>,
    mutation_results: Mutex<VecDeque<Result<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingGateway {
    pub fn new() -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            get_routes: Mutex::new(HashMap::new()),
            mutation_results: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Serves `value` for GETs of `path` (ignoring the cache-buster query).
    pub fn serve(&self, path: &str, value: Value) {
        self.get_routes
            .lock()
            .unwrap()
            .insert(path.to_string(), value);
    }

    /// Queues the outcome of the next mutating call (POST/PUT/DELETE).
    pub fn queue_mutation(&self, result: Result<Value>) {
        self.mutation_results.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The recorded calls issued with `method`.
    pub fn calls_of(&self, method: &'static str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method)
            .collect()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<Value>) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
    }

    fn next_mutation(&self) -> Result<Value> {
        self.mutation_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }

    fn strip_query(path: &str) -> &str {
        path.split('?').next().unwrap_or(path)
    }
}

#[async_trait]
impl ApiGateway for RecordingGateway {
    async fn is_ready(&self) -> bool {
        true
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        self.record("GET", path, None);
        let route = Self::strip_query(path);
        self.get_routes
            .lock()
            .unwrap()
            .get(route)
            .cloned()
            .ok_or_else(|| VigilError::network(format!("no route for {route}")))
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        self.record("POST", path, Some(body));
        self.next_mutation()
    }

    async fn put_json(&self, path: &str, body: Value) -> Result<Value> {
        self.record("PUT", path, Some(body));
        self.next_mutation()
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.record("DELETE", path, None);
        self.next_mutation()
    }
}

/// Notification sink double recording every toast.
pub struct RecordingSink {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingSink {
    pub fn new() -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            messages: Mutex::new(Vec::new()),
        })
    }

    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last_severity(&self) -> Option<Severity> {
        self.messages().last().map(|(_, severity)| *severity)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Navigator double recording every target screen.
pub struct RecordingNavigator {
    visited: Mutex<Vec<Screen>>,
}

impl RecordingNavigator {
    pub fn new() -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            visited: Mutex::new(Vec::new()),
        })
    }

    pub fn visited(&self) -> Vec<Screen> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, screen: Screen) {
        self.visited.lock().unwrap().push(screen);
    }
}

/// Confirmation prompt double with a fixed answer.
pub struct StubPrompt {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl StubPrompt {
    pub fn answering(answer: bool) -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            answer,
            asked: Mutex::new(Vec::new()),
        })
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl ConfirmationPrompt for StubPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer
    }
}
