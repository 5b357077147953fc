//! Scripted transport for unit tests.
//!
//! Responses are queued up front. A queued response may be bound to a URL
//! fragment (for pages that fire parallel requests) and may be held behind a
//! gate so tests decide the order in which in-flight requests resolve.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use tokio::sync::oneshot;

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

struct Scripted {
    matcher: Option<String>,
    outcome: Result<HttpResponse, TransportError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Releases one gated response
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next request, whatever its URL
    pub fn respond(&self, status: u16, body: &str) {
        self.push(None, Ok(HttpResponse::new(status, body)), None);
    }

    /// Next request whose URL contains `fragment`
    pub fn respond_to(&self, fragment: &str, status: u16, body: &str) {
        self.push(
            Some(fragment.to_string()),
            Ok(HttpResponse::new(status, body)),
            None,
        );
    }

    pub fn fail(&self, error: TransportError) {
        self.push(None, Err(error), None);
    }

    /// Queue a response that is held until the returned gate is released
    pub fn respond_gated(&self, status: u16, body: &str) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(None, Ok(HttpResponse::new(status, body)), Some(rx));
        Gate(tx)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }

    fn push(
        &self,
        matcher: Option<String>,
        outcome: Result<HttpResponse, TransportError>,
        gate: Option<oneshot::Receiver<()>>,
    ) {
        self.script.borrow_mut().push_back(Scripted {
            matcher,
            outcome,
            gate,
        });
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let entry = {
            let mut script = self.script.borrow_mut();
            let index = script.iter().position(|s| match &s.matcher {
                Some(fragment) => request.url.contains(fragment.as_str()),
                None => true,
            });
            index.and_then(|i| script.remove(i))
        };
        self.requests.borrow_mut().push(request.clone());

        let Some(entry) = entry else {
            return Err(TransportError::Other(format!(
                "no scripted response for {} {}",
                request.method, request.url
            )));
        };

        if let Some(gate) = entry.gate {
            let _ = gate.await;
        }
        entry.outcome
    }
}
