//! Named remote calls.

use std::future::Future;

use serde_json::Value;

use crate::error::Result;

/// Transport for pipeline requests.
pub trait PipelineClient: Send + Sync + 'static {
    /// Perform the call and resolve once with its outcome.
    fn send(&self, request: PipelineRequest) -> impl Future<Output = Result<Value>> + Send;
}

/// A named remote call with a JSON input record.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRequest {
    name: String,
    input: Value,
}

impl PipelineRequest {
    /// Create a request for the pipeline `name` with an empty input.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: Value::Object(Default::default()),
        }
    }

    /// Set the input record.
    #[must_use]
    pub fn set_input(mut self, input: Value) -> Self {
        self.input = input;
        self
    }

    /// Pipeline name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input record.
    pub fn input(&self) -> &Value {
        &self.input
    }

    /// Send the request through `client`.
    pub async fn dispatch<C: PipelineClient>(self, client: &C) -> Result<Value> {
        tracing::debug!(pipeline = %self.name, "dispatching pipeline request");
        client.send(self).await
    }
}
