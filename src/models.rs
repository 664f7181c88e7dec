use crate::{
    config::{AuthSpec, InputFile},
    core::TaskPayload,
    encoder, JobId, UtcDateTime,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use typed_builder::TypedBuilder;

/// Work item state as tracked by the queue service. The adapter only reads
/// this; transitions belong to the queue.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Queued,
    Started,
    Finished,
    Failed,
}

/// Handle to a job as fetched from the queue service.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub struct Job {
    pub id: JobId,
    pub state: JobState,
    pub enqueued_at: UtcDateTime,

    pub payload_type: String,
    pub payload: Vec<u8>,
}

/// Opaque result of a test run. The adapter never looks at its fields; the
/// only question it asks is whether anything was produced at all.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Report(Value);

impl Report {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Null and empty containers count as "no report produced".
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// The enqueued work item: everything one test run needs.
#[derive(Serialize, Deserialize, Clone, Debug, TypedBuilder)]
#[serde(rename_all = "snake_case")]
pub struct TaskRequest {
    /// JSON-encoded configuration, parsed only at execution time.
    #[builder(setter(into))]
    pub configuration: String,

    pub auth_spec: AuthSpec,

    #[builder(default)]
    pub input_files: Vec<InputFile>,

    #[builder(default)]
    #[serde(default)]
    pub debug: bool,
}

impl TaskPayload for TaskRequest {
    fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        encoder::encode(self)
    }

    fn from_bytes(payload: &[u8]) -> anyhow::Result<Self> {
        encoder::decode(payload)
    }

    fn ptype(&self) -> String {
        "task_request".to_string()
    }
}

/// Fixed report substituted for real execution in debug mode, so the
/// plumbing around the executor can be exercised on its own.
pub fn sample_report() -> Report {
    Report::new(json!({
        "qualification": {
            "version": "v0.2.0",
            "targets": [
                {
                    "name": "sample-target",
                    "injection_attempts": 3,
                    "findings": []
                }
            ],
            "passed": true
        }
    }))
}
