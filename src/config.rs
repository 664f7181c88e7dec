use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Typed view over the JSON configuration string a test run is submitted
/// with.
///
/// The schema is owned by the executor's contract, so every field is
/// optional (`{}` parses) and unknown keys are kept in `extra` instead of
/// being rejected.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TestConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub injection_targets: Vec<InjectionTarget>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl TestConfiguration {
    /// Parse failures propagate; the queue worker is expected to mark the
    /// job failed.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// A system under test the executor injects traffic into.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct InjectionTarget {
    pub name: String,
    pub base_url: String,
}

/// Authentication specification, forwarded verbatim to the executor and
/// never inspected here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct AuthSpec(String);

impl AuthSpec {
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reference to an input file handed through to the executor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct InputFile(PathBuf);

impl InputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
