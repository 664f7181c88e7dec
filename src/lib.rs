#![doc = include_str!("../README.md")]
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub use anyhow;
pub use serde_json;

pub mod config;
pub mod core;
mod encoder;
mod metrics;
pub mod models;
mod persist;
pub mod queue;
pub mod runner;
pub mod storage;

pub type UtcDateTime = chrono::DateTime<chrono::Utc>;

/// Identifier of a job owned by the external queue service.
///
/// The adapter never parses it; it is also the raw key the report
/// is stored under.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn generate_id() -> String {
    rusty_ulid::generate_ulid_string()
}
