use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::{AuthSpec, InputFile, TestConfiguration},
    encoder,
    models::Report,
};

/// The external test-execution routine.
///
/// Returning `Ok(None)` or an empty report means no report was produced;
/// the adapter stores nothing in that case.
#[async_trait]
pub trait TestExecutor: Send + Sync {
    async fn execute(
        &self,
        config: &TestConfiguration,
        auth_spec: &AuthSpec,
        input_files: &[InputFile],
    ) -> anyhow::Result<Option<Report>>;
}

/// A message that can be enqueued as a work item on the queue service.
pub trait TaskPayload
where
    Self: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> anyhow::Result<Vec<u8>>;
    fn from_bytes(payload: &[u8]) -> anyhow::Result<Self>;
    fn ptype(&self) -> String;
}

pub(crate) trait ToJson {
    fn to_json(&self) -> anyhow::Result<String>;
}

impl<T: Serialize> ToJson for T {
    fn to_json(&self) -> anyhow::Result<String> {
        encoder::encode_json(self)
    }
}
