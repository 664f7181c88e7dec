use crate::{core::ToJson, encoder, models::Report, storage::Storage, JobId};

/// Report sink over the key-value store.
///
/// Reports are stored as JSON text under the bare job id, the key the host
/// application reads back. No expiry is set on report keys.
pub(crate) struct Persist {
    inner: Box<dyn Storage>,
}

impl Persist {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { inner: storage }
    }

    pub async fn save_report(&self, id: &JobId, report: &Report) -> anyhow::Result<()> {
        let json = report.to_json()?;
        self.inner.set(id.as_str(), json.as_bytes()).await
    }

    pub async fn get_report(&self, id: &JobId) -> Option<Report> {
        let bytes = self.inner.get(id.as_str()).await?;
        encoder::decode_json::<Report>(&bytes).ok()
    }
}
