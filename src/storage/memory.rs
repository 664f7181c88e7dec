use super::Storage;
use std::{
    collections::HashMap,
    sync::RwLock,
    time::{Duration, Instant},
};

/// In-process store, used in tests and anywhere a real store is overkill.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, Entry>>,
}

struct Entry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.map(|at| at <= Instant::now()).unwrap_or(false)
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.read().ok()?;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    async fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()> {
        self.entries
            .write()
            .map_err(|e| anyhow::anyhow!("{}", e))?
            .insert(
                key.to_string(),
                Entry {
                    value: value.to_vec(),
                    expires_at: None,
                },
            );
        Ok(())
    }

    async fn del(&self, key: &str) -> anyhow::Result<()> {
        self.entries
            .write()
            .map_err(|e| anyhow::anyhow!("{}", e))?
            .remove(key);
        Ok(())
    }

    async fn expire(&self, key: &str, ttl_sec: usize) -> anyhow::Result<()> {
        let mut entries = self.entries.write().map_err(|e| anyhow::anyhow!("{}", e))?;
        if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = Some(Instant::now() + Duration::from_secs(ttl_sec as u64));
        }
        Ok(())
    }
}
