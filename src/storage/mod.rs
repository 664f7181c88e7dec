#[cfg(feature = "redis")]
pub mod redis;

pub mod memory;


use std::sync::Arc;

/// Client surface of the external key-value store. Keys and values carry no
/// structure beyond what the caller encodes.
#[async_trait::async_trait]
pub trait Storage: Sync + Send {
    async fn get(&self, key: &str) -> Option<Vec<u8>>;
    async fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()>;
    async fn del(&self, key: &str) -> anyhow::Result<()>;

    async fn expire(&self, key: &str, ttl_sec: usize) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl<S: Storage + ?Sized> Storage for Arc<S> {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()> {
        (**self).set(key, value).await
    }

    async fn del(&self, key: &str) -> anyhow::Result<()> {
        (**self).del(key).await
    }

    async fn expire(&self, key: &str, ttl_sec: usize) -> anyhow::Result<()> {
        (**self).expire(key, ttl_sec).await
    }
}
