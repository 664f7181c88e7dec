use super::Storage;
use redis::{aio::ConnectionManager, AsyncCommands, Client};

/// Redis-backed key-value store client.
#[derive(Clone)]
pub struct Redis {
    connection: ConnectionManager,
}

impl Redis {
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let client = Client::open(url)?;
        let connection = client.get_tokio_connection_manager().await?;

        Ok(Self { connection })
    }
}

#[async_trait::async_trait]
impl Storage for Redis {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut connection = self.connection.clone();
        match connection.get::<_, Vec<u8>>(key).await {
            Ok(data) if !data.is_empty() => Some(data),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("redis get {} failed: {}", key, e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()> {
        let mut connection = self.connection.clone();
        Ok(connection.set(key, value).await?)
    }

    async fn del(&self, key: &str) -> anyhow::Result<()> {
        let mut connection = self.connection.clone();
        Ok(connection.del(key).await?)
    }

    async fn expire(&self, key: &str, ttl_sec: usize) -> anyhow::Result<()> {
        let mut connection = self.connection.clone();
        connection
            .expire(key, ttl_sec)
            .await
            .map_err(anyhow::Error::from)
    }
}
