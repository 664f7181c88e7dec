use super::JobQueue;
use crate::{encoder, models::Job, JobId};
use redis::{aio::ConnectionManager, AsyncCommands, Client};

/// Client for a Redis-shaped queue service: one record per job plus a list
/// of pending job ids the service's workers pop from.
#[derive(Clone)]
pub struct RedisQueue {
    connection: ConnectionManager,
    namespace: String,
}

impl RedisQueue {
    pub async fn new(url: &str, namespace: &str) -> anyhow::Result<Self> {
        let client = Client::open(url)?;
        let connection = client.get_tokio_connection_manager().await?;

        Ok(Self {
            connection,
            namespace: namespace.to_string(),
        })
    }

    fn job_key(&self, id: &JobId) -> String {
        format!("{}:job:{}", self.namespace, id)
    }

    fn pending_key(&self) -> String {
        format!("{}:pending", self.namespace)
    }
}

#[async_trait::async_trait]
impl JobQueue for RedisQueue {
    async fn enqueue(&self, job: Job) -> anyhow::Result<()> {
        let mut connection = self.connection.clone();
        let bytes = encoder::encode(&job)?;

        connection.set::<_, _, ()>(self.job_key(&job.id), bytes).await?;
        connection
            .rpush::<_, _, ()>(self.pending_key(), job.id.as_str())
            .await?;

        Ok(())
    }

    async fn fetch_job(&self, id: &JobId) -> anyhow::Result<Option<Job>> {
        let mut connection = self.connection.clone();
        let bytes: Option<Vec<u8>> = connection.get(self.job_key(id)).await?;

        match bytes {
            Some(bytes) => Ok(Some(encoder::decode(&bytes)?)),
            None => Ok(None),
        }
    }
}
