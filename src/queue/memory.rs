use super::JobQueue;
use crate::{models::Job, JobId};
use std::{collections::HashMap, sync::RwLock};

/// In-process stand-in for the queue service, used in tests.
#[derive(Default)]
pub struct MemoryQueue {
    jobs: RwLock<HashMap<String, Job>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl JobQueue for MemoryQueue {
    async fn enqueue(&self, job: Job) -> anyhow::Result<()> {
        self.jobs
            .write()
            .map_err(|e| anyhow::anyhow!("{}", e))?
            .insert(job.id.to_string(), job);
        Ok(())
    }

    async fn fetch_job(&self, id: &JobId) -> anyhow::Result<Option<Job>> {
        let jobs = self.jobs.read().map_err(|e| anyhow::anyhow!("{}", e))?;
        Ok(jobs.get(id.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobState;

    fn job(id: &str) -> Job {
        Job {
            id: JobId::new(id),
            state: JobState::Queued,
            enqueued_at: chrono::Utc::now(),
            payload_type: "task_request".to_string(),
            payload: Vec::default(),
        }
    }

    #[tokio::test]
    async fn enqueue_then_fetch() {
        let queue = MemoryQueue::new();
        queue.enqueue(job("j1")).await.expect("enqueue");

        let fetched = queue
            .fetch_job(&JobId::new("j1"))
            .await
            .expect("fetch")
            .expect("job exists");
        assert_eq!(JobId::new("j1"), fetched.id);
        assert_eq!(JobState::Queued, fetched.state);
    }

    #[tokio::test]
    async fn fetch_unknown_id() {
        let queue = MemoryQueue::new();

        let fetched = queue.fetch_job(&JobId::new("nope")).await.expect("fetch");
        assert!(fetched.is_none());
    }
}
