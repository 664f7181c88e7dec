#[cfg(feature = "redis")]
pub mod redis;

pub mod memory;

use crate::{models::Job, JobId};

/// Client surface of the external job queue service. Scheduling and worker
/// pool mechanics stay on the service side; this is enqueue and lookup only.
#[async_trait::async_trait]
pub trait JobQueue: Send + Sync {
    async fn enqueue(&self, job: Job) -> anyhow::Result<()>;
    async fn fetch_job(&self, id: &JobId) -> anyhow::Result<Option<Job>>;
}

/// Identity of the job a worker is currently executing.
///
/// The worker harness constructs this and passes it in explicitly; tasks
/// never reach into ambient runtime context for it. A caller running outside
/// any job passes `detached()`.
#[derive(Clone, Debug)]
pub struct CurrentJob {
    id: Option<JobId>,
}

impl CurrentJob {
    pub fn new(id: JobId) -> Self {
        Self { id: Some(id) }
    }

    pub fn detached() -> Self {
        Self { id: None }
    }

    pub fn id(&self) -> Option<&JobId> {
        self.id.as_ref()
    }
}
