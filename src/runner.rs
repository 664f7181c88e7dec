use crate::{
    config::TestConfiguration,
    core::{TaskPayload, TestExecutor},
    metrics,
    models::{sample_report, Job, JobState, Report, TaskRequest},
    persist::Persist,
    queue::{CurrentJob, JobQueue},
    storage::Storage,
    JobId,
};
use anyhow::Context;
use std::sync::Arc;

/// Why a task run was abandoned. Every variant propagates to the worker
/// harness, which marks the job failed per queue convention.
#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    #[error("invalid test configuration: {0}")]
    InvalidConfiguration(#[from] serde_json::Error),

    #[error("test execution failed: {0:?}")]
    Execution(#[source] anyhow::Error),

    #[error("storing report failed: {0:?}")]
    Storage(#[source] anyhow::Error),
}

/// The task adapter. Explicitly constructed from injected client handles so
/// tests can substitute fakes; no process-wide queue or store state.
pub struct TaskRunner {
    executor: Arc<dyn TestExecutor>,
    queue: Arc<dyn JobQueue>,
    reports: Persist,
}

impl TaskRunner {
    pub fn new(
        executor: Arc<dyn TestExecutor>,
        queue: Arc<dyn JobQueue>,
        storage: Box<dyn Storage>,
    ) -> Self {
        Self {
            executor,
            queue,
            reports: Persist::new(storage),
        }
    }

    pub fn get_metrics(&self) -> anyhow::Result<String> {
        metrics::COUNTER.output()
    }

    /// Look up a job on the queue service.
    ///
    /// Connectivity failures read the same as an unknown id: both come back
    /// as `None`.
    pub async fn get_job(&self, id: &JobId) -> Option<Job> {
        match self.queue.fetch_job(id).await {
            Ok(job) => job,
            Err(e) => {
                tracing::warn!("fetching job {} failed: {}", id, e);
                None
            }
        }
    }

    /// Submit a test run to the queue service. Execution happens later, on
    /// whichever worker the service assigns.
    pub async fn submit(&self, request: TaskRequest) -> anyhow::Result<JobId> {
        let id = JobId::new(crate::generate_id());
        let job = Job {
            id: id.clone(),
            state: JobState::Queued,
            enqueued_at: chrono::Utc::now(),
            payload_type: request.ptype(),
            payload: request
                .to_bytes()
                .context("Unable to serialize the task request to bytes")?,
        };

        self.queue.enqueue(job).await?;
        tracing::debug!("submitted test run {}", id);

        Ok(id)
    }

    /// Execute one test run and persist its report.
    ///
    /// The report is written iff it comes back non-empty and `current`
    /// carries a job id; in every other case the call completes with nothing
    /// stored.
    #[tracing::instrument(skip(self, request), fields(debug = request.debug))]
    pub async fn run_task(
        &self,
        request: TaskRequest,
        current: &CurrentJob,
    ) -> Result<(), TaskError> {
        let config = TestConfiguration::from_json(&request.configuration)?;

        let mode = if request.debug { "debug" } else { "real" };
        metrics::COUNTER.tasks_all.with_label_values(&[mode]).inc();

        let report = if request.debug {
            Some(sample_report())
        } else {
            self.executor
                .execute(&config, &request.auth_spec, &request.input_files)
                .await
                .map_err(|e| {
                    metrics::COUNTER
                        .tasks_failed
                        .with_label_values(&["execution"])
                        .inc();
                    TaskError::Execution(e)
                })?
        };

        match report.filter(|r| !r.is_empty()) {
            Some(report) => match current.id() {
                Some(job_id) => {
                    self.reports.save_report(job_id, &report).await.map_err(|e| {
                        metrics::COUNTER
                            .tasks_failed
                            .with_label_values(&["storage"])
                            .inc();
                        TaskError::Storage(e)
                    })?;

                    metrics::COUNTER
                        .reports_stored
                        .with_label_values(&[mode])
                        .inc();
                    tracing::debug!("report stored for job {}", job_id);
                }
                None => tracing::debug!("no current job id, report not stored"),
            },
            None => tracing::debug!("no report produced"),
        }

        Ok(())
    }

    /// Read back the report stored for a job, if any.
    pub async fn get_report(&self, id: &JobId) -> Option<Report> {
        self.reports.get_report(id).await
    }
}
