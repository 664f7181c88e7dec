use std::sync::Arc;

use async_trait::async_trait;
use proctor::config::{AuthSpec, InputFile, TestConfiguration};
use proctor::core::{TaskPayload, TestExecutor};
use proctor::models::{sample_report, Report, TaskRequest};
use proctor::queue::{memory::MemoryQueue, CurrentJob, JobQueue};
use proctor::runner::TaskRunner;
use proctor::storage::memory::MemoryStorage;
use proctor::JobId;
use serde_json::json;

/// Echoes parts of the parsed configuration back as the report, so the tests
/// can see the configuration actually flowed through the adapter.
struct EchoExecutor;

#[async_trait]
impl TestExecutor for EchoExecutor {
    async fn execute(
        &self,
        config: &TestConfiguration,
        auth_spec: &AuthSpec,
        input_files: &[InputFile],
    ) -> anyhow::Result<Option<Report>> {
        Ok(Some(Report::new(json!({
            "locale": config.locale,
            "auth_spec": auth_spec.as_str(),
            "input_files": input_files.len(),
        }))))
    }
}

struct World {
    runner: TaskRunner,
    queue: Arc<MemoryQueue>,
}

fn create_world() -> World {
    let queue = Arc::new(MemoryQueue::new());
    let runner = TaskRunner::new(
        Arc::new(EchoExecutor),
        queue.clone(),
        Box::new(Arc::new(MemoryStorage::new())),
    );

    World { runner, queue }
}

/// Plays the part of the external worker: fetch the job, decode its payload
/// and execute it with the job id bound.
async fn run_worker_once(world: &World, id: &JobId) {
    let job = world
        .queue
        .fetch_job(id)
        .await
        .expect("fetch job")
        .expect("job was enqueued");

    let request = TaskRequest::from_bytes(&job.payload).expect("decode payload");
    world
        .runner
        .run_task(request, &CurrentJob::new(job.id))
        .await
        .expect("run task");
}

#[tokio::test]
async fn submitted_debug_run_ends_with_the_sample_report_stored() {
    let world = create_world();

    let id = world
        .runner
        .submit(
            TaskRequest::builder()
                .configuration("{}")
                .auth_spec(AuthSpec::new("DummyOAuth()"))
                .debug(true)
                .build(),
        )
        .await
        .expect("submit");

    run_worker_once(&world, &id).await;

    let report = world.runner.get_report(&id).await.expect("report stored");
    assert_eq!(sample_report(), report);
}

#[tokio::test]
async fn submitted_real_run_stores_what_the_executor_returned() {
    let world = create_world();

    let id = world
        .runner
        .submit(
            TaskRequest::builder()
                .configuration(r#"{"locale": "en_US"}"#)
                .auth_spec(AuthSpec::new("DummyOAuth()"))
                .input_files(vec![InputFile::new("flights/record_1.json")])
                .build(),
        )
        .await
        .expect("submit");

    run_worker_once(&world, &id).await;

    let report = world.runner.get_report(&id).await.expect("report stored");
    assert_eq!(
        &json!({
            "locale": "en_US",
            "auth_spec": "DummyOAuth()",
            "input_files": 1,
        }),
        report.as_value()
    );
}

#[tokio::test]
async fn report_is_absent_until_the_worker_has_run() {
    let world = create_world();

    let id = world
        .runner
        .submit(
            TaskRequest::builder()
                .configuration("{}")
                .auth_spec(AuthSpec::new("DummyOAuth()"))
                .debug(true)
                .build(),
        )
        .await
        .expect("submit");

    assert!(world.runner.get_report(&id).await.is_none());
    assert!(world.runner.get_job(&id).await.is_some());

    run_worker_once(&world, &id).await;

    assert!(world.runner.get_report(&id).await.is_some());
}
