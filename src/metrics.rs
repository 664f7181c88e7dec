use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    pub(crate) static ref COUNTER: Metrics = Metrics::new();
}

pub(crate) struct Metrics {
    pub tasks_all: IntCounterVec,
    pub tasks_failed: IntCounterVec,
    pub reports_stored: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let a = register_int_counter_vec!("tasks_all", "total test tasks executed", &["mode"])
            .unwrap();
        let b = register_int_counter_vec!("tasks_failed", "total test tasks failed", &["kind"])
            .unwrap();
        let c = register_int_counter_vec!(
            "reports_stored",
            "total reports written to the store",
            &["mode"]
        )
        .unwrap();

        Metrics {
            tasks_all: a,
            tasks_failed: b,
            reports_stored: c,
        }
    }

    pub fn output(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        let metric_families = prometheus::gather();
        encoder.encode(&metric_families, &mut buffer)?;

        Ok(String::from_utf8(buffer)?)
    }
}
