use lazy_static::lazy_static;
use prometheus::{
    register_counter_with_registry, register_int_counter_vec_with_registry,
    register_int_counter_with_registry, Counter, IntCounter, IntCounterVec, Registry,
};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new_custom(Some("growbox".into()), None)
        .unwrap_or_default();
}

pub struct RunnerMetrics {
    pub ticks: IntCounter,
    pub simulated_seconds: Counter,
    pub events: IntCounterVec,
    pub event_bytes: IntCounter,
}

impl RunnerMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let ticks = register_int_counter_with_registry!("ticks", "ticks", registry)?;
        let simulated_seconds = register_counter_with_registry!(
            "simulated_seconds",
            "simulated_seconds",
            registry
        )?;
        let events =
            register_int_counter_vec_with_registry!("events", "events", &["domain"], registry)?;
        let event_bytes =
            register_int_counter_with_registry!("event_bytes", "event_bytes", registry)?;
        Ok(Self {
            ticks,
            simulated_seconds,
            events,
            event_bytes,
        })
    }
}
