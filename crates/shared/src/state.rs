use crate::{
    abstract_trait::DynHashing,
    config::{ConnectionPool, Hashing},
    di::DependenciesInject,
    utils::Metrics,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool) -> Result<Self> {
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));

        {
            let mut registry = registry.lock().await;
            let metrics = metrics.lock().await;
            registry.register(
                "http_request_counter",
                "Total number of HTTP requests served",
                metrics.request_counter.clone(),
            );
            registry.register(
                "http_request_duration",
                "Histogram of HTTP request durations",
                metrics.request_duration.clone(),
            );
        }

        let di_container = DependenciesInject::new(pool, hashing);

        Ok(Self {
            di_container,
            registry,
            metrics,
        })
    }
}
