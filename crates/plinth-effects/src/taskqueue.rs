//! Background task queueing

use parking_lot::Mutex;
use plinth_core::{Backend, PlatformConfig, PlatformError, PlatformService, Result};
use serde::Serialize;
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

/// Managed cloud task queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudTaskqueueServices {
    project_id: String,
    location: String,
}

impl CloudTaskqueueServices {
    /// Load from configuration; requires a cloud project
    pub fn load(config: &PlatformConfig) -> Result<Self> {
        let project_id = config.cloud.project_id.clone().ok_or_else(|| {
            PlatformError::implementation_load(
                Backend::CloudTaskqueue.name(),
                "cloud.project_id is not configured",
            )
        })?;
        Ok(Self {
            project_id,
            location: config.cloud.location.clone(),
        })
    }

    /// Fully qualified queue path
    pub fn queue_path(&self, queue_name: &str) -> String {
        format!(
            "projects/{}/locations/{}/queues/{queue_name}",
            self.project_id, self.location
        )
    }
}

impl PlatformService for CloudTaskqueueServices {
    fn backend(&self) -> Backend {
        Backend::CloudTaskqueue
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A task deferred to the local runner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeferredTask {
    /// Generated task name
    pub name: String,
    /// Queue the task was enqueued on
    pub queue_name: String,
    /// Handler URL
    pub url: String,
    /// JSON payload
    pub payload: serde_json::Value,
}

/// Local task queue
///
/// Tasks are held in memory until the dev server drains and runs them.
#[derive(Debug, Default)]
pub struct DevModeTaskqueueServices {
    tasks: Mutex<Vec<DeferredTask>>,
    next_id: AtomicU64,
}

impl DevModeTaskqueueServices {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an HTTP task and return its name
    pub fn create_http_task(
        &self,
        queue_name: &str,
        url: &str,
        payload: serde_json::Value,
    ) -> Result<String> {
        if !url.starts_with('/') {
            return Err(PlatformError::invalid_argument(format!(
                "Task handler URL must be a path: {url}"
            )));
        }
        let name = format!("task-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let mut tasks = self.tasks.lock();
        tracing::debug!(queue = queue_name, url, task = %name, "Deferred task");
        tasks.push(DeferredTask {
            name: name.clone(),
            queue_name: queue_name.to_string(),
            url: url.to_string(),
            payload,
        });
        Ok(name)
    }

    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Remove and return every waiting task in enqueue order
    pub fn drain(&self) -> Vec<DeferredTask> {
        std::mem::take(&mut *self.tasks.lock())
    }
}

impl PlatformService for DevModeTaskqueueServices {
    fn backend(&self) -> Backend {
        Backend::DevModeTaskqueue
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cloud_load_requires_project() {
        let mut config = PlatformConfig::default();
        let err = CloudTaskqueueServices::load(&config).unwrap_err();
        assert_eq!(
            err,
            PlatformError::implementation_load(
                "cloud_taskqueue",
                "cloud.project_id is not configured",
            )
        );

        config.cloud.project_id = Some("plinth-prod".into());
        let queue = CloudTaskqueueServices::load(&config).unwrap();
        assert_eq!(
            queue.queue_path("emails"),
            "projects/plinth-prod/locations/us-central1/queues/emails"
        );
    }

    #[test]
    fn test_dev_queue_drains_in_order() {
        let queue = DevModeTaskqueueServices::new();
        let first = queue
            .create_http_task("emails", "/task/email", json!({"to": "a"}))
            .unwrap();
        let second = queue
            .create_http_task("stats", "/task/stats", json!({}))
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(queue.pending(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0].name, first);
        assert_eq!(drained[1].queue_name, "stats");
        assert_eq!(queue.pending(), 0);

        assert!(queue.create_http_task("emails", "http://x", json!({})).is_err());
    }

    #[test]
    fn test_task_names_unique_across_drains() {
        let queue = DevModeTaskqueueServices::new();
        let first = queue.create_http_task("emails", "/task/email", json!({})).unwrap();
        queue.drain();
        let second = queue.create_http_task("emails", "/task/email", json!({})).unwrap();
        assert_eq!(first, "task-1");
        assert_eq!(second, "task-2");
    }
}
