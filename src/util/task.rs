use std::collections::HashMap;

use tokio::task::JoinHandle;
use tracing::debug;

/// Keyed set of background tasks. Spawning under a taken key aborts the
/// previous task; dropping the manager aborts everything still running.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key, task) {
            if !handle.is_finished() {
                debug!("Replacing in-flight task '{}'", key);
            }
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|h| !h.is_finished())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn abort_all(&mut self) {
        for (key, handle) in self.tasks.drain() {
            if !handle.is_finished() {
                debug!("Aborting task '{}'", key);
            }
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}
