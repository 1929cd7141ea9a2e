//! Process-wide registry of named scheduler instances.
//!
//! Owned by the process bootstrap: components that hold only a scheduler id
//! (e.g. a restored job's persisted scheduler reference) resolve it here.
//! Lifecycle is explicit (`create`, `lookup`, `shutdown`) rather than a bare
//! global map.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};
use crate::scheduler::engine::{Scheduler, SchedulerInfo};

pub struct SchedulerRegistry {
    inner: Mutex<HashMap<String, Scheduler>>,
}

impl SchedulerRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Build, start and register a scheduler. Errors if the id is taken.
    pub fn create(&self, id: &str, config: SchedulerConfig) -> Result<Scheduler> {
        let mut map = self.lock();
        if map.contains_key(id) {
            return Err(SchedulerError::AlreadyRegistered(id.to_owned()));
        }
        let scheduler = Scheduler::new(id, config);
        scheduler.start()?;
        map.insert(id.to_owned(), scheduler.clone());
        tracing::info!(scheduler = id, "Scheduler registered");
        Ok(scheduler)
    }

    pub fn lookup(&self, id: &str) -> Option<Scheduler> {
        self.lock().get(id).cloned()
    }

    /// Registered ids, sorted for stable output.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Snapshots of every registered scheduler, ordered by id.
    pub fn infos(&self) -> Vec<SchedulerInfo> {
        let map = self.lock();
        let mut infos: Vec<SchedulerInfo> = map.values().map(Scheduler::info).collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        infos
    }

    /// Shut down and deregister one scheduler.
    pub fn shutdown(&self, id: &str) -> Result<()> {
        let scheduler = self
            .lock()
            .remove(id)
            .ok_or_else(|| SchedulerError::SchedulerNotFound(id.to_owned()))?;
        scheduler.shutdown();
        tracing::info!(scheduler = id, "Scheduler deregistered");
        Ok(())
    }

    /// Shut down and deregister everything, for process teardown.
    pub fn shutdown_all(&self) {
        let drained: Vec<Scheduler> = {
            let mut map = self.lock();
            map.drain().map(|(_, s)| s).collect()
        };
        for scheduler in drained {
            scheduler.shutdown();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Scheduler>> {
        self.inner.lock().expect("registry lock poisoned")
    }
}

impl Default for SchedulerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
