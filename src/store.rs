//! Restore-time interface to a persistent job store.
//!
//! Persistence itself is out of scope; the engine only consumes previously
//! persisted jobs at startup. What happens to them is explicit
//! configuration, never hidden behavior.

use std::sync::Mutex;

use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, SchedulerError};
use crate::scheduler::job::JobSpec;
use crate::scheduler::state::State;

/// What to do with persisted jobs found at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RestorePolicy {
    /// Fail every persisted job immediately.
    FailOnRestart,
    /// Re-admit persisted jobs straight away, based on their persisted state.
    Resume,
    /// Park persisted jobs in the restored state until an external update
    /// re-schedules them.
    WaitForUpdate,
}

/// Persisted fields of a job, plus a payload rebuilt by the store.
pub struct StoredJob {
    pub id: Uuid,
    pub creator: String,
    pub state: State,
    pub retries: u32,
    pub max_retries: u32,
    pub spec: Box<dyn JobSpec>,
}

impl std::fmt::Debug for StoredJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredJob")
            .field("id", &self.id)
            .field("creator", &self.creator)
            .field("state", &self.state)
            .field("retries", &self.retries)
            .finish()
    }
}

/// Source of previously persisted jobs.
///
/// Loading is best-effort and per-entry: one corrupt record must not take
/// down the rest of the restore.
pub trait JobStore: Send + Sync {
    fn load(&self, scheduler_id: &str) -> Vec<Result<StoredJob>>;
}

/// A store backed by process memory, for tests and harnesses.
///
/// `load` drains the recorded entries: restore consumes them once.
pub struct InMemoryJobStore {
    entries: Mutex<Vec<Result<StoredJob>>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, job: StoredJob) {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .push(Ok(job));
    }

    /// Record an entry that will fail to load, as a corrupt record would.
    pub fn record_corrupt(&self, message: impl Into<String>) {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .push(Err(SchedulerError::Store(message.into())));
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JobStore for InMemoryJobStore {
    fn load(&self, _scheduler_id: &str) -> Vec<Result<StoredJob>> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .drain(..)
            .collect()
    }
}
