use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::JobFailure;
use crate::scheduler::state::State;

/// What a payload reports when it returns normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// Work for this pass is complete; the job should queue for a ready slot.
    Yielded,
    /// The job is fully complete.
    Done,
    /// The job is waiting for an external event; its event handler will
    /// re-schedule it.
    AsyncWait,
    /// The job keeps running outside the pool (e.g. a hand-off to another
    /// subsystem) and no longer needs its worker.
    Detached,
}

/// The work a job performs once a worker picks it up.
///
/// `run` executes on a dedicated blocking thread, outside every engine lock,
/// and may block freely.
pub trait JobSpec: Send + Sync + 'static {
    fn run(&self) -> Result<JobOutcome, JobFailure>;
}

#[derive(Debug, Clone)]
pub struct TransitionRecord {
    pub state: State,
    pub reason: String,
    pub at: DateTime<Utc>,
}

pub(crate) struct JobCell {
    pub(crate) state: State,
    pub(crate) retries: u32,
    pub(crate) retry_timer: Option<JoinHandle<()>>,
    pub(crate) history: Vec<TransitionRecord>,
}

/// A scheduled unit of work.
///
/// The engine owns all bookkeeping: the current state, the retry count, the
/// pending retry timer and the transition history live behind a per-job lock.
/// The payload itself is opaque to the engine.
pub struct Job {
    id: Uuid,
    creator: String,
    max_retries: u32,
    submitted_at: DateTime<Utc>,
    spec: Box<dyn JobSpec>,
    cell: Mutex<JobCell>,
}

impl Job {
    pub fn new(creator: impl Into<String>, max_retries: u32, spec: impl JobSpec) -> Arc<Self> {
        Self::with_state(
            Uuid::new_v4(),
            creator.into(),
            max_retries,
            0,
            State::Pending,
            Box::new(spec),
        )
    }

    /// Reconstruct a job from persisted fields. The initial in-memory state
    /// is decided by the restore policy, not by this constructor.
    pub fn restored(
        id: Uuid,
        creator: impl Into<String>,
        max_retries: u32,
        retries: u32,
        state: State,
        spec: Box<dyn JobSpec>,
    ) -> Arc<Self> {
        Self::with_state(id, creator.into(), max_retries, retries, state, spec)
    }

    fn with_state(
        id: Uuid,
        creator: String,
        max_retries: u32,
        retries: u32,
        state: State,
        spec: Box<dyn JobSpec>,
    ) -> Arc<Self> {
        Arc::new(Self {
            id,
            creator,
            max_retries,
            submitted_at: Utc::now(),
            spec,
            cell: Mutex::new(JobCell {
                state,
                retries,
                retry_timer: None,
                history: Vec::new(),
            }),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn state(&self) -> State {
        self.cell().state
    }

    pub fn retries(&self) -> u32 {
        self.cell().retries
    }

    /// Reason attached to the most recent transition, if any.
    pub fn last_reason(&self) -> Option<String> {
        self.cell().history.last().map(|r| r.reason.clone())
    }

    /// Whether a retry timer is pending; true only while in retry-wait.
    pub fn retry_timer_pending(&self) -> bool {
        self.cell().retry_timer.is_some()
    }

    /// Full transition history, oldest first.
    pub fn history(&self) -> Vec<TransitionRecord> {
        self.cell().history.clone()
    }

    pub(crate) fn run_payload(&self) -> Result<JobOutcome, JobFailure> {
        self.spec.run()
    }

    pub(crate) fn cell(&self) -> MutexGuard<'_, JobCell> {
        self.cell.lock().expect("job lock poisoned")
    }
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job")
            .field("id", &self.id)
            .field("creator", &self.creator)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl JobSpec for Noop {
        fn run(&self) -> Result<JobOutcome, JobFailure> {
            Ok(JobOutcome::Done)
        }
    }

    #[test]
    fn new_job_is_pending() {
        let job = Job::new("alice", 3, Noop);
        assert_eq!(job.state(), State::Pending);
        assert_eq!(job.creator(), "alice");
        assert_eq!(job.max_retries(), 3);
        assert_eq!(job.retries(), 0);
        assert!(job.last_reason().is_none());
    }

    #[test]
    fn restored_job_keeps_persisted_fields() {
        let id = Uuid::new_v4();
        let job = Job::restored(id, "bob", 5, 2, State::RetryWait, Box::new(Noop));
        assert_eq!(job.id(), id);
        assert_eq!(job.state(), State::RetryWait);
        assert_eq!(job.retries(), 2);
    }
}
