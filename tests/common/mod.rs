//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use stevedore::config::SchedulerConfig;
use stevedore::error::JobFailure;
use stevedore::scheduler::{Job, JobOutcome, JobSpec, Scheduler, State};

/// A config with short intervals so tests settle quickly.
pub fn test_config() -> SchedulerConfig {
    SchedulerConfig::default()
        .with_pool_size(4)
        .with_retry_delay(Duration::from_millis(50))
        .with_offer_timeout(Duration::from_millis(200))
        .with_wake_interval(Duration::from_millis(50))
}

pub fn start_scheduler(id: &str, config: SchedulerConfig) -> Scheduler {
    let scheduler = Scheduler::new(id, config);
    scheduler.start().expect("scheduler starts");
    scheduler
}

/// Blocks payload threads until released, so tests can hold jobs in the
/// running state.
pub struct Gate {
    released: Mutex<bool>,
    cv: Condvar,
}

impl Gate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            released: Mutex::new(false),
            cv: Condvar::new(),
        })
    }

    pub fn release(&self) {
        let mut released = self.released.lock().expect("gate lock poisoned");
        *released = true;
        self.cv.notify_all();
    }

    fn wait(&self) {
        let mut released = self.released.lock().expect("gate lock poisoned");
        while !*released {
            released = self.cv.wait(released).expect("gate lock poisoned");
        }
    }
}

enum Behavior {
    /// Yield to the ready queue.
    Yield,
    /// Complete outright.
    Complete,
    /// Report an external-event wait.
    Wait,
    /// Always fail non-fatally.
    NonFatal,
    /// Always fail fatally.
    Fatal,
    /// Fail non-fatally the first `n` runs, then complete.
    Flaky(AtomicU32),
    /// Panic.
    Panic,
}

/// A scripted payload. Counts its runs and optionally blocks on a gate.
pub struct TestJob {
    behavior: Behavior,
    runs: Arc<AtomicU32>,
    gate: Option<Arc<Gate>>,
}

impl TestJob {
    pub fn yielding() -> Self {
        Self::with_behavior(Behavior::Yield)
    }

    pub fn completing() -> Self {
        Self::with_behavior(Behavior::Complete)
    }

    pub fn waiting() -> Self {
        Self::with_behavior(Behavior::Wait)
    }

    pub fn non_fatal() -> Self {
        Self::with_behavior(Behavior::NonFatal)
    }

    pub fn fatal() -> Self {
        Self::with_behavior(Behavior::Fatal)
    }

    pub fn flaky(failures: u32) -> Self {
        Self::with_behavior(Behavior::Flaky(AtomicU32::new(failures)))
    }

    pub fn panicking() -> Self {
        Self::with_behavior(Behavior::Panic)
    }

    pub fn gated(mut self, gate: &Arc<Gate>) -> Self {
        self.gate = Some(gate.clone());
        self
    }

    /// Handle observing how many times the payload has run; grab it before
    /// handing the payload to `Job::new`.
    pub fn runs(&self) -> Arc<AtomicU32> {
        self.runs.clone()
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            runs: Arc::new(AtomicU32::new(0)),
            gate: None,
        }
    }
}

impl JobSpec for TestJob {
    fn run(&self) -> Result<JobOutcome, JobFailure> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.wait();
        }
        match &self.behavior {
            Behavior::Yield => Ok(JobOutcome::Yielded),
            Behavior::Complete => Ok(JobOutcome::Done),
            Behavior::Wait => Ok(JobOutcome::AsyncWait),
            Behavior::NonFatal => Err(JobFailure::NonFatal("scripted failure".to_owned())),
            Behavior::Fatal => Err(JobFailure::Fatal("scripted failure".to_owned())),
            Behavior::Flaky(left) => {
                if left
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                    .is_ok()
                {
                    Err(JobFailure::NonFatal("scripted failure".to_owned()))
                } else {
                    Ok(JobOutcome::Done)
                }
            }
            Behavior::Panic => panic!("scripted panic"),
        }
    }
}

/// Poll until the condition holds or the timeout elapses; returns whether it
/// held.
pub async fn wait_until(mut cond: impl FnMut() -> bool, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if cond() {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return cond();
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

pub async fn wait_for_state(job: &Arc<Job>, state: State, timeout: Duration) {
    let reached = wait_until(|| job.state() == state, timeout).await;
    assert!(
        reached,
        "job {} did not reach {state} within {timeout:?}, still {}",
        job.id(),
        job.state()
    );
}

pub async fn wait_for_terminal(job: &Arc<Job>, timeout: Duration) {
    let reached = wait_until(|| job.state().is_terminal(), timeout).await;
    assert!(
        reached,
        "job {} did not terminate within {timeout:?}, still {}",
        job.id(),
        job.state()
    );
}
