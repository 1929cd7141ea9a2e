use std::time::Duration;

use crate::scheduler::appraiser::AppraiserKind;
use crate::store::RestorePolicy;

/// Configuration for one scheduler instance.
///
/// Every limit here is also adjustable on a live scheduler through its
/// setters; this struct supplies the construction-time values.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Maximum concurrently running jobs (pool workers plus detached jobs).
    pub pool_size: usize,
    /// Thread queue capacity (new submissions).
    pub thread_queue_capacity: usize,
    /// Priority queue capacity (jobs resuming from wait states).
    pub priority_queue_capacity: usize,
    /// Ready queue capacity (jobs waiting for a ready slot).
    pub ready_queue_capacity: usize,
    /// Maximum jobs simultaneously ready or transferring.
    pub max_ready_jobs: usize,
    /// Per-creator running allowance used by the fairness policy.
    pub max_running_per_creator: usize,
    /// Scheduler-wide retry ceiling; the effective budget per job is the
    /// smaller of this and the job's own limit.
    pub max_retries: u32,
    /// Fixed delay before a failed job is re-admitted.
    pub retry_delay: Duration,
    /// How long a blocking offer waits for queue capacity before failing
    /// the job.
    pub offer_timeout: Duration,
    /// How long dispatch waits for a worker's startup acknowledgement.
    pub startup_ack_timeout: Duration,
    /// Maximum control-loop wait between queue scans.
    pub wake_interval: Duration,
    /// Whether to score queued jobs instead of taking the FIFO head.
    pub use_fairness: bool,
    /// Selection policy used when fairness is on.
    pub appraiser: AppraiserKind,
    /// What to do with persisted jobs found at startup.
    pub restore_policy: RestorePolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            pool_size: 30,
            thread_queue_capacity: 1000,
            priority_queue_capacity: 1000,
            ready_queue_capacity: 1000,
            max_ready_jobs: 60,
            max_running_per_creator: 10,
            max_retries: 20,
            retry_delay: Duration::from_secs(60),
            offer_timeout: Duration::from_secs(30),
            startup_ack_timeout: Duration::from_secs(10),
            wake_interval: Duration::from_secs(60),
            use_fairness: true,
            appraiser: AppraiserKind::FairShare,
            restore_policy: RestorePolicy::WaitForUpdate,
        }
    }
}

impl SchedulerConfig {
    pub fn with_pool_size(mut self, size: usize) -> Self {
        self.pool_size = size;
        self
    }

    pub fn with_thread_queue_capacity(mut self, capacity: usize) -> Self {
        self.thread_queue_capacity = capacity;
        self
    }

    pub fn with_priority_queue_capacity(mut self, capacity: usize) -> Self {
        self.priority_queue_capacity = capacity;
        self
    }

    pub fn with_ready_queue_capacity(mut self, capacity: usize) -> Self {
        self.ready_queue_capacity = capacity;
        self
    }

    pub fn with_max_ready_jobs(mut self, limit: usize) -> Self {
        self.max_ready_jobs = limit;
        self
    }

    pub fn with_max_running_per_creator(mut self, limit: usize) -> Self {
        self.max_running_per_creator = limit;
        self
    }

    pub fn with_max_retries(mut self, limit: u32) -> Self {
        self.max_retries = limit;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_offer_timeout(mut self, timeout: Duration) -> Self {
        self.offer_timeout = timeout;
        self
    }

    pub fn with_startup_ack_timeout(mut self, timeout: Duration) -> Self {
        self.startup_ack_timeout = timeout;
        self
    }

    pub fn with_wake_interval(mut self, interval: Duration) -> Self {
        self.wake_interval = interval;
        self
    }

    pub fn with_fairness(mut self, enabled: bool) -> Self {
        self.use_fairness = enabled;
        self
    }

    pub fn with_appraiser(mut self, kind: AppraiserKind) -> Self {
        self.appraiser = kind;
        self
    }

    pub fn with_restore_policy(mut self, policy: RestorePolicy) -> Self {
        self.restore_policy = policy;
        self
    }
}
