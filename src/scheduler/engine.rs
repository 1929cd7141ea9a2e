//! The scheduling engine: admission, fair selection, bounded dispatch and
//! retry coordination for one named scheduler instance.
//!
//! One control loop task drives everything:
//!
//! 1. Waits for a wakeup (state change, freed worker) or the wake interval.
//! 2. Drains the priority queue, then the thread queue, dispatching selected
//!    jobs to pool workers while capacity remains.
//! 3. Promotes jobs from the ready queue up to the ready-slot limit.
//!
//! Submitters, workers, retry timers and event handlers all funnel their
//! mutations through [`Scheduler::set_state`], which validates the transition
//! under the job's own lock, keeps the occupancy counters in step, removes
//! the job from whichever queue matches its old state, and wakes the loop.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};
use crate::scheduler::appraiser::JobAppraiser;
use crate::scheduler::counters::StateCounters;
use crate::scheduler::job::{Job, TransitionRecord};
use crate::scheduler::queue::AdmissionQueue;
use crate::scheduler::state::State;
use crate::store::{JobStore, RestorePolicy, StoredJob};
use crate::worker::executor;

/// Dispatch lanes drained by the control loop, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lane {
    Priority,
    Thread,
}

/// A fair, bounded scheduler for long-lived jobs.
///
/// Cheap to clone; all clones share the same engine.
#[derive(Clone)]
pub struct Scheduler {
    shared: Arc<Shared>,
}

struct Shared {
    id: String,
    thread_queue: AdmissionQueue,
    priority_queue: AdmissionQueue,
    ready_queue: AdmissionQueue,
    counters: StateCounters,
    appraiser: Arc<dyn JobAppraiser>,
    restore_policy: RestorePolicy,

    fairness: AtomicBool,
    pool_size: AtomicUsize,
    max_ready_jobs: AtomicUsize,
    max_running_per_creator: AtomicUsize,
    max_retries: AtomicU32,
    retry_delay_ms: AtomicU64,
    offer_timeout_ms: AtomicU64,
    startup_ack_timeout_ms: AtomicU64,
    wake_interval_ms: AtomicU64,

    /// Pool occupancy: workers dispatched and not yet finished.
    workers: AtomicUsize,
    wake: Notify,
    shutdown: CancellationToken,
    running: AtomicBool,
}

impl Scheduler {
    pub fn new(id: impl Into<String>, config: SchedulerConfig) -> Self {
        let appraiser = config.appraiser.build();
        Self::with_appraiser(id, config, appraiser)
    }

    /// Build a scheduler with an externally supplied selection policy.
    pub fn with_appraiser(
        id: impl Into<String>,
        config: SchedulerConfig,
        appraiser: Arc<dyn JobAppraiser>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                id: id.into(),
                thread_queue: AdmissionQueue::new("thread", config.thread_queue_capacity),
                priority_queue: AdmissionQueue::new("priority", config.priority_queue_capacity),
                ready_queue: AdmissionQueue::new("ready", config.ready_queue_capacity),
                counters: StateCounters::new(),
                appraiser,
                restore_policy: config.restore_policy,
                fairness: AtomicBool::new(config.use_fairness),
                pool_size: AtomicUsize::new(config.pool_size),
                max_ready_jobs: AtomicUsize::new(config.max_ready_jobs),
                max_running_per_creator: AtomicUsize::new(config.max_running_per_creator),
                max_retries: AtomicU32::new(config.max_retries),
                retry_delay_ms: AtomicU64::new(config.retry_delay.as_millis() as u64),
                offer_timeout_ms: AtomicU64::new(config.offer_timeout.as_millis() as u64),
                startup_ack_timeout_ms: AtomicU64::new(
                    config.startup_ack_timeout.as_millis() as u64
                ),
                wake_interval_ms: AtomicU64::new(config.wake_interval.as_millis() as u64),
                workers: AtomicUsize::new(0),
                wake: Notify::new(),
                shutdown: CancellationToken::new(),
                running: AtomicBool::new(false),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.shared.id
    }

    /// Spawn the control loop. Errors if the scheduler is already running.
    pub fn start(&self) -> Result<()> {
        if self.shared.running.swap(true, Ordering::SeqCst) {
            return Err(SchedulerError::AlreadyRunning(self.shared.id.clone()));
        }
        let engine = self.clone();
        tokio::spawn(async move { engine.control_loop().await });
        tracing::info!(
            scheduler = %self.shared.id,
            pool_size = self.pool_size(),
            fairness = self.fairness_enabled(),
            appraiser = self.shared.appraiser.name(),
            "Scheduler started"
        );
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst)
    }

    pub(crate) fn is_shutting_down(&self) -> bool {
        self.shared.shutdown.is_cancelled()
    }

    /// Stop the control loop and fail every still-queued job.
    ///
    /// Jobs waiting on retry timers are reachable only through those timers;
    /// a timer firing after shutdown fails its job instead of re-admitting it.
    pub fn shutdown(&self) {
        if !self.shared.running.swap(false, Ordering::SeqCst) {
            return;
        }
        self.shared.shutdown.cancel();
        for queue in [
            &self.shared.priority_queue,
            &self.shared.thread_queue,
            &self.shared.ready_queue,
        ] {
            for job in queue.snapshot() {
                if let Err(error) = self.set_state(&job, State::Failed, "scheduler interrupted") {
                    tracing::debug!(job_id = %job.id(), %error, "Job already terminal at shutdown");
                }
            }
        }
        tracing::info!(scheduler = %self.shared.id, "Scheduler shut down");
    }

    /// Admit a job.
    ///
    /// Pending and restored jobs go to the thread queue (non-blocking; a full
    /// queue fails the job rather than dropping it). Jobs resuming from a
    /// wait state go to the priority queue; that offer may wait for capacity
    /// up to the configured offer timeout, putting backpressure on timers and
    /// event handlers.
    pub async fn schedule(&self, job: &Arc<Job>) -> Result<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning(self.shared.id.clone()));
        }
        match job.state() {
            State::Pending | State::Restored => {
                self.set_state(job, State::TQueued, "placed on the thread queue")?;
                if !self.shared.thread_queue.try_offer(job.clone()) {
                    self.set_state(job, State::Failed, "thread queue is full")?;
                }
                Ok(())
            }
            State::AsyncWait | State::RetryWait | State::RunningWithoutThread => {
                self.set_state(job, State::PriorityTQueued, "placed on the priority queue")?;
                if !self
                    .shared
                    .priority_queue
                    .offer(job.clone(), self.offer_timeout())
                    .await
                {
                    self.set_state(job, State::Failed, "priority queue is full")?;
                }
                Ok(())
            }
            state => Err(SchedulerError::NotSchedulable(state)),
        }
    }

    /// Cancel a job in any non-terminal state, removing it from its queue and
    /// aborting any pending retry timer.
    pub fn cancel(&self, job: &Arc<Job>, reason: &str) -> Result<()> {
        self.set_state(job, State::Canceled, reason).map(|_| ())
    }

    /// Validated state transition, the single entry point for all mutation.
    ///
    /// Under the job's lock: checks the transition table, bumps the retry
    /// count on entry to retry-wait, appends history, moves the occupancy
    /// counters, removes the job from the queue matching its old state, and
    /// swaps the retry timer. A same-state transition is a no-op. Returns the
    /// previous state.
    pub fn set_state(&self, job: &Arc<Job>, to: State, reason: &str) -> Result<State> {
        let shared = &self.shared;
        let stale_timer;
        let from;
        {
            let mut cell = job.cell();
            from = cell.state;
            if from == to {
                return Ok(from);
            }
            if !from.can_transition(to) {
                return Err(SchedulerError::IllegalStateTransition { from, to });
            }
            cell.state = to;
            if to == State::RetryWait {
                cell.retries += 1;
            }
            cell.history.push(TransitionRecord {
                state: to,
                reason: reason.to_owned(),
                at: Utc::now(),
            });
            shared.counters.record(job.creator(), Some(from), Some(to));
            match from {
                State::TQueued => {
                    shared.thread_queue.remove(job.id());
                }
                State::PriorityTQueued => {
                    shared.priority_queue.remove(job.id());
                }
                State::RQueued => {
                    shared.ready_queue.remove(job.id());
                }
                _ => {}
            }
            stale_timer = if from == State::RetryWait {
                cell.retry_timer.take()
            } else {
                None
            };
            if to == State::RetryWait {
                cell.retry_timer = Some(self.spawn_retry_timer(job));
            }
        }
        if let Some(timer) = stale_timer {
            timer.abort();
        }
        tracing::debug!(
            scheduler = %shared.id,
            job_id = %job.id(),
            creator = job.creator(),
            from = %from,
            to = %to,
            reason,
            "Job state changed"
        );
        shared.wake.notify_one();
        Ok(from)
    }

    /// Adopt persisted jobs from a store according to the restore policy.
    ///
    /// Best-effort: an entry that fails to load is logged and skipped, and a
    /// job that cannot be re-admitted is failed, without affecting the rest.
    /// Returns the adopted jobs so the caller can keep tracking them.
    pub async fn restore(&self, store: &dyn JobStore) -> Vec<Arc<Job>> {
        let mut adopted = Vec::new();
        for entry in store.load(&self.shared.id) {
            let stored = match entry {
                Ok(stored) => stored,
                Err(error) => {
                    tracing::warn!(
                        scheduler = %self.shared.id,
                        %error,
                        "Skipping persisted job that failed to load"
                    );
                    continue;
                }
            };
            if stored.state.is_terminal() {
                continue;
            }
            adopted.push(self.adopt(stored).await);
        }
        tracing::info!(
            scheduler = %self.shared.id,
            count = adopted.len(),
            policy = ?self.shared.restore_policy,
            "Restored persisted jobs"
        );
        adopted
    }

    async fn adopt(&self, stored: StoredJob) -> Arc<Job> {
        let StoredJob {
            id,
            creator,
            state,
            retries,
            max_retries,
            spec,
        } = stored;

        match self.shared.restore_policy {
            RestorePolicy::FailOnRestart => {
                let job = Job::restored(id, creator, max_retries, retries, state, spec);
                self.shared.counters.adopt(job.creator(), state);
                if let Err(error) =
                    self.set_state(&job, State::Failed, "failing persisted jobs on restart")
                {
                    tracing::warn!(job_id = %job.id(), %error, "Could not fail restored job");
                }
                job
            }
            RestorePolicy::WaitForUpdate => {
                let job = Job::restored(id, creator, max_retries, retries, State::Restored, spec);
                self.shared.counters.adopt(job.creator(), State::Restored);
                tracing::info!(
                    job_id = %job.id(),
                    persisted_state = %state,
                    "Restored job is waiting for an external update"
                );
                job
            }
            RestorePolicy::Resume => {
                let job = Job::restored(id, creator, max_retries, retries, state, spec);
                self.shared.counters.adopt(job.creator(), state);
                self.resume(&job, state).await;
                job
            }
        }
    }

    async fn resume(&self, job: &Arc<Job>, state: State) {
        match state {
            State::Pending | State::Restored => {
                if let Err(error) = self.schedule(job).await {
                    tracing::warn!(job_id = %job.id(), %error, "Restored job failed admission");
                    let _ = self.set_state(job, State::Failed, "failed admission during restore");
                }
            }
            State::TQueued => {
                if !self.shared.thread_queue.try_offer(job.clone()) {
                    let _ = self.set_state(job, State::Failed, "thread queue is full");
                }
            }
            State::PriorityTQueued => {
                if !self
                    .shared
                    .priority_queue
                    .offer(job.clone(), self.offer_timeout())
                    .await
                {
                    let _ = self.set_state(job, State::Failed, "priority queue is full");
                }
            }
            State::RQueued => {
                if !self.shared.ready_queue.try_offer(job.clone()) {
                    let _ = self.set_state(job, State::Failed, "ready queue is full");
                }
            }
            State::Running | State::AsyncWait | State::RunningWithoutThread => {
                // The completion or notification these were waiting on will
                // not arrive after a restart; put them on the retry track.
                if let Err(error) = self.set_state(job, State::RetryWait, "resumed after restart")
                {
                    tracing::warn!(job_id = %job.id(), %error, "Could not park restored job");
                }
            }
            State::RetryWait => {
                let mut cell = job.cell();
                cell.retry_timer = Some(self.spawn_retry_timer(job));
            }
            State::Ready | State::Transferring => {}
            State::Done | State::Failed | State::Canceled => {}
        }
    }

    /// Read-only operational snapshot.
    pub fn info(&self) -> SchedulerInfo {
        let shared = &self.shared;
        SchedulerInfo {
            id: shared.id.clone(),
            running: self.is_running(),
            fairness: self.fairness_enabled(),
            appraiser: shared.appraiser.name(),
            pool_size: self.pool_size(),
            workers_active: self.workers_active(),
            max_running_per_creator: self.max_running_per_creator(),
            max_ready_jobs: self.max_ready_jobs(),
            max_retries: self.max_retries(),
            retry_delay_ms: shared.retry_delay_ms.load(Ordering::SeqCst),
            wake_interval_ms: shared.wake_interval_ms.load(Ordering::SeqCst),
            restore_policy: shared.restore_policy,
            thread_queue: QueueInfo::of(&shared.thread_queue),
            priority_queue: QueueInfo::of(&shared.priority_queue),
            ready_queue: QueueInfo::of(&shared.ready_queue),
            states: shared
                .counters
                .totals()
                .into_iter()
                .map(|(state, count)| StateCount { state, count })
                .collect(),
        }
    }

    // ---- occupancy accessors ----

    pub fn state_total(&self, state: State) -> usize {
        self.shared.counters.total(state)
    }

    pub fn state_by_creator(&self, state: State, creator: &str) -> usize {
        self.shared.counters.by_creator(state, creator)
    }

    pub fn workers_active(&self) -> usize {
        self.shared.workers.load(Ordering::SeqCst)
    }

    // ---- runtime configuration ----

    pub fn pool_size(&self) -> usize {
        self.shared.pool_size.load(Ordering::SeqCst)
    }

    pub fn set_pool_size(&self, size: usize) {
        self.shared.pool_size.store(size, Ordering::SeqCst);
        self.shared.wake.notify_one();
    }

    pub fn fairness_enabled(&self) -> bool {
        self.shared.fairness.load(Ordering::SeqCst)
    }

    pub fn set_fairness(&self, enabled: bool) {
        self.shared.fairness.store(enabled, Ordering::SeqCst);
    }

    pub fn max_ready_jobs(&self) -> usize {
        self.shared.max_ready_jobs.load(Ordering::SeqCst)
    }

    pub fn set_max_ready_jobs(&self, limit: usize) {
        self.shared.max_ready_jobs.store(limit, Ordering::SeqCst);
        self.shared.wake.notify_one();
    }

    pub fn max_running_per_creator(&self) -> usize {
        self.shared.max_running_per_creator.load(Ordering::SeqCst)
    }

    pub fn set_max_running_per_creator(&self, limit: usize) {
        self.shared
            .max_running_per_creator
            .store(limit, Ordering::SeqCst);
    }

    pub fn max_retries(&self) -> u32 {
        self.shared.max_retries.load(Ordering::SeqCst)
    }

    pub fn set_max_retries(&self, limit: u32) {
        self.shared.max_retries.store(limit, Ordering::SeqCst);
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.shared.retry_delay_ms.load(Ordering::SeqCst))
    }

    pub fn set_retry_delay(&self, delay: Duration) {
        self.shared
            .retry_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn set_wake_interval(&self, interval: Duration) {
        self.shared
            .wake_interval_ms
            .store(interval.as_millis() as u64, Ordering::SeqCst);
        self.shared.wake.notify_one();
    }

    pub fn set_thread_queue_capacity(&self, capacity: usize) {
        self.shared.thread_queue.set_capacity(capacity);
    }

    pub fn set_priority_queue_capacity(&self, capacity: usize) {
        self.shared.priority_queue.set_capacity(capacity);
    }

    pub fn set_ready_queue_capacity(&self, capacity: usize) {
        self.shared.ready_queue.set_capacity(capacity);
    }

    fn offer_timeout(&self) -> Duration {
        Duration::from_millis(self.shared.offer_timeout_ms.load(Ordering::SeqCst))
    }

    fn startup_ack_timeout(&self) -> Duration {
        Duration::from_millis(self.shared.startup_ack_timeout_ms.load(Ordering::SeqCst))
    }

    fn wake_interval(&self) -> Duration {
        Duration::from_millis(self.shared.wake_interval_ms.load(Ordering::SeqCst))
    }

    // ---- worker pool bookkeeping (called by the executor) ----

    pub(crate) fn worker_finished(&self) {
        self.shared.workers.fetch_sub(1, Ordering::SeqCst);
        self.shared.wake.notify_one();
    }

    pub(crate) fn try_queue_ready(&self, job: Arc<Job>) -> bool {
        self.shared.ready_queue.try_offer(job)
    }

    // ---- control loop ----

    async fn control_loop(self) {
        tracing::info!(scheduler = %self.shared.id, "Control loop started");
        loop {
            let wake_interval = self.wake_interval();
            tokio::select! {
                _ = self.shared.wake.notified() => {}
                _ = tokio::time::sleep(wake_interval) => {}
                _ = self.shared.shutdown.cancelled() => break,
            }
            if self.shared.shutdown.is_cancelled() {
                break;
            }
            self.drain_queue(Lane::Priority).await;
            self.drain_queue(Lane::Thread).await;
            self.promote_ready();
        }
        tracing::info!(scheduler = %self.shared.id, "Control loop stopped");
    }

    /// Dispatch from one queue until it is empty or the pool is saturated.
    ///
    /// Detached jobs are counted against the pool even though they hold no
    /// worker: they are still logically running.
    async fn drain_queue(&self, lane: Lane) {
        let queue = match lane {
            Lane::Priority => &self.shared.priority_queue,
            Lane::Thread => &self.shared.thread_queue,
        };
        let expected = match lane {
            Lane::Priority => State::PriorityTQueued,
            Lane::Thread => State::TQueued,
        };
        loop {
            if self.shared.shutdown.is_cancelled() {
                return;
            }
            let occupancy = self.workers_active() + self.state_total(State::RunningWithoutThread);
            if occupancy >= self.pool_size() {
                break;
            }
            let Some(job) = self.select_queued(queue, expected) else {
                break;
            };
            let (ack_tx, ack_rx) = tokio::sync::oneshot::channel();
            self.shared.workers.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(executor::run_job(self.clone(), job.clone(), ack_tx));
            // Bounded startup handshake: do not keep dispatching from a lane
            // whose workers are stalling.
            if tokio::time::timeout(self.startup_ack_timeout(), ack_rx)
                .await
                .is_err()
            {
                tracing::warn!(
                    scheduler = %self.shared.id,
                    job_id = %job.id(),
                    queue = queue.name(),
                    "Worker startup acknowledgement timed out"
                );
                break;
            }
        }
    }

    /// Move jobs from the ready queue into ready slots, up to the limit.
    fn promote_ready(&self) {
        loop {
            let occupied = self.state_total(State::Ready) + self.state_total(State::Transferring);
            if occupied >= self.max_ready_jobs() {
                break;
            }
            let Some(job) = self.select_queued(&self.shared.ready_queue, State::RQueued) else {
                break;
            };
            if let Err(error) = self.set_state(&job, State::Ready, "ready slot available") {
                tracing::warn!(job_id = %job.id(), %error, "Could not ready job");
                self.shared.ready_queue.remove(job.id());
            }
        }
    }

    /// Pick the next job from a queue: FIFO head when fairness is off,
    /// highest appraiser score otherwise (ties go to the earliest enqueued).
    /// Entries whose state no longer matches the queue are dropped and
    /// selection retries.
    fn select_queued(&self, queue: &AdmissionQueue, expected: State) -> Option<Arc<Job>> {
        loop {
            let snapshot = queue.snapshot();
            let candidate = if self.fairness_enabled() {
                self.best_scored(&snapshot, expected)
            } else {
                snapshot.first().cloned()
            }?;
            if candidate.state() == expected {
                return Some(candidate);
            }
            tracing::debug!(
                job_id = %candidate.id(),
                state = %candidate.state(),
                queue = queue.name(),
                "Removing stale queue entry"
            );
            queue.remove(candidate.id());
        }
    }

    fn best_scored(&self, snapshot: &[Arc<Job>], expected: State) -> Option<Arc<Job>> {
        let queue_length = snapshot.len();
        let mut best: Option<(i64, &Arc<Job>)> = None;
        for (position, job) in snapshot.iter().enumerate() {
            let (active, limit) = self.appraisal_context(expected, job.creator());
            let score = self
                .shared
                .appraiser
                .score(queue_length, position, active, limit, job);
            match best {
                Some((best_score, _)) if best_score >= score => {}
                _ => best = Some((score, job)),
            }
        }
        best.map(|(_, job)| job.clone())
    }

    /// What a creator is already using, and its limit, for the states a
    /// given queue competes for.
    fn appraisal_context(&self, expected: State, creator: &str) -> (usize, usize) {
        match expected {
            State::RQueued => (
                self.state_by_creator(State::Ready, creator)
                    + self.state_by_creator(State::Transferring, creator),
                self.max_ready_jobs(),
            ),
            _ => (
                self.state_by_creator(State::Running, creator)
                    + self.state_by_creator(State::RunningWithoutThread, creator),
                self.max_running_per_creator(),
            ),
        }
    }

    // ---- retry coordination ----

    fn spawn_retry_timer(&self, job: &Arc<Job>) -> JoinHandle<()> {
        let delay = self.retry_delay();
        let engine = self.clone();
        let job = job.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            engine.fire_retry(job).await;
        })
    }

    async fn fire_retry(&self, job: Arc<Job>) {
        {
            let mut cell = job.cell();
            if cell.state != State::RetryWait {
                tracing::debug!(
                    job_id = %job.id(),
                    state = %cell.state,
                    "Retry timer fired but the job has moved on"
                );
                return;
            }
            // Drop our own handle so the transition below does not abort the
            // task that is performing it.
            cell.retry_timer.take();
        }
        if !self.is_running() {
            let _ = self.set_state(&job, State::Failed, "scheduler interrupted");
            return;
        }
        if let Err(error) = self.set_state(&job, State::PriorityTQueued, "retry delay elapsed") {
            tracing::warn!(job_id = %job.id(), %error, "Could not re-admit retried job");
            return;
        }
        if !self
            .shared
            .priority_queue
            .offer(job.clone(), self.offer_timeout())
            .await
        {
            let _ = self.set_state(&job, State::Failed, "priority queue is full");
        }
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("id", &self.shared.id)
            .field("running", &self.is_running())
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QueueInfo {
    pub size: usize,
    pub capacity: usize,
}

impl QueueInfo {
    fn of(queue: &AdmissionQueue) -> Self {
        Self {
            size: queue.len(),
            capacity: queue.capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StateCount {
    pub state: State,
    pub count: usize,
}

/// Read-only diagnostic snapshot of one scheduler.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulerInfo {
    pub id: String,
    pub running: bool,
    pub fairness: bool,
    pub appraiser: &'static str,
    pub pool_size: usize,
    pub workers_active: usize,
    pub max_running_per_creator: usize,
    pub max_ready_jobs: usize,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub wake_interval_ms: u64,
    pub restore_policy: RestorePolicy,
    pub thread_queue: QueueInfo,
    pub priority_queue: QueueInfo,
    pub ready_queue: QueueInfo,
    pub states: Vec<StateCount>,
}
