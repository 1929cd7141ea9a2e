//! Selection policies for picking the next job off a queue.

use serde::Serialize;

use crate::scheduler::job::Job;

/// Trait for queue selection policies.
///
/// When fairness is enabled the control loop scores every queued job and
/// dispatches the highest-scoring one; ties are broken by queue order
/// (earliest enqueued wins).
pub trait JobAppraiser: Send + Sync {
    /// Scores a queued job.
    ///
    /// `position` is the job's FIFO index (0 is the head, i.e. the longest
    /// waiter), `creator_active` the number of jobs the same creator already
    /// has in the states the queue competes for, and `creator_limit` the
    /// configured per-creator allowance for those states.
    fn score(
        &self,
        queue_length: usize,
        position: usize,
        creator_active: usize,
        creator_limit: usize,
        job: &Job,
    ) -> i64;

    /// Returns the policy name.
    fn name(&self) -> &'static str;
}

/// Default policy: creators with headroom under their limit beat creators at
/// or over it, and within a creator class the longest-waiting job wins.
#[derive(Debug, Default)]
pub struct FairShareAppraiser;

impl FairShareAppraiser {
    pub fn new() -> Self {
        Self
    }
}

impl JobAppraiser for FairShareAppraiser {
    fn score(
        &self,
        queue_length: usize,
        position: usize,
        creator_active: usize,
        creator_limit: usize,
        _job: &Job,
    ) -> i64 {
        let headroom = creator_limit as i64 - creator_active as i64;
        // Scale headroom past the largest possible position delta so the
        // waiting-time bias only decides among creators with equal headroom.
        headroom * (queue_length as i64 + 1) - position as i64
    }

    fn name(&self) -> &'static str {
        "fair_share"
    }
}

/// Strict arrival-order policy. Equivalent to disabling fairness, but
/// selectable as an explicit strategy.
#[derive(Debug, Default)]
pub struct FifoAppraiser;

impl FifoAppraiser {
    pub fn new() -> Self {
        Self
    }
}

impl JobAppraiser for FifoAppraiser {
    fn score(
        &self,
        _queue_length: usize,
        position: usize,
        _creator_active: usize,
        _creator_limit: usize,
        _job: &Job,
    ) -> i64 {
        -(position as i64)
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}

/// Selection policies configurable at scheduler construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppraiserKind {
    FairShare,
    Fifo,
}

impl AppraiserKind {
    pub fn build(self) -> std::sync::Arc<dyn JobAppraiser> {
        match self {
            AppraiserKind::FairShare => std::sync::Arc::new(FairShareAppraiser::new()),
            AppraiserKind::Fifo => std::sync::Arc::new(FifoAppraiser::new()),
        }
    }
}
