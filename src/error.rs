use thiserror::Error;

use crate::scheduler::state::State;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("illegal state transition from {from} to {to}")]
    IllegalStateTransition { from: State, to: State },

    #[error("cannot schedule a job in state {0}")]
    NotSchedulable(State),

    #[error("scheduler {0} is not running")]
    NotRunning(String),

    #[error("scheduler {0} is already running")]
    AlreadyRunning(String),

    #[error("scheduler already registered: {0}")]
    AlreadyRegistered(String),

    #[error("scheduler not found: {0}")]
    SchedulerNotFound(String),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Classified failure reported by a job payload.
///
/// Non-fatal failures are retried until the retry budget is spent; fatal
/// failures terminate the job immediately. A payload panic is treated as
/// fatal by the executor.
#[derive(Error, Debug, Clone)]
pub enum JobFailure {
    #[error("non-fatal failure: {0}")]
    NonFatal(String),

    #[error("fatal failure: {0}")]
    Fatal(String),
}
