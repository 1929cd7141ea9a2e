//! Worker-side execution of a dispatched job.
//!
//! Each dispatch wraps the job so that:
//!
//! 1. The job moves from its queued state to running and the dispatcher is
//!    acked, in every path, so the startup handshake never waits out its
//!    timeout on a job that declined to start.
//! 2. The payload runs on a dedicated blocking thread, outside engine locks.
//! 3. The outcome is classified: yield to the ready queue, completion,
//!    detachment, retry-wait, or failure. A payload panic is fatal.
//! 4. The pool slot is released and the control loop notified regardless of
//!    outcome.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinError;

use crate::error::JobFailure;
use crate::scheduler::engine::Scheduler;
use crate::scheduler::job::{Job, JobOutcome};
use crate::scheduler::state::State;

pub(crate) async fn run_job(engine: Scheduler, job: Arc<Job>, ack: oneshot::Sender<()>) {
    let started = begin(&engine, &job);
    let _ = ack.send(());

    if started {
        if engine.is_shutting_down() {
            let _ = engine.set_state(&job, State::Failed, "scheduler interrupted");
        } else {
            let payload_job = job.clone();
            let result = tokio::task::spawn_blocking(move || payload_job.run_payload()).await;
            conclude(&engine, &job, result);
        }
    }

    engine.worker_finished();
}

/// Move a queued job to running and report whether the payload should run.
/// A job canceled (or otherwise moved on) since selection is skipped.
fn begin(engine: &Scheduler, job: &Arc<Job>) -> bool {
    match job.state() {
        State::TQueued | State::PriorityTQueued => {
            match engine.set_state(job, State::Running, "executing") {
                Ok(_) => true,
                Err(error) => {
                    tracing::warn!(job_id = %job.id(), %error, "Job could not enter running");
                    false
                }
            }
        }
        state => {
            tracing::debug!(
                job_id = %job.id(),
                %state,
                "Job left its queue before starting, skipping execution"
            );
            false
        }
    }
}

fn conclude(
    engine: &Scheduler,
    job: &Arc<Job>,
    result: Result<Result<JobOutcome, JobFailure>, JoinError>,
) {
    match result {
        Ok(Ok(JobOutcome::Done)) => {
            apply(engine, job, State::Done, "completed");
        }
        Ok(Ok(JobOutcome::Yielded)) => {
            if job.state() != State::Running {
                tracing::debug!(
                    job_id = %job.id(),
                    state = %job.state(),
                    "Job moved on during execution, leaving it alone"
                );
                return;
            }
            if apply(engine, job, State::RQueued, "placed on the ready queue")
                && !engine.try_queue_ready(job.clone())
            {
                apply(engine, job, State::Failed, "ready queue is full");
            }
        }
        Ok(Ok(JobOutcome::AsyncWait)) => {
            apply(engine, job, State::AsyncWait, "waiting for an external event");
        }
        Ok(Ok(JobOutcome::Detached)) => {
            apply(
                engine,
                job,
                State::RunningWithoutThread,
                "continuing without a worker",
            );
        }
        Ok(Err(JobFailure::NonFatal(message))) => {
            let budget = job.max_retries().min(engine.max_retries());
            if job.retries() < budget {
                apply(
                    engine,
                    job,
                    State::RetryWait,
                    &format!("non-fatal failure, retrying: {message}"),
                );
            } else {
                apply(
                    engine,
                    job,
                    State::Failed,
                    &format!("retry limit of {budget} reached: {message}"),
                );
            }
        }
        Ok(Err(JobFailure::Fatal(message))) => {
            apply(engine, job, State::Failed, &format!("fatal failure: {message}"));
        }
        Err(join_error) => {
            tracing::error!(job_id = %job.id(), error = %join_error, "Job payload panicked");
            apply(engine, job, State::Failed, "job payload panicked");
        }
    }
}

/// Attempt a transition, logging instead of propagating when the job raced
/// to a terminal state (e.g. canceled while its payload was running).
fn apply(engine: &Scheduler, job: &Arc<Job>, state: State, reason: &str) -> bool {
    match engine.set_state(job, state, reason) {
        Ok(_) => true,
        Err(error) => {
            tracing::debug!(job_id = %job.id(), %error, "Transition skipped, job already moved on");
            false
        }
    }
}
