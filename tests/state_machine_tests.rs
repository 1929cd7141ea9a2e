//! The engine never permits a transition outside the legal table, and an
//! illegal attempt leaves the job untouched.

mod common;

use std::time::Duration;

use stevedore::error::SchedulerError;
use stevedore::scheduler::{Job, State};

use common::{start_scheduler, test_config, wait_for_state, TestJob};

#[tokio::test]
async fn illegal_transition_is_rejected_and_state_is_unchanged() {
    let scheduler = start_scheduler("sm-illegal", test_config());
    let job = Job::new("alice", 0, TestJob::completing());

    let err = scheduler
        .set_state(&job, State::Running, "should not happen")
        .unwrap_err();
    assert!(matches!(
        err,
        SchedulerError::IllegalStateTransition {
            from: State::Pending,
            to: State::Running,
        }
    ));
    assert_eq!(job.state(), State::Pending);
    assert!(job.history().is_empty());

    scheduler.shutdown();
}

#[tokio::test]
async fn same_state_transition_is_a_no_op() {
    let scheduler = start_scheduler("sm-noop", test_config());
    let job = Job::new("alice", 0, TestJob::completing());

    let prior = scheduler
        .set_state(&job, State::Pending, "redundant")
        .unwrap();
    assert_eq!(prior, State::Pending);
    assert!(job.history().is_empty());

    scheduler.shutdown();
}

#[tokio::test]
async fn terminal_jobs_admit_nothing() {
    let scheduler = start_scheduler("sm-terminal", test_config());
    let job = Job::new("alice", 0, TestJob::completing());

    scheduler.cancel(&job, "operator request").unwrap();
    assert_eq!(job.state(), State::Canceled);

    for target in [State::TQueued, State::Running, State::Failed, State::Done] {
        let err = scheduler.set_state(&job, target, "late").unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::IllegalStateTransition { .. }
        ));
        assert_eq!(job.state(), State::Canceled);
    }

    scheduler.shutdown();
}

#[tokio::test]
async fn cancel_of_a_terminal_job_is_rejected() {
    let scheduler = start_scheduler("sm-cancel-terminal", test_config());
    let job = Job::new("alice", 0, TestJob::completing());

    scheduler.cancel(&job, "first").unwrap();
    let err = scheduler.cancel(&job, "second").unwrap_err();
    assert!(matches!(
        err,
        SchedulerError::IllegalStateTransition { .. }
    ));

    scheduler.shutdown();
}

#[tokio::test]
async fn scheduling_a_terminal_job_is_a_caller_error() {
    let scheduler = start_scheduler("sm-schedule-terminal", test_config());
    let job = Job::new("alice", 0, TestJob::completing());
    scheduler.cancel(&job, "operator request").unwrap();

    let err = scheduler.schedule(&job).await.unwrap_err();
    assert!(matches!(err, SchedulerError::NotSchedulable(State::Canceled)));

    scheduler.shutdown();
}

#[tokio::test]
async fn scheduling_on_a_stopped_scheduler_is_rejected() {
    let scheduler = stevedore::scheduler::Scheduler::new("sm-stopped", test_config());
    let job = Job::new("alice", 0, TestJob::completing());

    let err = scheduler.schedule(&job).await.unwrap_err();
    assert!(matches!(err, SchedulerError::NotRunning(_)));
    assert_eq!(job.state(), State::Pending);
}

#[tokio::test]
async fn history_records_every_transition_with_a_reason() {
    let scheduler = start_scheduler("sm-history", test_config());
    let job = Job::new("alice", 0, TestJob::completing());

    scheduler.schedule(&job).await.unwrap();
    wait_for_state(&job, State::Done, Duration::from_secs(5)).await;

    let states: Vec<State> = job.history().iter().map(|r| r.state).collect();
    assert_eq!(states, vec![State::TQueued, State::Running, State::Done]);
    assert!(job.history().iter().all(|r| !r.reason.is_empty()));
    assert_eq!(job.last_reason().as_deref(), Some("completed"));

    scheduler.shutdown();
}

#[tokio::test]
async fn ready_flow_walks_through_transferring() {
    let scheduler = start_scheduler("sm-ready-flow", test_config());
    let job = Job::new("alice", 0, TestJob::yielding());

    scheduler.schedule(&job).await.unwrap();
    wait_for_state(&job, State::Ready, Duration::from_secs(5)).await;

    scheduler
        .set_state(&job, State::Transferring, "transfer started")
        .unwrap();
    scheduler
        .set_state(&job, State::Done, "transfer complete")
        .unwrap();
    assert_eq!(job.state(), State::Done);

    scheduler.shutdown();
}
