use serde::Serialize;

/// Lifecycle state of a job.
///
/// A job occupies exactly one state at any instant. `Done`, `Failed` and
/// `Canceled` are terminal; a job reaching one of them is no longer live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum State {
    /// Submitted but not yet admitted to a queue.
    Pending,
    /// Reconstructed from a job store, waiting for an external update.
    Restored,
    /// Waiting on the thread queue for a worker.
    TQueued,
    /// Waiting on the priority queue for a worker.
    PriorityTQueued,
    /// Payload executing on a pool worker.
    Running,
    /// Finished executing, waiting on the ready queue for a ready slot.
    RQueued,
    /// Quiescent, waiting for an external party to act on it.
    Ready,
    /// External transfer in progress.
    Transferring,
    /// Waiting for an external event before resuming.
    AsyncWait,
    /// Waiting for the retry timer to re-admit it.
    RetryWait,
    /// Logically running but not occupying a pool worker.
    RunningWithoutThread,
    Done,
    Failed,
    Canceled,
}

impl State {
    pub const fn is_terminal(self) -> bool {
        matches!(self, State::Done | State::Failed | State::Canceled)
    }

    /// Whether a transition from `self` to `to` is legal.
    ///
    /// A same-state transition is legal and treated as a no-op by callers.
    /// `AsyncWait -> RetryWait` and `RunningWithoutThread -> RetryWait` exist
    /// for the restore path: the event that would have resumed such a job is
    /// not going to arrive after a restart, so it is put on the retry track.
    pub fn can_transition(self, to: State) -> bool {
        use State::*;

        if self == to {
            return true;
        }
        match self {
            Pending | Restored => matches!(to, TQueued | Canceled | Failed),
            TQueued | PriorityTQueued => matches!(to, Running | Canceled | Failed),
            Running => matches!(
                to,
                RQueued
                    | Done
                    | RetryWait
                    | AsyncWait
                    | RunningWithoutThread
                    | Canceled
                    | Failed
            ),
            RQueued => matches!(to, Ready | Canceled | Failed),
            Ready => matches!(to, Transferring | Done | Canceled | Failed),
            Transferring => matches!(to, Done | Canceled | Failed),
            AsyncWait => matches!(to, PriorityTQueued | RetryWait | Canceled | Failed),
            RetryWait => matches!(to, PriorityTQueued | Canceled | Failed),
            RunningWithoutThread => {
                matches!(to, PriorityTQueued | RetryWait | Done | Canceled | Failed)
            }
            Done | Failed | Canceled => false,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            State::Pending => "pending",
            State::Restored => "restored",
            State::TQueued => "tqueued",
            State::PriorityTQueued => "prioritytqueued",
            State::Running => "running",
            State::RQueued => "rqueued",
            State::Ready => "ready",
            State::Transferring => "transferring",
            State::AsyncWait => "asyncwait",
            State::RetryWait => "retrywait",
            State::RunningWithoutThread => "runningwithoutthread",
            State::Done => "done",
            State::Failed => "failed",
            State::Canceled => "canceled",
        };
        write!(f, "{name}")
    }
}

/// All states, in declaration order. Used by diagnostics snapshots.
pub const ALL_STATES: [State; 14] = [
    State::Pending,
    State::Restored,
    State::TQueued,
    State::PriorityTQueued,
    State::Running,
    State::RQueued,
    State::Ready,
    State::Transferring,
    State::AsyncWait,
    State::RetryWait,
    State::RunningWithoutThread,
    State::Done,
    State::Failed,
    State::Canceled,
];
