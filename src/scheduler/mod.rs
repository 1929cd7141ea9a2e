pub mod appraiser;
pub mod counters;
pub mod engine;
pub mod job;
pub mod queue;
pub mod state;

pub use engine::{Scheduler, SchedulerInfo};
pub use job::{Job, JobOutcome, JobSpec};
pub use state::State;
