//! Worker pool execution of dispatched jobs.
//!
//! The pool is bounded by the scheduler's configured size; the control loop
//! checks occupancy before every dispatch, counting detached jobs against
//! the pool even though they hold no thread. Payloads run via
//! [`tokio::task::spawn_blocking`] so they occupy real threads and may block
//! freely without stalling the engine.

pub(crate) mod executor;
