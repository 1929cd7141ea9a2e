use std::collections::HashMap;
use std::sync::Mutex;

use crate::scheduler::state::{State, ALL_STATES};

/// Occupancy counters for every live (state, creator) pair.
///
/// One generic table replaces per-state parallel maps: a transition touches
/// exactly one decrement and one increment. Terminal states and `Pending`
/// (not yet admitted) are not tracked.
pub struct StateCounters {
    inner: Mutex<Inner>,
}

struct Inner {
    by_creator: HashMap<(State, String), usize>,
    totals: HashMap<State, usize>,
}

fn tracked(state: State) -> bool {
    !state.is_terminal() && state != State::Pending
}

impl StateCounters {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                by_creator: HashMap::new(),
                totals: HashMap::new(),
            }),
        }
    }

    /// Apply a transition: decrement the old bucket, increment the new one.
    /// `None` means the job was not live before (adoption) or is not live
    /// after (terminal).
    pub fn record(&self, creator: &str, from: Option<State>, to: Option<State>) {
        let mut inner = self.inner.lock().expect("counter lock poisoned");

        if let Some(from) = from.filter(|s| tracked(*s)) {
            inner.decrement(from, creator);
        }
        if let Some(to) = to.filter(|s| tracked(*s)) {
            inner.increment(to, creator);
        }
    }

    /// Register a job that enters the scheduler already occupying `state`
    /// (restore path).
    pub fn adopt(&self, creator: &str, state: State) {
        self.record(creator, None, Some(state));
    }

    pub fn total(&self, state: State) -> usize {
        let inner = self.inner.lock().expect("counter lock poisoned");
        inner.totals.get(&state).copied().unwrap_or(0)
    }

    pub fn by_creator(&self, state: State, creator: &str) -> usize {
        let inner = self.inner.lock().expect("counter lock poisoned");
        inner
            .by_creator
            .get(&(state, creator.to_owned()))
            .copied()
            .unwrap_or(0)
    }

    /// Per-state totals for all tracked, non-empty buckets.
    pub fn totals(&self) -> Vec<(State, usize)> {
        let inner = self.inner.lock().expect("counter lock poisoned");
        ALL_STATES
            .iter()
            .filter(|s| tracked(**s))
            .map(|s| (*s, inner.totals.get(s).copied().unwrap_or(0)))
            .collect()
    }
}

impl Default for StateCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn increment(&mut self, state: State, creator: &str) {
        *self.totals.entry(state).or_insert(0) += 1;
        *self
            .by_creator
            .entry((state, creator.to_owned()))
            .or_insert(0) += 1;
    }

    fn decrement(&mut self, state: State, creator: &str) {
        match self.totals.get_mut(&state) {
            Some(v) if *v > 0 => *v -= 1,
            _ => {
                tracing::error!(state = %state, creator, "Occupancy total underflow");
                return;
            }
        }
        let key = (state, creator.to_owned());
        match self.by_creator.get_mut(&key) {
            Some(v) if *v > 1 => *v -= 1,
            Some(_) => {
                self.by_creator.remove(&key);
            }
            None => {
                tracing::error!(state = %state, creator, "Occupancy bucket underflow");
            }
        }
    }
}
