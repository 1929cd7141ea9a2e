use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;
use uuid::Uuid;

use crate::scheduler::job::Job;

/// A bounded FIFO admission queue with a per-creator occupancy index.
///
/// Structural mutation is guarded by the queue's own lock; the lock is never
/// held across an await and queue code never takes a job's lock. Capacity is
/// adjustable on a live queue.
pub struct AdmissionQueue {
    name: &'static str,
    capacity: AtomicUsize,
    space: Notify,
    inner: Mutex<Inner>,
}

struct Inner {
    items: VecDeque<Arc<Job>>,
    by_creator: HashMap<String, usize>,
}

impl AdmissionQueue {
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity: AtomicUsize::new(capacity),
            space: Notify::new(),
            inner: Mutex::new(Inner {
                items: VecDeque::new(),
                by_creator: HashMap::new(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Non-blocking bounded enqueue. Returns false when the queue is full.
    pub fn try_offer(&self, job: Arc<Job>) -> bool {
        let mut inner = self.lock();
        if inner.items.len() >= self.capacity.load(Ordering::SeqCst) {
            return false;
        }
        inner.push(job);
        true
    }

    /// Bounded-blocking enqueue: waits up to `timeout` for capacity before
    /// giving up. Used by retry timers and event handlers, providing
    /// backpressure on event producers.
    pub async fn offer(&self, job: Arc<Job>, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            // Register for a wakeup before the capacity check so a slot freed
            // in between is not missed.
            let space = self.space.notified();
            if self.try_offer(job.clone()) {
                return true;
            }
            if tokio::time::timeout_at(deadline, space).await.is_err() {
                return false;
            }
        }
    }

    /// FIFO head without removal.
    pub fn peek(&self) -> Option<Arc<Job>> {
        self.lock().items.front().cloned()
    }

    /// Remove a job by id. Returns whether it was present.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut inner = self.lock();
        let Some(pos) = inner.items.iter().position(|j| j.id() == id) else {
            return false;
        };
        let job = inner.items.remove(pos).expect("position is in bounds");
        let creator = job.creator().to_owned();
        match inner.by_creator.get_mut(&creator) {
            Some(n) if *n > 1 => *n -= 1,
            _ => {
                inner.by_creator.remove(&creator);
            }
        }
        drop(inner);
        self.space.notify_waiters();
        true
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.load(Ordering::SeqCst)
    }

    pub fn set_capacity(&self, capacity: usize) {
        self.capacity.store(capacity, Ordering::SeqCst);
        self.space.notify_waiters();
    }

    pub fn queued_by_creator(&self, creator: &str) -> usize {
        self.lock().by_creator.get(creator).copied().unwrap_or(0)
    }

    /// Queue contents in FIFO order. Selection works on a snapshot so job
    /// locks are never taken under the queue lock.
    pub fn snapshot(&self) -> Vec<Arc<Job>> {
        self.lock().items.iter().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("queue lock poisoned")
    }
}

impl Inner {
    fn push(&mut self, job: Arc<Job>) {
        *self.by_creator.entry(job.creator().to_owned()).or_insert(0) += 1;
        self.items.push_back(job);
    }
}
