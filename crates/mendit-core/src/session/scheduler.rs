//! Delayed, cancellable tasks tied to one live session.
//!
//! Every task runs under a child of the scheduler's root `CancellationToken`.
//! Cancelling the root (explicitly, on resolve, or when the scheduler is
//! dropped) stops every pending task before it touches session state.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use tokio_util::sync::CancellationToken;

/// Registry entry: generation number plus the task's token.
type Entry = (u64, CancellationToken);

/// Spawns delayed tasks on the current tokio runtime.
#[derive(Debug)]
pub struct SessionScheduler {
    root: CancellationToken,
    tasks: Arc<DashMap<String, Entry>>,
    next_id: AtomicU64,
}

impl Default for SessionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionScheduler {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
            tasks: Arc::new(DashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Run `task` after `delay` unless cancelled first.
    ///
    /// Returns the generated task key.
    pub fn schedule<F>(&self, delay: Duration, task: F) -> String
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let key = format!("task-{id}");
        self.spawn(key.clone(), id, delay, task);
        key
    }

    /// Run `task` after `delay`, replacing any pending task with the same key.
    pub fn schedule_keyed<F>(&self, key: impl Into<String>, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.spawn(key.into(), id, delay, task);
    }

    fn spawn<F>(&self, key: String, id: u64, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.root.is_cancelled() {
            tracing::debug!(key = %key, "scheduler cancelled, task dropped");
            return;
        }

        let token = self.root.child_token();
        if let Some((_, (_, previous))) = self.tasks.remove(&key) {
            previous.cancel();
        }
        self.tasks.insert(key.clone(), (id, token.clone()));

        let tasks = Arc::clone(&self.tasks);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!(key = %key, "scheduled task cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    tasks.remove_if(&key, |_, (generation, _)| *generation == id);
                    if !token.is_cancelled() {
                        task.await;
                    }
                }
            }
        });
    }

    /// Cancel one pending task. Returns whether it was still pending.
    pub fn cancel(&self, key: &str) -> bool {
        match self.tasks.remove(key) {
            Some((_, (_, token))) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancel every pending task and refuse new ones.
    pub fn cancel_all(&self) {
        self.root.cancel();
        self.tasks.clear();
    }

    pub fn is_cancelled(&self) -> bool {
        self.root.is_cancelled()
    }

    /// Number of tasks still waiting for their delay.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.tasks.contains_key(key)
    }
}

impl Drop for SessionScheduler {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
