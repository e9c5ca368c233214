use std::{collections::HashMap, time::Duration};

use parking_lot::Mutex;
use tokio::{runtime::Handle, task::JoinHandle};

/// Fire-once timers keyed by a named slot. Scheduling into an occupied slot aborts the
/// previous task, so each slot has at most one pending timer. Everything still pending
/// is aborted when the scheduler is dropped.
#[derive(Default)]
pub struct TaskScheduler {
    tasks: Mutex<HashMap<&'static str, JoinHandle<()>>>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `task` once after `delay`. Outside a tokio runtime there is nothing to wait
    /// on, so the task runs immediately.
    pub fn schedule<F>(&self, slot: &'static str, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(runtime) = Handle::try_current() else {
            tracing::debug!(slot, "No runtime available, running scheduled task inline");
            self.cancel(slot);
            task();
            return;
        };

        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });

        if let Some(previous) = self.tasks.lock().insert(slot, handle) {
            previous.abort();
        }
    }

    pub fn cancel(&self, slot: &'static str) -> bool {
        match self.tasks.lock().remove(slot) {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn cancel_all(&self) {
        let mut tasks = self.tasks.lock();
        for (_, handle) in tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_pending(&self, slot: &'static str) -> bool {
        self.tasks
            .lock()
            .get(slot)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn pending_count(&self) -> usize {
        self.tasks
            .lock()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl Drop for TaskScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.get_mut().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        let make = move || {
            let count = handle.clone();
            Box::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            }) as Box<dyn FnOnce() + Send>
        };
        (count, make)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let scheduler = TaskScheduler::new();
        let (count, make) = counter();

        scheduler.schedule("lock", Duration::from_millis(400), make());
        tokio::time::sleep(Duration::from_millis(399)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!scheduler.is_pending("lock"));
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_a_slot_replaces_the_timer() {
        let scheduler = TaskScheduler::new();
        let (count, make) = counter();

        scheduler.schedule("dismiss", Duration::from_secs(3), make());
        scheduler.schedule("dismiss", Duration::from_secs(3), make());
        tokio::time::sleep(Duration::from_secs(4)).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_tasks() {
        let (count, make) = counter();
        {
            let scheduler = TaskScheduler::new();
            scheduler.schedule("a", Duration::from_secs(1), make());
            scheduler.schedule("b", Duration::from_secs(2), make());
            assert_eq!(scheduler.pending_count(), 2);
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn runs_inline_without_runtime() {
        let scheduler = TaskScheduler::new();
        let (count, make) = counter();
        scheduler.schedule("lock", Duration::from_millis(400), make());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
