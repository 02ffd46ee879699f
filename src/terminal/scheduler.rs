use gloo_timers::callback::Timeout;

/// Source of delayed callbacks. The terminal never touches timers directly,
/// it is handed one of these by whoever owns its lifecycle.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Cancels its timer when dropped.
#[must_use = "dropping a TimerHandle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, task);
        // Dropping the gloo Timeout clears it.
        TimerHandle::new(move || drop(timeout))
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::{Scheduler, TimerHandle};
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Inner {
        now: u64,
        next_id: u64,
        queue: BTreeMap<(u64, u64), Task>,
    }

    /// Virtual clock. Nothing runs until `advance` is called.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.inner.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.inner.borrow().queue.len()
        }

        /// Moves the clock forward, running every task that falls due in
        /// order. Tasks scheduled while advancing run too if they are due
        /// before the target time.
        pub fn advance(&self, ms: u64) {
            let target = self.inner.borrow().now + ms;
            loop {
                let next = {
                    let mut inner = self.inner.borrow_mut();
                    let due = match inner.queue.keys().next() {
                        Some(&(due, id)) if due <= target => (due, id),
                        _ => break,
                    };
                    inner.now = due.0;
                    inner.queue.remove(&due)
                };
                if let Some(task) = next {
                    task();
                }
            }
            self.inner.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
            let key = {
                let mut inner = self.inner.borrow_mut();
                let id = inner.next_id;
                inner.next_id += 1;
                let key = (inner.now + u64::from(delay_ms), id);
                inner.queue.insert(key, task);
                key
            };
            let weak = Rc::downgrade(&self.inner);
            TimerHandle::new(move || {
                if let Some(inner) = weak.upgrade() {
                    // Take the task out before dropping it so its own drop
                    // glue never runs under the borrow.
                    let removed = inner.borrow_mut().queue.remove(&key);
                    drop(removed);
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn manual_scheduler_runs_tasks_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut handles = Vec::new();
        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = log.clone();
            handles.push(scheduler.schedule(delay, Box::new(move || log.borrow_mut().push(label))));
        }

        scheduler.advance(15);
        assert_eq!(*log.borrow(), vec!["a"]);
        scheduler.advance(100);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now(), 115);
    }

    #[test]
    fn dropping_handle_cancels_task() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let handle = {
            let fired = fired.clone();
            scheduler.schedule(10, Box::new(move || *fired.borrow_mut() = true))
        };
        assert_eq!(scheduler.pending(), 1);

        drop(handle);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(50);
        assert!(!*fired.borrow());
    }

    #[test]
    fn tasks_scheduled_while_advancing_fire_when_due() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));

        let first = {
            let scheduler = scheduler.clone();
            let hits = hits.clone();
            let slot = slot.clone();
            scheduler.clone().schedule(
                10,
                Box::new(move || {
                    hits.borrow_mut().push(scheduler.now());
                    let hits = hits.clone();
                    let inner = scheduler.clone();
                    *slot.borrow_mut() = Some(scheduler.schedule(
                        10,
                        Box::new(move || hits.borrow_mut().push(inner.now())),
                    ));
                }),
            )
        };

        scheduler.advance(25);
        assert_eq!(*hits.borrow(), vec![10, 20]);
        drop(first);
    }
}
