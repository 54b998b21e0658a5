//! Deferred callbacks.
//!
//! The page has a handful of timers: the simulated submit latency, toast
//! auto-dismiss and exit, and the staggered scroll reveal. The core never
//! starts a timer itself. The shell injects a [`Scheduler`]; the desktop
//! app backs it with the async runtime and tests use [`ManualScheduler`].

use std::cell::RefCell;
use std::time::Duration;

/// A one-shot callback run by a [`Scheduler`]
pub type Task = Box<dyn FnOnce() + 'static>;

/// Capability to run a callback after a delay.
///
/// Callbacks run on the UI thread and are never cancelled.
pub trait Scheduler {
    fn schedule_after(&self, delay: Duration, task: Task);
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Deterministic scheduler with a clock that only moves when told to.
///
/// Tasks are not `Send`, so the scheduler lives on one thread; share it
/// with `Rc`.
///
/// Tasks due at the same instant run in the order they were scheduled.
/// A task may schedule further tasks; those run in the same
/// [`advance`](Self::advance) call if they fall due before its end.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Queue>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Move the clock forward, running every task that falls due.
    ///
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;

        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }

        self.queue.borrow_mut().now = target;
        ran
    }

    /// Run everything queued, including tasks scheduled along the way.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next_due = {
                let queue = self.queue.borrow();
                queue.pending.iter().map(|p| p.due).min()
            };
            let Some(due) = next_due else {
                return ran;
            };
            let now = self.now();
            ran += self.advance(due.saturating_sub(now));
        }
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let pending = queue.pending.swap_remove(index);
        queue.now = pending.due;
        Some(pending.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&self, delay: Duration, task: Task) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + delay;
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.pending.push(Pending { due, seq, task });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn runs_only_due_tasks() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = log.clone();
        scheduler.schedule_after(Duration::from_millis(100), Box::new(move || l.borrow_mut().push("a")));
        let l = log.clone();
        scheduler.schedule_after(Duration::from_millis(300), Box::new(move || l.borrow_mut().push("b")));

        assert_eq!(scheduler.advance(Duration::from_millis(150)), 1);
        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(150));

        assert_eq!(scheduler.advance(Duration::from_millis(150)), 1);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn same_instant_runs_in_schedule_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for i in 0..5 {
            let l = log.clone();
            scheduler.schedule_after(Duration::from_millis(10), Box::new(move || l.borrow_mut().push(i)));
        }
        scheduler.advance(Duration::from_millis(10));
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn nested_tasks_use_virtual_time_of_parent() {
        let scheduler = Rc::new(ManualScheduler::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let s = scheduler.clone();
        let l = log.clone();
        scheduler.schedule_after(
            Duration::from_millis(100),
            Box::new(move || {
                l.borrow_mut().push(s.now());
                let inner = l.clone();
                let s2 = s.clone();
                s.schedule_after(
                    Duration::from_millis(50),
                    Box::new(move || inner.borrow_mut().push(s2.now())),
                );
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(200)), 2);
        assert_eq!(
            *log.borrow(),
            vec![Duration::from_millis(100), Duration::from_millis(150)]
        );
    }

    #[test]
    fn run_until_idle_drains_queue() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule_after(Duration::from_secs(5), Box::new(|| {}));
        scheduler.schedule_after(Duration::from_secs(2), Box::new(|| {}));
        assert_eq!(scheduler.run_until_idle(), 2);
        assert_eq!(scheduler.now(), Duration::from_secs(5));
        assert_eq!(scheduler.pending(), 0);
    }
}
