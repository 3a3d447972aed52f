//! Deferred execution.
//!
//! Futures never run continuations inline. Instead they hand a [`Task`] to the host
//! through the [`Schedule`] trait, which must run it later and in FIFO order.
//! [`TaskQueue`] is a minimal single-threaded host suitable for tests and embedding
//! in an event loop.

use std::{
    cell::RefCell,
    collections::VecDeque,
    fmt,
    rc::{Rc, Weak},
};

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// The "run this later" capability a host provides.
///
/// `schedule` must return before `task` runs, and tasks must run in the order they
/// were scheduled.
pub trait Schedule {
    fn schedule(&self, task: Task);
}

/// Shared handle to a host [`Schedule`].
///
/// Every future carries one and hands it to the futures it creates.
#[derive(Clone)]
pub struct Scheduler {
    host: Rc<dyn Schedule>,
}

impl Scheduler {
    pub fn new<S: Schedule + 'static>(host: S) -> Self {
        Scheduler {
            host: Rc::new(host),
        }
    }

    /// Enqueue `f` to run on a later turn.
    pub fn schedule<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.host.schedule(Box::new(f));
    }

    pub fn ptr_eq(&self, other: &Scheduler) -> bool {
        Rc::ptr_eq(&self.host, &other.host)
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler").finish_non_exhaustive()
    }
}

/// FIFO task queue driven by the caller.
///
/// Cloning yields another handle to the same queue. Its schedulers only hold a weak
/// reference, so dropping the last queue handle frees any tasks still queued, along
/// with the futures they capture. Tasks scheduled after that are discarded.
///
/// ```rust
/// use std::{cell::Cell, rc::Rc};
/// use settle::TaskQueue;
///
/// let queue = TaskQueue::new();
/// let scheduler = queue.scheduler();
/// let hits = Rc::new(Cell::new(0));
///
/// let h = Rc::clone(&hits);
/// scheduler.schedule(move || h.set(h.get() + 1));
/// assert_eq!(hits.get(), 0);
///
/// assert_eq!(queue.run_until_idle(), 1);
/// assert_eq!(hits.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TaskQueue {
            tasks: Rc::new(RefCell::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// A [`Scheduler`] that enqueues onto this queue.
    pub fn scheduler(&self) -> Scheduler {
        Scheduler::new(QueueHandle {
            tasks: Rc::downgrade(&self.tasks),
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Run the oldest task. Returns `false` if the queue was empty.
    pub fn run_next(&self) -> bool {
        // The borrow must end before the task runs; tasks schedule more tasks.
        let task = self.tasks.borrow_mut().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run at most `limit` tasks, including ones scheduled along the way.
    ///
    /// Returns the number of tasks run.
    pub fn run_turns(&self, limit: usize) -> usize {
        let mut ran = 0;
        while ran < limit && self.run_next() {
            ran += 1;
        }
        ran
    }

    /// Run tasks until the queue is empty. Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        tracing::trace!(ran, "task queue idle");
        ran
    }
}

impl Schedule for TaskQueue {
    fn schedule(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
    }
}

// Tasks capture futures, which capture schedulers; a strong reference back to the
// queue would be a cycle.
struct QueueHandle {
    tasks: Weak<RefCell<VecDeque<Task>>>,
}

impl Schedule for QueueHandle {
    fn schedule(&self, task: Task) {
        match self.tasks.upgrade() {
            Some(tasks) => tasks.borrow_mut().push_back(task),
            None => tracing::trace!("task queue dropped, discarding task"),
        }
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.len())
            .finish()
    }
}
