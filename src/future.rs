//! Settle-once futures with callback chaining.
//!
//! A [`Future<T, E>`] starts pending and settles exactly once: fulfilled with a `T` or
//! rejected with an `E`. Continuations registered with [`Future::then`] and friends
//! never run inline. They are handed to the future's [`Scheduler`] and run on a later
//! turn, in registration order.
//!
//! Settling a future with another future (see [`Awaited`]) makes the first adopt the
//! eventual outcome of the second. Settling a future with itself rejects it with a
//! [`ChainingCycle`].
//!
//! # Examples
//!
//! ```rust
//! use settle::prelude::*;
//!
//! let queue = TaskQueue::new();
//! let (future, resolver) = Future::<i32, Error>::deferred(&queue.scheduler());
//!
//! let doubled = future.map(|x| x * 2);
//! resolver.resolve(21);
//! assert!(doubled.is_pending());
//!
//! queue.run_until_idle();
//! assert_eq!(doubled.outcome(), Some(Ok(42)));
//! ```

use std::{cell::RefCell, fmt, mem, rc::Rc};

use crate::{
    error::{ChainingCycle, Reason},
    schedule::Scheduler,
};

/// A plain value or a future producing one.
///
/// Handlers return this to settle the future they feed, and coroutines suspend on it.
pub enum Awaited<T, E> {
    Value(T),
    Future(Future<T, E>),
}

impl<T, E> Awaited<T, E>
where
    T: Clone + 'static,
    E: Reason,
{
    /// Coerce into a future, wrapping a plain value as already fulfilled.
    pub fn into_future(self, scheduler: &Scheduler) -> Future<T, E> {
        match self {
            Awaited::Value(value) => Future::resolved(scheduler, value),
            Awaited::Future(future) => future,
        }
    }
}

impl<T, E> From<Future<T, E>> for Awaited<T, E> {
    fn from(future: Future<T, E>) -> Self {
        Awaited::Future(future)
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Awaited<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Awaited::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Awaited::Future(future) => f.debug_tuple("Future").field(future).finish(),
        }
    }
}

// Futures compare by identity, since two handles may later settle differently.
impl<T: PartialEq, E> PartialEq for Awaited<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Awaited::Value(a), Awaited::Value(b)) => a == b,
            (Awaited::Future(a), Awaited::Future(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// What a handler hands back to the future it settles.
pub type Settlement<T, E> = Result<Awaited<T, E>, E>;

/// Observable lifecycle of a [`Future`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FutureState {
    Pending,
    Fulfilled,
    Rejected,
}

enum Slot<T, E> {
    Pending,
    Fulfilled(T),
    Rejected(E),
}

type OnFulfilled<T> = Box<dyn FnOnce(T)>;
type OnRejected<E> = Box<dyn FnOnce(E)>;

struct Inner<T, E> {
    slot: Slot<T, E>,
    // Set once the future starts adopting another; later settle calls are ignored.
    adopting: bool,
    on_fulfilled: Vec<OnFulfilled<T>>,
    on_rejected: Vec<OnRejected<E>>,
}

/// A value that becomes available at most once.
///
/// Cloning produces another handle to the same future.
pub struct Future<T, E> {
    inner: Rc<RefCell<Inner<T, E>>>,
    scheduler: Scheduler,
}

impl<T, E> Clone for Future<T, E> {
    fn clone(&self) -> Self {
        Future {
            inner: Rc::clone(&self.inner),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Future<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Future")
            .field("id", &self.id())
            .field("state", &self.state())
            .finish()
    }
}

impl<T, E> Future<T, E> {
    pub fn state(&self) -> FutureState {
        match self.inner.borrow().slot {
            Slot::Pending => FutureState::Pending,
            Slot::Fulfilled(_) => FutureState::Fulfilled,
            Slot::Rejected(_) => FutureState::Rejected,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state() == FutureState::Pending
    }

    pub fn is_fulfilled(&self) -> bool {
        self.state() == FutureState::Fulfilled
    }

    pub fn is_rejected(&self) -> bool {
        self.state() == FutureState::Rejected
    }

    /// Returns `true` if both handles refer to the same future.
    pub fn ptr_eq(&self, other: &Future<T, E>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    fn id(&self) -> *const () {
        Rc::as_ptr(&self.inner).cast()
    }
}

impl<T, E> Future<T, E>
where
    T: Clone + 'static,
    E: Reason,
{
    /// Create a future and run `initializer` synchronously with its [`Resolver`].
    ///
    /// An `Err` returned by the initializer rejects the future, unless the
    /// initializer already settled it.
    ///
    /// ```rust
    /// use settle::prelude::*;
    ///
    /// let queue = TaskQueue::new();
    /// let future = Future::<i32, Error>::new(&queue.scheduler(), |resolver| {
    ///     resolver.reject(Error::message("first"));
    ///     Err(Error::message("ignored"))
    /// });
    /// assert_eq!(future.outcome(), Some(Err(Error::message("first"))));
    /// ```
    pub fn new<F>(scheduler: &Scheduler, initializer: F) -> Self
    where
        F: FnOnce(Resolver<T, E>) -> Result<(), E>,
    {
        let future = Self::pending(scheduler);
        if let Err(reason) = initializer(Resolver {
            future: future.clone(),
        }) {
            tracing::trace!(future = ?future.id(), "initializer failed");
            future.reject(reason);
        }
        future
    }

    /// A pending future together with the resolver that settles it.
    pub fn deferred(scheduler: &Scheduler) -> (Self, Resolver<T, E>) {
        let future = Self::pending(scheduler);
        let resolver = Resolver {
            future: future.clone(),
        };
        (future, resolver)
    }

    pub fn resolved(scheduler: &Scheduler, value: T) -> Self {
        let future = Self::pending(scheduler);
        future.fulfill(value);
        future
    }

    pub fn rejected(scheduler: &Scheduler, reason: E) -> Self {
        let future = Self::pending(scheduler);
        future.fail(reason);
        future
    }

    fn pending(scheduler: &Scheduler) -> Self {
        Future {
            inner: Rc::new(RefCell::new(Inner {
                slot: Slot::Pending,
                adopting: false,
                on_fulfilled: Vec::new(),
                on_rejected: Vec::new(),
            })),
            scheduler: scheduler.clone(),
        }
    }

    /// A copy of the settled value or reason, or `None` while pending.
    pub fn outcome(&self) -> Option<Result<T, E>> {
        match &self.inner.borrow().slot {
            Slot::Pending => None,
            Slot::Fulfilled(value) => Some(Ok(value.clone())),
            Slot::Rejected(reason) => Some(Err(reason.clone())),
        }
    }

    /// Register handlers for both outcomes; the returned future receives whichever
    /// handler's result.
    ///
    /// A handler returning `Err` rejects the returned future. Returning
    /// [`Awaited::Future`] makes the returned future adopt that future.
    ///
    /// ```rust
    /// use settle::prelude::*;
    ///
    /// let queue = TaskQueue::new();
    /// let failed = Future::<i32, Error>::rejected(&queue.scheduler(), "bad input".into());
    ///
    /// let recovered = failed.then(
    ///     |value| Ok(Awaited::Value(value.to_string())),
    ///     |reason| Ok(Awaited::Value(format!("recovered from {reason}"))),
    /// );
    ///
    /// queue.run_until_idle();
    /// assert_eq!(recovered.outcome(), Some(Ok("recovered from bad input".to_string())));
    /// ```
    pub fn then<U, F, R>(&self, on_fulfilled: F, on_rejected: R) -> Future<U, E>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> Settlement<U, E> + 'static,
        R: FnOnce(E) -> Settlement<U, E> + 'static,
    {
        let next = Future::pending(&self.scheduler);
        let (ok, err) = (next.clone(), next.clone());
        self.register(
            Box::new(move |value| ok.settle_with(on_fulfilled(value))),
            Box::new(move |reason| err.settle_with(on_rejected(reason))),
        );
        next
    }

    /// Register a fulfillment handler only. A rejection passes through unchanged.
    pub fn and_then<U, F>(&self, on_fulfilled: F) -> Future<U, E>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> Settlement<U, E> + 'static,
    {
        let next = Future::pending(&self.scheduler);
        let (ok, err) = (next.clone(), next.clone());
        self.register(
            Box::new(move |value| ok.settle_with(on_fulfilled(value))),
            Box::new(move |reason| err.reject(reason)),
        );
        next
    }

    /// Register a rejection handler only. A value passes through unchanged.
    pub fn or_else<R>(&self, on_rejected: R) -> Future<T, E>
    where
        R: FnOnce(E) -> Settlement<T, E> + 'static,
    {
        let next = Future::pending(&self.scheduler);
        let (ok, err) = (next.clone(), next.clone());
        self.register(
            Box::new(move |value| ok.resolve(Awaited::Value(value))),
            Box::new(move |reason| err.settle_with(on_rejected(reason))),
        );
        next
    }

    pub fn map<U, F>(&self, f: F) -> Future<U, E>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> U + 'static,
    {
        self.and_then(move |value| Ok(Awaited::Value(f(value))))
    }

    /// A new future that adopts this one's outcome.
    pub fn fork(&self) -> Future<T, E> {
        let next = Future::pending(&self.scheduler);
        next.resolve(Awaited::Future(self.clone()));
        next
    }

    /// Low-level registration used by the driver: no downstream future is created.
    pub(crate) fn subscribe<F, R>(&self, on_fulfilled: F, on_rejected: R)
    where
        F: FnOnce(T) + 'static,
        R: FnOnce(E) + 'static,
    {
        self.register(Box::new(on_fulfilled), Box::new(on_rejected));
    }

    fn register(&self, on_fulfilled: OnFulfilled<T>, on_rejected: OnRejected<E>) {
        let settled = self.outcome();
        match settled {
            None => {
                let mut inner = self.inner.borrow_mut();
                inner.on_fulfilled.push(on_fulfilled);
                inner.on_rejected.push(on_rejected);
            }
            Some(Ok(value)) => self.scheduler.schedule(move || on_fulfilled(value)),
            Some(Err(reason)) => self.scheduler.schedule(move || on_rejected(reason)),
        }
    }

    fn settle_with(&self, settlement: Settlement<T, E>) {
        match settlement {
            Ok(awaited) => self.resolve(awaited),
            Err(reason) => self.reject(reason),
        }
    }

    /// Settle-success. Ignored once settled or adopting.
    fn resolve(&self, awaited: Awaited<T, E>) {
        if self.is_locked() {
            return;
        }
        match awaited {
            Awaited::Value(value) => self.fulfill(value),
            Awaited::Future(other) if other.ptr_eq(self) => {
                tracing::trace!(future = ?self.id(), "chaining cycle");
                self.fail(E::from(ChainingCycle));
            }
            Awaited::Future(other) => {
                tracing::trace!(future = ?self.id(), adopted = ?other.id(), "adopting");
                self.inner.borrow_mut().adopting = true;
                let (ok, err) = (self.clone(), self.clone());
                other.subscribe(move |value| ok.fulfill(value), move |reason| err.fail(reason));
            }
        }
    }

    /// Settle-failure. Ignored once settled or adopting.
    fn reject(&self, reason: E) {
        if self.is_locked() {
            return;
        }
        self.fail(reason);
    }

    fn is_locked(&self) -> bool {
        let inner = self.inner.borrow();
        inner.adopting || !matches!(inner.slot, Slot::Pending)
    }

    fn fulfill(&self, value: T) {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            if !matches!(inner.slot, Slot::Pending) {
                return;
            }
            inner.slot = Slot::Fulfilled(value.clone());
            inner.on_rejected.clear();
            mem::take(&mut inner.on_fulfilled)
        };
        tracing::trace!(future = ?self.id(), callbacks = callbacks.len(), "fulfilled");
        for callback in callbacks {
            let value = value.clone();
            self.scheduler.schedule(move || callback(value));
        }
    }

    fn fail(&self, reason: E) {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            if !matches!(inner.slot, Slot::Pending) {
                return;
            }
            inner.slot = Slot::Rejected(reason.clone());
            inner.on_fulfilled.clear();
            mem::take(&mut inner.on_rejected)
        };
        tracing::trace!(future = ?self.id(), callbacks = callbacks.len(), "rejected");
        for callback in callbacks {
            let reason = reason.clone();
            self.scheduler.schedule(move || callback(reason));
        }
    }
}

/// The settle-success / settle-failure pair of a [`Future`].
///
/// The first settle call wins; later ones are ignored.
pub struct Resolver<T, E> {
    future: Future<T, E>,
}

impl<T, E> Clone for Resolver<T, E> {
    fn clone(&self) -> Self {
        Resolver {
            future: self.future.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Resolver<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("future", &self.future)
            .finish()
    }
}

impl<T, E> Resolver<T, E>
where
    T: Clone + 'static,
    E: Reason,
{
    pub fn resolve(&self, value: T) {
        self.future.resolve(Awaited::Value(value));
    }

    /// Settle with the eventual outcome of `other`.
    pub fn resolve_with(&self, other: Future<T, E>) {
        self.future.resolve(Awaited::Future(other));
    }

    pub fn settle(&self, awaited: Awaited<T, E>) {
        self.future.resolve(awaited);
    }

    pub fn reject(&self, reason: E) {
        self.future.reject(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, schedule::TaskQueue};
    use std::cell::Cell;

    fn setup() -> (TaskQueue, Scheduler) {
        let queue = TaskQueue::new();
        let scheduler = queue.scheduler();
        (queue, scheduler)
    }

    #[test]
    fn test_settles_only_once() {
        let (queue, scheduler) = setup();
        let (future, resolver) = Future::<i32, Error>::deferred(&scheduler);

        resolver.resolve(1);
        resolver.resolve(2);
        resolver.reject(Error::message("late"));
        queue.run_until_idle();

        assert_eq!(future.state(), FutureState::Fulfilled);
        assert_eq!(future.outcome(), Some(Ok(1)));

        let (future, resolver) = Future::<i32, Error>::deferred(&scheduler);
        resolver.reject(Error::message("first"));
        resolver.resolve(3);
        resolver.reject(Error::message("second"));

        assert!(future.is_rejected());
        assert_eq!(future.outcome(), Some(Err(Error::message("first"))));
    }

    #[test]
    fn test_initializer_failure_rejects() {
        let (_queue, scheduler) = setup();
        let future = Future::<i32, Error>::new(&scheduler, |_| Err("init failed".into()));
        assert_eq!(future.outcome(), Some(Err(Error::message("init failed"))));

        let future = Future::<i32, Error>::new(&scheduler, |resolver| {
            resolver.resolve(5);
            Err("ignored".into())
        });
        assert_eq!(future.outcome(), Some(Ok(5)));
    }

    #[test]
    fn test_handlers_on_settled_future_run_later() {
        let (queue, scheduler) = setup();
        let ran = Rc::new(Cell::new(false));

        let future = Future::<i32, Error>::resolved(&scheduler, 3);
        let flag = Rc::clone(&ran);
        let next = future.map(move |x| {
            flag.set(true);
            x + 1
        });

        assert!(!ran.get());
        assert!(next.is_pending());
        assert_eq!(queue.len(), 1);

        queue.run_until_idle();
        assert!(ran.get());
        assert_eq!(next.outcome(), Some(Ok(4)));
    }

    #[test]
    fn test_settlement_does_not_call_handlers_inline() {
        let (queue, scheduler) = setup();
        let ran = Rc::new(Cell::new(false));
        let (future, resolver) = Future::<i32, Error>::deferred(&scheduler);

        let flag = Rc::clone(&ran);
        let _next = future.map(move |_| flag.set(true));

        resolver.resolve(1);
        assert!(!ran.get());
        queue.run_until_idle();
        assert!(ran.get());
    }

    #[test]
    fn test_callbacks_fire_in_registration_order() {
        let (queue, scheduler) = setup();
        let (future, resolver) = Future::<i32, Error>::deferred(&scheduler);
        let log = Rc::new(RefCell::new(Vec::new()));

        for i in 1..=5 {
            let log = Rc::clone(&log);
            let _ = future.map(move |_| log.borrow_mut().push(i));
        }

        resolver.resolve(0);
        queue.run_until_idle();
        assert_eq!(&*log.borrow(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_late_registration_runs_after_already_scheduled_callbacks() {
        let (queue, scheduler) = setup();
        let (future, resolver) = Future::<i32, Error>::deferred(&scheduler);
        let log = Rc::new(RefCell::new(Vec::new()));

        {
            let log = Rc::clone(&log);
            let same = future.clone();
            let _ = future.map(move |_| {
                log.borrow_mut().push("first");
                let log = Rc::clone(&log);
                let _ = same.map(move |_| log.borrow_mut().push("late"));
            });
        }
        {
            let log = Rc::clone(&log);
            let _ = future.map(move |_| log.borrow_mut().push("second"));
        }

        resolver.resolve(0);
        queue.run_until_idle();
        assert_eq!(&*log.borrow(), &["first", "second", "late"]);
    }

    #[test]
    fn test_resolving_with_itself_is_a_cycle() {
        let (queue, scheduler) = setup();
        let (future, resolver) = Future::<i32, Error>::deferred(&scheduler);

        resolver.resolve_with(future.clone());
        queue.run_until_idle();

        assert_eq!(
            future.outcome(),
            Some(Err(Error::ChainingCycle(ChainingCycle)))
        );
    }

    #[test]
    fn test_handler_returning_own_future_is_a_cycle() {
        let (queue, scheduler) = setup();
        let own: Rc<RefCell<Option<Future<i32, Error>>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&own);
        let next = Future::<i32, Error>::resolved(&scheduler, 1).and_then(move |_| {
            let me = slot.borrow().clone().expect("output future stored before turn");
            Ok(Awaited::Future(me))
        });
        *own.borrow_mut() = Some(next.clone());
        queue.run_until_idle();

        assert_eq!(
            next.outcome(),
            Some(Err(Error::ChainingCycle(ChainingCycle)))
        );
    }

    #[test]
    fn test_adopts_outcome_of_another_future() {
        let (queue, scheduler) = setup();
        let (a, resolve_a) = Future::<i32, Error>::deferred(&scheduler);
        let (b, resolve_b) = Future::<i32, Error>::deferred(&scheduler);

        resolve_a.resolve_with(b.clone());
        queue.run_until_idle();
        assert!(a.is_pending());

        resolve_b.resolve(7);
        queue.run_until_idle();
        assert_eq!(a.outcome(), Some(Ok(7)));
    }

    #[test]
    fn test_adopts_through_nested_chains() {
        let (queue, scheduler) = setup();
        let (inner, resolve_inner) = Future::<&str, Error>::deferred(&scheduler);
        let middle = Future::new(&scheduler, |r| {
            r.resolve_with(inner.clone());
            Ok(())
        });
        let outer = Future::new(&scheduler, |r| {
            r.settle(Awaited::Future(middle.clone()));
            Ok(())
        });

        resolve_inner.reject(Error::message("deep"));
        queue.run_until_idle();

        assert_eq!(middle.outcome(), Some(Err(Error::message("deep"))));
        assert_eq!(outer.outcome(), Some(Err(Error::message("deep"))));
    }

    #[test]
    fn test_adopting_future_ignores_later_settles() {
        let (queue, scheduler) = setup();
        let (a, resolve_a) = Future::<i32, Error>::deferred(&scheduler);
        let (b, resolve_b) = Future::<i32, Error>::deferred(&scheduler);

        resolve_a.resolve_with(b);
        resolve_a.resolve(1);
        resolve_a.reject(Error::message("late"));
        assert!(a.is_pending());

        resolve_b.resolve(2);
        queue.run_until_idle();
        assert_eq!(a.outcome(), Some(Ok(2)));
    }

    #[test]
    fn test_handler_failure_rejects_returned_future() {
        let (queue, scheduler) = setup();
        let future = Future::<i32, Error>::resolved(&scheduler, 1);

        let next: Future<i32, Error> = future.and_then(|_| Err("handler failed".into()));
        queue.run_until_idle();

        assert_eq!(next.outcome(), Some(Err(Error::message("handler failed"))));
    }

    #[test]
    fn test_handler_returning_future_is_adopted() {
        let (queue, scheduler) = setup();
        let (later, resolve_later) = Future::<String, Error>::deferred(&scheduler);
        let future = Future::<i32, Error>::resolved(&scheduler, 1);

        let pending = later.clone();
        let next = future.and_then(move |_| Ok(Awaited::Future(pending)));
        queue.run_until_idle();
        assert!(next.is_pending());

        resolve_later.resolve("done".to_string());
        queue.run_until_idle();
        assert_eq!(next.outcome(), Some(Ok("done".to_string())));
    }

    #[test]
    fn test_rejection_handler_recovers_and_chain_continues() {
        let (queue, scheduler) = setup();
        let log = Rc::new(RefCell::new(Vec::new()));
        let rejected = Future::<String, Error>::new(&scheduler, |r| {
            r.reject(Error::message("initial message"));
            Err(Error::message("ignored as already rejected"))
        });

        let (l1, l2, l3) = (Rc::clone(&log), Rc::clone(&log), Rc::clone(&log));
        let end = rejected
            .then(
                move |_| {
                    l1.borrow_mut().push("should not run".to_string());
                    Ok(Awaited::Value(String::new()))
                },
                |reason| Ok(Awaited::Value(reason.to_string())),
            )
            .then(
                move |message| {
                    l2.borrow_mut().push(format!("got {message}"));
                    Err::<Awaited<String, Error>, _>(Error::message("final message"))
                },
                |_| Ok(Awaited::Value("should not run".to_string())),
            )
            .or_else(move |reason| {
                l3.borrow_mut().push(format!("got {reason}"));
                Ok(Awaited::Value("end".to_string()))
            });

        queue.run_until_idle();
        assert_eq!(
            &*log.borrow(),
            &["got initial message", "got final message"]
        );
        assert_eq!(end.outcome(), Some(Ok("end".to_string())));
    }

    #[test]
    fn test_skipped_branches_pass_through() {
        let (queue, scheduler) = setup();
        let ran = Rc::new(Cell::new(false));

        let flag = Rc::clone(&ran);
        let passed = Future::<i32, Error>::rejected(&scheduler, "nope".into())
            .map(move |x| {
                flag.set(true);
                x + 1
            })
            .map(|x| x * 10);

        let flag = Rc::clone(&ran);
        let value = Future::<i32, Error>::resolved(&scheduler, 4).or_else(move |_| {
            flag.set(true);
            Ok(Awaited::Value(0))
        });

        queue.run_until_idle();
        assert!(!ran.get());
        assert_eq!(passed.outcome(), Some(Err(Error::message("nope"))));
        assert_eq!(value.outcome(), Some(Ok(4)));
    }

    #[test]
    fn test_fork_adopts_outcome() {
        let (queue, scheduler) = setup();
        let (future, resolver) = Future::<i32, Error>::deferred(&scheduler);
        let forks = [future.fork(), future.fork()];

        resolver.reject(Error::message("shared"));
        queue.run_until_idle();

        for fork in &forks {
            assert!(!fork.ptr_eq(&future));
            assert_eq!(fork.outcome(), Some(Err(Error::message("shared"))));
        }
    }

    #[test]
    fn test_into_future_wraps_plain_values() {
        let (_queue, scheduler) = setup();
        let wrapped = Awaited::<i32, Error>::Value(9).into_future(&scheduler);
        assert_eq!(wrapped.outcome(), Some(Ok(9)));

        let original = Future::<i32, Error>::resolved(&scheduler, 1);
        let same = Awaited::from(original.clone()).into_future(&scheduler);
        assert!(same.ptr_eq(&original));
    }

    #[test]
    fn test_awaited_compares_futures_by_identity() {
        let (_queue, scheduler) = setup();
        let a = Future::<i32, Error>::resolved(&scheduler, 1);
        let b = Future::<i32, Error>::resolved(&scheduler, 1);

        assert_eq!(Awaited::Future(a.clone()), Awaited::Future(a.clone()));
        assert_ne!(Awaited::Future(a), Awaited::Future(b));
        assert_eq!(Awaited::<i32, Error>::Value(1), Awaited::Value(1));
    }
}
