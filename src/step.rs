use crate::future::{Awaited, Future, Settlement};

/// Outcome of resuming a coroutine once.
///
/// `Yielded` means the coroutine is parked at a suspension point and the
/// [driver](crate::driver) must wait for the carried value before resuming it again.
/// `Complete` ends the computation; nothing resumes a coroutine after it.
///
/// Coroutines driven by [`run`](crate::run) complete with a [`Settlement`], the same
/// shape a [`then`](crate::Future::then) handler returns: a plain value, a future to
/// adopt, or a raised reason.
///
/// # Examples
///
/// ```rust
/// use settle::prelude::*;
///
/// let parked: Resumed<i32, Error, u8> = Step::Yielded(Awaited::Value(1));
/// let done: Resumed<i32, Error, u8> = Step::returned(7);
///
/// assert!(parked.is_yielded());
/// assert_eq!(done.unwrap_complete(), Ok(Awaited::Value(7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Y, D> {
    /// Parked until `Y` is available
    Yielded(Y),
    /// The computation ended with `D`
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Transform what the computation ended with. A parked step passes through.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// The value the coroutine is parked on.
    ///
    /// # Panics
    ///
    /// Panics if the coroutine has already ended.
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("coroutine ended instead of suspending"),
        }
    }

    /// What the coroutine ended with.
    ///
    /// # Panics
    ///
    /// Panics if the coroutine is still parked.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("coroutine suspended instead of ending"),
            Step::Complete(d) => d,
        }
    }
}

impl<Y, R, E> Step<Y, Settlement<R, E>> {
    /// End the computation with `value`.
    #[inline]
    pub const fn returned(value: R) -> Self {
        Step::Complete(Ok(Awaited::Value(value)))
    }

    /// End the computation with whatever `future` settles to.
    ///
    /// The driven result adopts `future` instead of holding it as a value.
    #[inline]
    pub fn adopt(future: Future<R, E>) -> Self {
        Step::Complete(Ok(Awaited::Future(future)))
    }

    /// End the computation by raising `reason`.
    #[inline]
    pub const fn failed(reason: E) -> Self {
        Step::Complete(Err(reason))
    }

    /// ```rust
    /// use settle::prelude::*;
    ///
    /// let raised: Resumed<(), Error, ()> = Step::failed(Error::message("boom"));
    /// assert!(raised.is_failed());
    /// assert!(!Resumed::<(), Error, ()>::returned(()).is_failed());
    /// ```
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Step::Complete(Err(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coroutine::Resumed, error::Error, schedule::TaskQueue};

    #[test]
    fn test_parked_and_ended_steps() {
        let parked: Resumed<u8, Error, u8> = Step::Yielded(Awaited::Value(1));
        let ended: Resumed<u8, Error, u8> = Step::returned(2);

        assert!(parked.is_yielded());
        assert!(!parked.is_complete());
        assert!(ended.is_complete());
        assert!(!ended.is_failed());
    }

    #[test]
    fn test_map_complete_leaves_parked_step_alone() {
        let parked: Step<&str, u8> = Step::Yielded("waiting");
        let ended: Step<&str, u8> = Step::Complete(10);

        assert_eq!(parked.map_complete(|x| x * 2), Step::Yielded("waiting"));
        assert_eq!(ended.map_complete(|x| x * 2), Step::Complete(20));
    }

    #[test]
    fn test_adopt_completes_with_the_future_itself() {
        let queue = TaskQueue::new();
        let (future, _resolver) = Future::<u8, Error>::deferred(&queue.scheduler());
        let ended: Resumed<(), Error, u8> = Step::adopt(future.clone());

        match ended.unwrap_complete() {
            Ok(Awaited::Future(held)) => assert!(held.ptr_eq(&future)),
            other => panic!("expected a future to adopt, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_is_raised() {
        let raised: Resumed<(), Error, u8> = Step::failed(Error::message("nope"));
        assert!(raised.is_failed());
        assert_eq!(raised.unwrap_complete(), Err(Error::message("nope")));
    }

    #[test]
    #[should_panic(expected = "coroutine ended instead of suspending")]
    fn test_unwrap_yielded_panics_on_ended_step() {
        let ended: Step<i32, &str> = Step::Complete("done");
        ended.unwrap_yielded();
    }

    #[test]
    #[should_panic(expected = "coroutine suspended instead of ending")]
    fn test_unwrap_complete_panics_on_parked_step() {
        let parked: Step<i32, &str> = Step::Yielded(42);
        parked.unwrap_complete();
    }
}
