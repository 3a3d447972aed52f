//! Stepped computations.
//!
//! A [`Coroutine<I, E>`] is an explicit state machine that the
//! [driver](crate::driver) resumes with a [`Resume`] token. Each resumption returns a
//! [`Step`]: `Yielded` suspends on an [`Awaited`] value, `Complete(Ok(_))` returns
//! a value or a future to adopt, and `Complete(Err(_))` raises.
//!
//! # Examples
//!
//! ```rust
//! use settle::prelude::*;
//!
//! let mut stage = from_fn(|resume: Resume<i32, Error>| match resume {
//!     Resume::Start => Step::Yielded(Awaited::Value(1)),
//!     Resume::Next(x) => Step::returned(x + 1),
//!     Resume::Throw(e) => Step::failed(e),
//! });
//!
//! assert!(stage.resume(Resume::Start).is_yielded());
//! assert_eq!(stage.resume(Resume::Next(4)).unwrap_complete(), Ok(Awaited::Value(5)));
//! ```

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::{
    error::Reason,
    future::{Awaited, Settlement},
    step::Step,
};

/// Token a coroutine is resumed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resume<I, E> {
    /// First resumption; there is no input yet.
    Start,
    /// The awaited value fulfilled with this.
    Next(I),
    /// The awaited value was rejected. Handle it, or raise it by completing with `Err`.
    Throw(E),
}

impl<I, E> Resume<I, E> {
    /// Fold the token into a `Result`, treating `Start` as `Ok(None)`.
    ///
    /// Useful for the common shape "propagate any injected failure with `?`".
    pub fn into_result(self) -> Result<Option<I>, E> {
        match self {
            Resume::Start => Ok(None),
            Resume::Next(value) => Ok(Some(value)),
            Resume::Throw(reason) => Err(reason),
        }
    }
}

/// What one resumption of a coroutine produces.
///
/// A coroutine ends the way a [`then`](crate::Future::then) handler does, so
/// returning [`Awaited::Future`] makes the driven result adopt that future.
pub type Resumed<I, E, R> = Step<Awaited<I, E>, Settlement<R, E>>;

/// A suspendable computation driven by resume tokens.
pub trait Coroutine<I, E> {
    /// Value the computation returns on success.
    type Return;

    /// Resume at the current suspension point.
    fn resume(&mut self, token: Resume<I, E>) -> Resumed<I, E, Self::Return>;

    /// Transform the successful return value.
    fn map_return<R2, F>(self, f: F) -> MapReturn<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Return) -> R2,
    {
        map_return(self, f)
    }

    fn boxed(self) -> Box<dyn Coroutine<I, E, Return = Self::Return>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

pub struct FromFn<F>(F);

impl<I, E, R, F> Coroutine<I, E> for FromFn<F>
where
    F: FnMut(Resume<I, E>) -> Resumed<I, E, R>,
{
    type Return = R;

    fn resume(&mut self, token: Resume<I, E>) -> Resumed<I, E, R> {
        (self.0)(token)
    }
}

/// Create a coroutine from a closure that is called once per resumption.
///
/// The closure carries its own state between calls:
///
/// ```rust
/// use settle::prelude::*;
///
/// let mut total = 0;
/// let mut summer = from_fn(move |resume: Resume<i32, Error>| {
///     match resume.into_result() {
///         Err(e) => return Step::failed(e),
///         Ok(input) => total += input.unwrap_or(0),
///     }
///     if total < 10 { Step::Yielded(Awaited::Value(total)) } else { Step::returned(total) }
/// });
///
/// assert!(summer.resume(Resume::Start).is_yielded());
/// assert!(summer.resume(Resume::Next(6)).is_yielded());
/// assert_eq!(summer.resume(Resume::Next(6)).unwrap_complete(), Ok(Awaited::Value(12)));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// Transforms the return value of the wrapped coroutine.
///
/// A returned future is mapped when it fulfills, so `f` is shared with that
/// future's callback.
pub struct MapReturn<C, F> {
    coroutine: C,
    f: Rc<RefCell<F>>,
}

pub fn map_return<C, F>(coroutine: C, f: F) -> MapReturn<C, F> {
    MapReturn {
        coroutine,
        f: Rc::new(RefCell::new(f)),
    }
}

impl<I, E, C, F, R2> Coroutine<I, E> for MapReturn<C, F>
where
    C: Coroutine<I, E>,
    C::Return: Clone + 'static,
    E: Reason,
    F: FnMut(C::Return) -> R2 + 'static,
    R2: Clone + 'static,
{
    type Return = R2;

    fn resume(&mut self, token: Resume<I, E>) -> Resumed<I, E, R2> {
        let f = &self.f;
        self.coroutine.resume(token).map_complete(|done| {
            done.map(|returned| match returned {
                Awaited::Value(value) => Awaited::Value((&mut *f.borrow_mut())(value)),
                Awaited::Future(future) => {
                    let f = Rc::clone(f);
                    Awaited::Future(future.map(move |value| (&mut *f.borrow_mut())(value)))
                }
            })
        })
    }
}

impl<I, E, C> Coroutine<I, E> for Box<C>
where
    C: Coroutine<I, E> + ?Sized,
{
    type Return = C::Return;

    fn resume(&mut self, token: Resume<I, E>) -> Resumed<I, E, C::Return> {
        (**self).resume(token)
    }
}

impl<I, E, C> Coroutine<I, E> for &'_ mut C
where
    C: Coroutine<I, E> + ?Sized,
{
    type Return = C::Return;

    fn resume(&mut self, token: Resume<I, E>) -> Resumed<I, E, C::Return> {
        (**self).resume(token)
    }
}

impl<I, E, C> Coroutine<I, E> for Rc<RefCell<C>>
where
    C: Coroutine<I, E>,
{
    type Return = C::Return;

    fn resume(&mut self, token: Resume<I, E>) -> Resumed<I, E, C::Return> {
        self.borrow_mut().resume(token)
    }
}

impl<I, E, L, R> Coroutine<I, E> for Either<L, R>
where
    L: Coroutine<I, E>,
    R: Coroutine<I, E, Return = L::Return>,
{
    type Return = L::Return;

    fn resume(&mut self, token: Resume<I, E>) -> Resumed<I, E, L::Return> {
        match self {
            Either::Left(l) => l.resume(token),
            Either::Right(r) => r.resume(token),
        }
    }
}
