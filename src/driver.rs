//! Drive a [`Coroutine`] to completion over futures.
//!
//! [`run`] resumes the coroutine, and every time it suspends on an [`Awaited`] value
//! waits for that value to settle before resuming it again: with
//! [`Resume::Next`] on fulfillment, or with [`Resume::Throw`] on rejection so the
//! coroutine can recover or clean up at the suspension point. The coroutine's final
//! result settles the future `run` returns, adopting it when the coroutine ends with
//! a future.
//!
//! # Examples
//!
//! ```rust
//! use settle::prelude::*;
//!
//! let queue = TaskQueue::new();
//! let scheduler = queue.scheduler();
//!
//! let doubled = run(&scheduler, from_fn(|resume: Resume<i32, Error>| match resume {
//!     Resume::Start => Step::Yielded(Awaited::Value(42)),
//!     Resume::Next(x) => Step::returned(x * 2),
//!     Resume::Throw(e) => Step::failed(e),
//! }));
//!
//! assert!(doubled.is_pending());
//! queue.run_until_idle();
//! assert_eq!(doubled.outcome(), Some(Ok(84)));
//! ```

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    coroutine::{Coroutine, Resume},
    error::Reason,
    future::{Awaited, Future, Resolver},
    schedule::Scheduler,
    step::Step,
};

struct Driven<C, R, E> {
    coroutine: RefCell<C>,
    resolver: Resolver<R, E>,
    scheduler: Scheduler,
    resumes: Cell<usize>,
}

/// Start driving `coroutine` and return a future of its result.
///
/// The first resumption ([`Resume::Start`]) happens before `run` returns; everything
/// after the first suspension happens on later turns of `scheduler`. A failure the
/// coroutine raises, either on its own or by not handling a [`Resume::Throw`], rejects
/// the returned future and the coroutine is not resumed again. Ending with
/// [`Step::adopt`] settles the returned future with that future's outcome.
///
/// While suspended, the coroutine is owned by the callbacks of the future it awaits.
/// If the coroutine also holds that future and the future never settles, neither is
/// freed.
pub fn run<C, I, E>(scheduler: &Scheduler, coroutine: C) -> Future<C::Return, E>
where
    C: Coroutine<I, E> + 'static,
    C::Return: Clone + 'static,
    I: Clone + 'static,
    E: Reason,
{
    Future::new(scheduler, |resolver| {
        let driven = Rc::new(Driven {
            coroutine: RefCell::new(coroutine),
            resolver,
            scheduler: scheduler.clone(),
            resumes: Cell::new(0),
        });
        advance(driven, Resume::Start);
        Ok(())
    })
}

fn advance<C, I, E>(driven: Rc<Driven<C, C::Return, E>>, token: Resume<I, E>)
where
    C: Coroutine<I, E> + 'static,
    C::Return: Clone + 'static,
    I: Clone + 'static,
    E: Reason,
{
    let resumes = driven.resumes.get() + 1;
    driven.resumes.set(resumes);

    let step = driven.coroutine.borrow_mut().resume(token);
    match step {
        Step::Complete(Ok(returned)) => {
            tracing::trace!(
                resumes,
                adopting = matches!(returned, Awaited::Future(_)),
                "coroutine returned"
            );
            driven.resolver.settle(returned);
        }
        Step::Complete(Err(reason)) => {
            tracing::debug!(resumes, "coroutine raised");
            driven.resolver.reject(reason);
        }
        Step::Yielded(awaited) => {
            tracing::trace!(
                resumes,
                awaiting_future = matches!(awaited, Awaited::Future(_)),
                "coroutine suspended"
            );
            let future = awaited.into_future(&driven.scheduler);
            let on_reject = Rc::clone(&driven);
            future.subscribe(
                move |value| advance(driven, Resume::Next(value)),
                move |reason| advance(on_reject, Resume::Throw(reason)),
            );
        }
    }
}
