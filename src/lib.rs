//! # Settle: settle-once futures and a coroutine driver
//!
//! Write sequential-looking logic as a stepped state machine and let a driver run it
//! over deferred values, all on one thread and one FIFO task queue.
//!
//! ## Core Types
//!
//! - **[`Future<T, E>`]**: a value that settles at most once, fulfilled with `T` or
//!   rejected with `E`. Continuations registered with [`Future::then`] always run on a
//!   later turn of the [`Scheduler`].
//! - **[`Coroutine<I, E>`]**: a computation resumed with [`Resume`] tokens that
//!   suspends on [`Awaited`] values.
//! - **[`run`]**: drives a coroutine and returns a future of its result.
//!
//! ## Example
//!
//! ```
//! use settle::prelude::*;
//!
//! let queue = TaskQueue::new();
//! let scheduler = queue.scheduler();
//! let (input, resolver) = Future::<u32, Error>::deferred(&scheduler);
//!
//! let result = run(&scheduler, from_fn(move |resume: Resume<u32, Error>| {
//!     match resume {
//!         Resume::Start => Step::Yielded(Awaited::Future(input.clone())),
//!         Resume::Next(n) => Step::returned(n + 1),
//!         Resume::Throw(e) => Step::failed(e),
//!     }
//! }));
//!
//! resolver.resolve(41);
//! queue.run_until_idle();
//! assert_eq!(result.outcome(), Some(Ok(42)));
//! ```
//!
//! ## Common Functions
//!
//! - [`Future::new`], [`Future::deferred`], [`Future::resolved`], [`Future::rejected`]
//! - [`Future::then`], [`Future::and_then`], [`Future::or_else`], [`Future::map`], [`Future::fork`]
//! - [`from_fn`], [`map_return`]
//! - [`run`]

pub mod coroutine;
pub mod driver;
mod error;
pub mod future;
pub mod prelude;
pub mod schedule;
mod step;

pub use coroutine::{from_fn, map_return, Coroutine, FromFn, MapReturn, Resume, Resumed};
pub use driver::run;
pub use error::{ChainingCycle, Error, Reason};
pub use future::{Awaited, Future, FutureState, Resolver, Settlement};
pub use schedule::{Schedule, Scheduler, Task, TaskQueue};
pub use step::Step;
