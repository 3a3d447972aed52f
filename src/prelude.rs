//! Commonly used imports
//!
//! Use `use settle::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Awaited, Coroutine, Future, Resume, Resumed, Step};

// Scheduling
pub use crate::{Scheduler, TaskQueue};

// Errors
pub use crate::{Error, Reason};

// Building coroutines
pub use crate::coroutine::{from_fn, map_return};

// Execution
pub use crate::driver::run;
