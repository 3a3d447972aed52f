//! Failure types carried by rejected futures.

use thiserror::Error;

/// A future was resolved with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("chaining cycle detected for future")]
pub struct ChainingCycle;

/// Bound on rejection reasons.
///
/// Reasons are cloned out to every registered rejection handler, and a future must be
/// able to reject itself with a [`ChainingCycle`].
pub trait Reason: Clone + From<ChainingCycle> + 'static {}

impl<E> Reason for E where E: Clone + From<ChainingCycle> + 'static {}

/// General purpose rejection reason.
///
/// ```rust
/// use settle::{ChainingCycle, Error};
///
/// assert_eq!(Error::from(ChainingCycle).to_string(), "chaining cycle detected for future");
/// assert_eq!(Error::from("oops").to_string(), "oops");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    ChainingCycle(#[from] ChainingCycle),
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn message(msg: impl Into<String>) -> Self {
        Error::Message(msg.into())
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Message(msg.to_owned())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Message(msg)
    }
}
