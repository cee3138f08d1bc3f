//! Adapters between `Outcome` and the surrounding Rust ecosystem.

use crate::Outcome;

impl<T, E> Outcome<T, E> {
    /// Borrowing projection, so the consuming combinators can run against
    /// a shared reference.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Whether the success variant is active.
    pub fn is_ok(&self) -> bool {
        self.as_ref().fold(|_| true, |_| false)
    }

    /// Whether the failure variant is active.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The success payload, discarding any error.
    pub fn value(self) -> Option<T> {
        self.fold(Some, |_| None)
    }

    /// The error payload, discarding any success value.
    pub fn error(self) -> Option<E> {
        self.fold(|_| None, Some)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Outcome<T, E> {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Result<T, E> {
        outcome.fold(Ok, Err)
    }
}
