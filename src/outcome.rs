//! The `Outcome` tagged union and the combinators for composing it.

use serde::{Deserialize, Serialize};

/// Outcome of a computation that either produced a value or failed with an
/// error payload describing why.
///
/// Exactly one variant is active at a time; there is no pending or empty
/// state. Values are immutable once constructed: every combinator consumes
/// its input and either passes it through or builds a new `Outcome`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Ok(T),
    /// The computation did not produce a value.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap a success value. Never fails and never inspects `value`.
    pub fn ok(value: T) -> Outcome<T, E> {
        Outcome::Ok(value)
    }

    /// Wrap an error payload.
    pub fn err(error: E) -> Outcome<T, E> {
        Outcome::Err(error)
    }

    /// Invoke exactly one of the two handlers for the active variant and
    /// return its result.
    ///
    /// This is the single consuming deconstruction point for the union;
    /// every combinator below is defined in terms of it, so both variants
    /// are always handled and there is no default case anywhere.
    pub fn fold<U>(self, on_ok: impl FnOnce(T) -> U, on_err: impl FnOnce(E) -> U) -> U {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(error) => on_err(error),
        }
    }

    /// Apply `op` to the success value. An error propagates untouched and
    /// `op` is never invoked.
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Outcome<U, E> {
        self.fold(|value| Outcome::Ok(op(value)), Outcome::Err)
    }

    /// Combine two outcomes with a two-argument function, succeeding only
    /// if both operands did.
    ///
    /// Left-biased: `a` is inspected first, and if it carries an error that
    /// error is returned without inspecting `b`. If `a` succeeded and `b`
    /// carries an error, `b`'s error is returned.
    pub fn map2<A, B>(
        op: impl FnOnce(A, B) -> T,
        a: Outcome<A, E>,
        b: Outcome<B, E>,
    ) -> Outcome<T, E> {
        a.fold(
            |va| b.fold(|vb| Outcome::Ok(op(va, vb)), Outcome::Err),
            Outcome::Err,
        )
    }

    /// Chain a computation that may itself fail. `op` receives the success
    /// value and its outcome is returned directly; an error propagates
    /// untouched and `op` is never invoked.
    pub fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        self.fold(op, Outcome::Err)
    }

    /// Transform the error payload. A success propagates untouched and `op`
    /// is never invoked. The previous error type is not retained once
    /// transformed.
    pub fn map_error<F>(self, op: impl FnOnce(E) -> F) -> Outcome<T, F> {
        self.fold(Outcome::Ok, |error| Outcome::Err(op(error)))
    }

    /// Run `op` on a borrow of the success value for its side effect,
    /// discarding whatever it returns, and pass the outcome through
    /// unchanged. `op` never runs on an error.
    pub fn tap(self, op: impl FnOnce(&T)) -> Outcome<T, E> {
        self.fold(
            |value| {
                op(&value);
                Outcome::Ok(value)
            },
            Outcome::Err,
        )
    }

    /// Unwrap into a plain value, substituting `default` on error.
    ///
    /// The error payload is discarded irrecoverably, so this is the one
    /// deliberate exit from the `Outcome` domain.
    pub fn with_default(self, default: T) -> T {
        self.fold(|value| value, |_| default)
    }

    /// Like [`Outcome::with_default`], but computes the fallback from the
    /// error payload only when it is actually needed.
    pub fn with_default_else(self, op: impl FnOnce(E) -> T) -> T {
        self.fold(|value| value, op)
    }
}
