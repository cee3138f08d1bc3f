//! Success-or-failure as plain data, composed with combinators instead of
//! explicit branching.
//!
//! The crate is a pure data-and-function library: no I/O, no shared state,
//! nothing to schedule or cancel. A computation's outcome is captured in the
//! two-variant [`Outcome`] union and flows through `map`/`and_then`-style
//! combinators, short-circuiting automatically once it carries an error.
//! Failures are never thrown; they travel as ordinary values until the
//! caller folds them out.

pub mod convert;
pub mod outcome;

pub use outcome::Outcome;
