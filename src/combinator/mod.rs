//! Railway combinators over [`Outcome`](crate::Outcome).
//!
//! This module provides the chaining surface:
//!
//! - [`map`](crate::Outcome::map) / [`and_then`](crate::Outcome::and_then):
//!   transform or continue a success
//! - [`ensure`](crate::Outcome::ensure): turn a failed predicate into a failure
//! - [`verify`](crate::Outcome::verify): side-validation that keeps the value
//! - [`check`](crate::Outcome::check): conditional additional validation with
//!   error accumulation
//! - [`preface_failure`](crate::Outcome::preface_failure): prepend caller
//!   context to an existing failure
//! - [`combine`] / [`combine_retain_values`]: aggregate independent outcomes,
//!   merging all errors in input order
//!
//! # The railway rule
//!
//! Once an outcome is a failure, every combinator in the chain propagates the
//! existing errors unchanged and never invokes the supplied transform. All
//! combinators are pure: they consume their input and build a new outcome.

mod chain;
mod check;
mod combine;

pub use combine::{combine, combine_retain_values, first_failure_or_success};
