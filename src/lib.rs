//! Railway-style success/failure outcomes with error aggregation.
//!
//! An [`Outcome<T>`](Outcome) is either a success carrying exactly one
//! value, or a failure carrying a non-empty ordered sequence of
//! [`ErrorValue`]s. Expected failure conditions (validation, business
//! rules) travel by value through combinator chains instead of unwinding;
//! once a chain fails, later steps are skipped and the original errors
//! propagate unchanged.
//!
//! # Surface
//!
//! - [`outcome`]: the duality type and its factories.
//! - [`combinator`]: the chaining surface ([`Outcome::map`],
//!   [`Outcome::and_then`], [`Outcome::ensure`], [`Outcome::check`], ...)
//!   and the aggregation algebra ([`combine`], [`combine_retain_values`]).
//! - [`future`]: the same surface lifted over pending computations.
//! - [`maybe`]: bridges from `Option`.
//! - [`scope`]: ties a scoped external resource to a chain's outcome.
//!
//! # Example
//! ```
//! use outcome::{MaybeExt, Outcome};
//!
//! fn find_user(id: u32) -> Option<&'static str> {
//!     (id == 1).then_some("alice")
//! }
//!
//! fn greet(id: u32) -> String {
//!     find_user(id)
//!         .into_outcome_field("id", "user not found")
//!         .ensure(|name| !name.is_empty(), "user has no name")
//!         .map(|name| format!("hello, {name}"))
//!         .on_both(|o| {
//!             if o.is_success() {
//!                 o.into_value()
//!             } else {
//!                 outcome::format_errors_default(o.errors())
//!             }
//!         })
//! }
//!
//! assert_eq!(greet(1), "hello, alice");
//! assert_eq!(greet(2), "[id] user not found");
//! ```
//!
//! # Panics
//!
//! Misusing the type panics: constructing a failure with no errors, or
//! reading the value of a failure or the errors of a success. Domain
//! failures never panic; they are ordinary Failure outcomes.

pub mod combinator;
pub mod error;
pub mod future;
pub mod maybe;
pub mod outcome;
pub mod scope;

mod validate;

pub use combinator::{combine, combine_retain_values, first_failure_or_success};
pub use error::{
    flatten_errors, format_errors, format_errors_default, ErrorValue, Errors,
};
pub use future::{combine_async, combine_retain_values_async, OutcomeFutureExt};
pub use maybe::{MaybeExt, MaybeFutureExt};
pub use outcome::Outcome;
pub use scope::{within_scope, within_scope_async, UnitOfWork};
