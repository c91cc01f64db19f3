//! Multi-error aggregation over independent outcomes.
//!
//! Aggregation is deterministic and reproducible: failing members are
//! considered in input order, and each member's internal error order is
//! preserved. The first failing input's errors therefore appear first in
//! the aggregate. User-facing aggregated messages depend on this ordering,
//! so it is a hard contract, not an implementation detail.

use crate::outcome::{ErrorList, Inner, Outcome};

/// Aggregates outcomes, merging all errors from failing members.
///
/// Members are inspected in input order; with no failures the result is
/// [`Outcome::ok`]. Otherwise the result is a failure whose errors are the
/// failing members' error sequences concatenated in input order, each
/// member's internal order preserved. Success values are discarded; use
/// [`combine_retain_values`] to keep them.
///
/// # Example
/// ```
/// use outcome::{combine, ErrorValue, Outcome};
///
/// let out = combine(vec![
///     Outcome::fail("a"),
///     Outcome::ok(),
///     Outcome::fail_with(vec![ErrorValue::new("b"), ErrorValue::new("c")]),
/// ]);
/// let messages: Vec<_> = out.errors().iter().map(ErrorValue::message).collect();
/// assert_eq!(messages, ["a", "b", "c"]);
/// ```
pub fn combine<T>(results: impl IntoIterator<Item = Outcome<T>>) -> Outcome {
    let mut errors = ErrorList::new();
    for result in results {
        if let Inner::Failure(member) = result.inner {
            errors.extend(member);
        }
    }
    if errors.is_empty() {
        Outcome::ok()
    } else {
        Outcome::from_error_list(errors)
    }
}

/// Aggregates outcomes like [`combine`], keeping all values on success.
///
/// The failure rule is identical; when every member succeeds, the result is
/// a success carrying all values in input order.
pub fn combine_retain_values<T>(
    results: impl IntoIterator<Item = Outcome<T>>,
) -> Outcome<Vec<T>> {
    let mut values = Vec::new();
    let mut errors = ErrorList::new();
    for result in results {
        match result.inner {
            Inner::Success(value) => values.push(value),
            Inner::Failure(member) => errors.extend(member),
        }
    }
    if errors.is_empty() {
        Outcome::success(values)
    } else {
        Outcome::from_error_list(errors)
    }
}

/// Returns the first failing member's errors, or success when none fail.
///
/// Unlike [`combine`], later failures are not merged in; this is the
/// short-circuiting counterpart for callers that only want one failure.
pub fn first_failure_or_success<T>(
    results: impl IntoIterator<Item = Outcome<T>>,
) -> Outcome {
    for result in results {
        if result.is_failure() {
            return Outcome::from_error_list(result.into_error_list());
        }
    }
    Outcome::ok()
}
