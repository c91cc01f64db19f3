//! Bridges `Option` into the duality.
//!
//! Absence is not an error by itself; these adapters let the caller name the
//! error that absence means at the point of conversion.

use std::future::Future;

use crate::{ErrorValue, Outcome};

/// Conversion from an optional value into an [`Outcome`].
///
/// # Example
/// ```
/// use outcome::{MaybeExt, Outcome};
///
/// fn lookup(id: u32) -> Option<&'static str> {
///     (id == 1).then_some("alice")
/// }
///
/// let out = lookup(2).into_outcome_field("id", "user not found");
/// assert!(out.is_failure());
/// ```
pub trait MaybeExt<T> {
    /// `Some(value)` becomes a success; `None` becomes a failure carrying
    /// `error`.
    fn into_outcome(self, error: ErrorValue) -> Outcome<T>;

    /// [`into_outcome`](Self::into_outcome) with a bare message.
    fn into_outcome_msg(self, message: impl Into<String>) -> Outcome<T>;

    /// [`into_outcome`](Self::into_outcome) with a field and message.
    fn into_outcome_field(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Outcome<T>;
}

impl<T> MaybeExt<T> for Option<T> {
    fn into_outcome(self, error: ErrorValue) -> Outcome<T> {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::fail_error(error),
        }
    }

    fn into_outcome_msg(self, message: impl Into<String>) -> Outcome<T> {
        self.into_outcome(ErrorValue::new(message))
    }

    fn into_outcome_field(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Outcome<T> {
        self.into_outcome(ErrorValue::field(field, message))
    }
}

/// [`MaybeExt`] lifted over a pending optional value.
pub trait MaybeFutureExt<T>: Future<Output = Option<T>> + Sized {
    /// Awaits the optional value, then converts like
    /// [`MaybeExt::into_outcome`].
    fn into_outcome(self, error: ErrorValue) -> impl Future<Output = Outcome<T>> {
        async move { self.await.into_outcome(error) }
    }

    /// Awaits, then converts with a bare message.
    fn into_outcome_msg(
        self,
        message: impl Into<String>,
    ) -> impl Future<Output = Outcome<T>> {
        let error = ErrorValue::new(message);
        async move { self.await.into_outcome(error) }
    }

    /// Awaits, then converts with a field and message.
    fn into_outcome_field(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> impl Future<Output = Outcome<T>> {
        let error = ErrorValue::field(field, message);
        async move { self.await.into_outcome(error) }
    }
}

impl<T, Fut> MaybeFutureExt<T> for Fut where Fut: Future<Output = Option<T>> + Sized {}
