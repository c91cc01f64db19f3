//! Lifts the combinator surface across pending computations.
//!
//! Every synchronous combinator exists exactly once, on
//! [`Outcome`](crate::Outcome); this module lifts it across the operand
//! positions that can be pending:
//!
//! - pending source: [`OutcomeFutureExt`], an extension trait on any
//!   `Future<Output = Outcome<T>>`, with sync-transform methods
//!   (`map_success`, `ensure_success`, ...) and async-transform methods
//!   (`and_then`, `map_success_async`, ...)
//! - resolved source, pending transform: the inherent `*_async` methods on
//!   `Outcome` (`map_async`, `and_then_async`, ...)
//!
//! # Execution model
//!
//! The pending source is always awaited to completion before the
//! corresponding synchronous combinator runs; nothing here spawns tasks or
//! runs work in parallel. The only concurrent operations are
//! [`combine_async`] and [`combine_retain_values_async`], which await a
//! fixed set of independent computations with wait-for-all semantics and
//! then apply the synchronous aggregation algebra. Aggregation order
//! follows input order, never completion order.
//!
//! Panics and cancellation are not absorbed: a panic in a wrapped
//! computation unwinds through the adapter unchanged, and dropping a
//! composed future drops the wrapped computations. Scheduling is entirely
//! the caller's executor's concern; the adapter never re-schedules.

use std::future::Future;

use futures::future::join_all;

use crate::combinator::{combine, combine_retain_values};
use crate::outcome::{Inner, Outcome};
use crate::ErrorValue;

/// Combinators over a pending `Outcome`.
///
/// Implemented for every `Future<Output = Outcome<T>>`. Each method awaits
/// the source, then delegates to the synchronous combinator of the same
/// shape.
///
/// # Example
/// ```
/// use outcome::{Outcome, OutcomeFutureExt};
///
/// let out = futures::executor::block_on(
///     async { Outcome::success(2) }
///         .map_success(|n| n * 3)
///         .ensure_success(|n| *n > 5, "too small"),
/// );
/// assert_eq!(out, Outcome::success(6));
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Lifted [`Outcome::map`].
    fn map_success<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Lifted [`Outcome::and_then`] with a synchronous continuation.
    fn and_then_success<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.and_then(f) }
    }

    /// Lifted [`Outcome::and_then`] with a pending continuation.
    fn and_then<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    /// Lifted [`Outcome::map`] with a pending transform.
    fn map_success_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Lifted [`Outcome::verify`].
    fn verify_success<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Outcome,
    {
        async move { self.await.verify(f) }
    }

    /// Lifted [`Outcome::verify`] with a pending validation.
    fn verify_success_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        async move { self.await.verify_async(f).await }
    }

    /// Lifted [`Outcome::ensure`].
    fn ensure_success<P>(
        self,
        predicate: P,
        message: impl Into<String>,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.ensure(predicate, message) }
    }

    /// Lifted [`Outcome::ensure_field`].
    fn ensure_success_field<P>(
        self,
        predicate: P,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.ensure_field(predicate, field, message) }
    }

    /// Lifted [`Outcome::ensure`] with a pending predicate.
    fn ensure_success_async<P, Fut>(
        self,
        predicate: P,
        message: impl Into<String>,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.ensure_async(predicate, message).await }
    }

    /// Lifted [`Outcome::check`].
    fn check_success<F>(self, condition: bool, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Outcome,
    {
        async move { self.await.check(condition, f) }
    }

    /// Lifted [`Outcome::check`] with a pending validation.
    fn check_success_async<F, Fut>(
        self,
        condition: bool,
        f: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        async move { self.await.check_async(condition, f).await }
    }

    /// Lifted [`Outcome::inspect`].
    fn inspect_success<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.inspect(f) }
    }

    /// Lifted [`Outcome::inspect_failure`].
    fn inspect_failure_with<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&[ErrorValue]),
    {
        async move { self.await.inspect_failure(f) }
    }

    /// Lifted [`Outcome::preface_failure`].
    fn preface_failure_with(self, error: ErrorValue) -> impl Future<Output = Outcome<T>> {
        async move { self.await.preface_failure(error) }
    }

    /// Lifted [`Outcome::upcast`].
    fn upcast_success(self) -> impl Future<Output = Outcome> {
        async move { self.await.upcast() }
    }

    /// Lifted [`Outcome::on_both`]: the terminal step over a pending chain.
    fn resolve<R, F>(self, f: F) -> impl Future<Output = R>
    where
        F: FnOnce(Outcome<T>) -> R,
    {
        async move { f(self.await) }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> + Sized {}

impl<T> Outcome<T> {
    /// [`map`](Self::map) with a pending transform.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Inner::Success(value) => Outcome::success(f(value).await),
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// [`and_then`](Self::and_then) with a pending continuation.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.inner {
            Inner::Success(value) => f(value).await,
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// [`verify`](Self::verify) with a pending validation.
    pub async fn verify_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        match self.inner {
            Inner::Success(value) => match f(&value).await.inner {
                Inner::Success(()) => Outcome::success(value),
                Inner::Failure(errors) => Outcome::from_error_list(errors),
            },
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// [`ensure`](Self::ensure) with a pending predicate.
    pub async fn ensure_async<P, Fut>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self.inner {
            Inner::Success(value) => {
                if predicate(&value).await {
                    Outcome::success(value)
                } else {
                    Outcome::fail(message)
                }
            }
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// [`check`](Self::check) with a pending validation.
    pub async fn check_async<F, Fut>(self, condition: bool, f: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        if self.is_failure() || !condition {
            return self;
        }
        let validation = f(self.value()).await;
        self.combine_with(validation)
    }

    /// [`on_both`](Self::on_both) with a pending terminal step.
    pub async fn on_both_async<R, F, Fut>(self, f: F) -> R
    where
        F: FnOnce(Outcome<T>) -> Fut,
        Fut: Future<Output = R>,
    {
        f(self).await
    }
}

/// Awaits every computation, then aggregates like [`combine`].
///
/// Wait-for-all: the result resolves only once all inputs have completed,
/// regardless of individual failures. Error aggregation follows input
/// order, not completion order.
pub async fn combine_async<T, I>(pending: I) -> Outcome
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T>>,
{
    let resolved = join_all(pending).await;
    combine(resolved)
}

/// Awaits every computation, then aggregates like [`combine_retain_values`].
pub async fn combine_retain_values_async<T, I>(pending: I) -> Outcome<Vec<T>>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T>>,
{
    let resolved = join_all(pending).await;
    combine_retain_values(resolved)
}
