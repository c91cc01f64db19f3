//! Conditional additional validation and failure context.

use crate::outcome::{ErrorList, Inner, Outcome};
use crate::ErrorValue;

impl<T> Outcome<T> {
    /// Merges an untyped validation outcome into this one, keeping the value.
    ///
    /// An existing failure wins outright; otherwise a failing `other`
    /// replaces the success with its errors, and a succeeding `other` leaves
    /// this outcome untouched.
    pub fn combine_with(self, other: Outcome) -> Outcome<T> {
        if self.is_failure() {
            return self;
        }
        match other.inner {
            Inner::Success(()) => self,
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// Runs an additional validation when `condition` holds.
    ///
    /// A failure, or a `false` condition, passes this outcome through
    /// unchanged. Otherwise the validation runs against the carried value
    /// and its result is merged via [`combine_with`](Self::combine_with):
    /// the value survives a passing validation, and a failing one (which may
    /// itself aggregate several errors) becomes the failure.
    pub fn check(self, condition: bool, f: impl FnOnce(&T) -> Outcome) -> Outcome<T> {
        if self.is_failure() || !condition {
            return self;
        }
        let validation = f(self.value());
        self.combine_with(validation)
    }

    /// [`check`](Self::check) with the condition computed from the value.
    pub fn check_with(
        self,
        condition: impl FnOnce(&T) -> bool,
        f: impl FnOnce(&T) -> Outcome,
    ) -> Outcome<T> {
        if self.is_failure() {
            return self;
        }
        let applies = condition(self.value());
        self.check(applies, f)
    }

    /// Prepends a context error ahead of an existing failure's errors.
    ///
    /// The new error comes first, then the original errors in their
    /// original order; nested failure detail is annotated, never discarded.
    /// A success passes through unchanged.
    ///
    /// # Example
    /// ```
    /// use outcome::{ErrorValue, Outcome};
    ///
    /// let o = Outcome::<i32>::fail("b").preface_failure(ErrorValue::new("a"));
    /// let messages: Vec<_> = o.errors().iter().map(ErrorValue::message).collect();
    /// assert_eq!(messages, ["a", "b"]);
    /// ```
    pub fn preface_failure(self, error: ErrorValue) -> Self {
        match self.inner {
            Inner::Success(value) => Outcome::success(value),
            Inner::Failure(errors) => {
                let mut prefixed = ErrorList::with_capacity(errors.len() + 1);
                prefixed.push(error);
                prefixed.extend(errors);
                Outcome::from_error_list(prefixed)
            }
        }
    }

    /// [`preface_failure`](Self::preface_failure) with a bare message.
    pub fn preface_failure_msg(self, message: impl Into<String>) -> Self {
        self.preface_failure(ErrorValue::new(message))
    }

    /// [`preface_failure`](Self::preface_failure) with a field and message.
    pub fn preface_failure_field(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.preface_failure(ErrorValue::field(field, message))
    }
}
