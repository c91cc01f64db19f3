//! Sequential chaining: transform, continue, guard, observe, terminate.

use crate::outcome::{Inner, Outcome};
use crate::ErrorValue;

impl<T> Outcome<T> {
    /// Transforms the success value; a failure propagates untouched.
    ///
    /// # Example
    /// ```
    /// use outcome::Outcome;
    ///
    /// let o = Outcome::success(2).map(|n| n + 1);
    /// assert_eq!(o, Outcome::success(3));
    /// ```
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self.inner {
            Inner::Success(value) => Outcome::success(f(value)),
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// Continues the chain with an outcome-returning step.
    ///
    /// On success, returns `f(value)` directly (the success type may
    /// change); a failure propagates untouched and `f` is never invoked.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self.inner {
            Inner::Success(value) => f(value),
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// Runs a side-validation and keeps the original value.
    ///
    /// On success, invokes `f(&value)`: if the validation fails, that
    /// failure is returned; if it succeeds, the original value is retained
    /// and the validation's own success payload is discarded. This
    /// validate-but-keep-original behavior is intentional, not an
    /// oversight; use [`and_then`](Self::and_then) when the step's result
    /// should replace the value.
    pub fn verify(self, f: impl FnOnce(&T) -> Outcome) -> Outcome<T> {
        match self.inner {
            Inner::Success(value) => match f(&value).inner {
                Inner::Success(()) => Outcome::success(value),
                Inner::Failure(errors) => Outcome::from_error_list(errors),
            },
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// Converts a success into a failure when the predicate rejects it.
    ///
    /// On success, evaluates `predicate(&value)`: `false` yields
    /// `fail(message)`, `true` passes the outcome through unchanged. A
    /// failure propagates untouched and the predicate is never invoked.
    pub fn ensure(
        self,
        predicate: impl FnOnce(&T) -> bool,
        message: impl Into<String>,
    ) -> Self {
        match self.inner {
            Inner::Success(value) => {
                if predicate(&value) {
                    Outcome::success(value)
                } else {
                    Outcome::fail(message)
                }
            }
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// [`ensure`](Self::ensure) with the resulting error attached to a field.
    pub fn ensure_field(
        self,
        predicate: impl FnOnce(&T) -> bool,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        match self.inner {
            Inner::Success(value) => {
                if predicate(&value) {
                    Outcome::success(value)
                } else {
                    Outcome::fail_field(field, message)
                }
            }
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// Runs an action iff this is a success; the outcome is returned as-is.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Inner::Success(value) = &self.inner {
            f(value);
        }
        self
    }

    /// Runs an action iff this is a failure, receiving the error sequence;
    /// the outcome is returned as-is.
    pub fn inspect_failure(self, f: impl FnOnce(&[ErrorValue])) -> Self {
        if let Inner::Failure(errors) = &self.inner {
            f(errors);
        }
        self
    }

    /// The terminal step: always invokes `f`, on either variant.
    ///
    /// This is the single combinator that observes both halves of the
    /// duality, typically used to unify a chain into a plain return value.
    pub fn on_both<R>(self, f: impl FnOnce(Self) -> R) -> R {
        f(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::format_errors_default;

    fn failure_ab() -> Outcome<i32> {
        Outcome::fail_with(vec![ErrorValue::new("a"), ErrorValue::field("f", "b")])
    }

    #[test]
    fn map_transforms_success() {
        assert_eq!(Outcome::success(2).map(|n| n * 10), Outcome::success(20));
    }

    #[test]
    fn map_propagates_failure_without_calling_transform() {
        let called = Cell::new(false);
        let out: Outcome<String> = failure_ab().map(|_| {
            called.set(true);
            String::new()
        });
        assert!(!called.get());
        assert_eq!(out.errors(), failure_ab().errors());
    }

    #[test]
    fn map_identity_law() {
        let o = Outcome::success(7);
        assert_eq!(o.clone().map(|v| v), o);
    }

    #[test]
    fn map_composition_law() {
        let f = |n: i32| n + 1;
        let g = |n: i32| n * 2;
        let composed = Outcome::success(3).map(f).map(g);
        let fused = Outcome::success(3).map(|n| g(f(n)));
        assert_eq!(composed, fused);
    }

    #[test]
    fn and_then_returns_inner_outcome() {
        let o = Outcome::success(2).and_then(|n| Outcome::success(n.to_string()));
        assert_eq!(o, Outcome::success("2".to_owned()));

        let o = Outcome::success(2).and_then(|_| Outcome::<String>::fail("inner"));
        assert_eq!(o.errors()[0].message(), "inner");
    }

    #[test]
    fn and_then_short_circuits_on_failure() {
        let called = Cell::new(false);
        let out = failure_ab().and_then(|_| {
            called.set(true);
            Outcome::success(0)
        });
        assert!(!called.get());
        assert!(out.is_failure());
    }

    #[test]
    fn verify_keeps_original_value_on_passing_validation() {
        let o = Outcome::success(10).verify(|_| Outcome::ok());
        assert_eq!(o, Outcome::success(10));
    }

    #[test]
    fn verify_returns_validation_failure() {
        let o = Outcome::success(10).verify(|n| {
            assert_eq!(*n, 10);
            Outcome::fail_field("n", "too big")
        });
        assert_eq!(o.errors()[0].fields(), ["n"]);
    }

    #[test]
    fn verify_skips_validation_on_failure() {
        let called = Cell::new(false);
        let out = failure_ab().verify(|_| {
            called.set(true);
            Outcome::ok()
        });
        assert!(!called.get());
        assert_eq!(out.errors(), failure_ab().errors());
    }

    #[test]
    fn ensure_converts_rejection_to_failure() {
        let o = Outcome::success(3).ensure(|n| *n > 5, "too small");
        assert_eq!(o.errors()[0].message(), "too small");
        assert!(o.errors()[0].fields().is_empty());
    }

    #[test]
    fn ensure_passes_accepted_value_through() {
        assert_eq!(
            Outcome::success(9).ensure(|n| *n > 5, "too small"),
            Outcome::success(9)
        );
    }

    #[test]
    fn ensure_field_attaches_field() {
        let o = Outcome::success(3).ensure_field(|n| *n > 5, "count", "too small");
        assert_eq!(o.errors()[0].fields(), ["count"]);
        assert_eq!(o.errors()[0].message(), "too small");
    }

    #[test]
    fn ensure_never_runs_predicate_on_failure() {
        let called = Cell::new(false);
        let out = failure_ab().ensure(
            |_| {
                called.set(true);
                true
            },
            "unused",
        );
        assert!(!called.get());
        assert_eq!(out.errors(), failure_ab().errors());
    }

    #[test]
    fn inspect_runs_only_on_success() {
        let seen = Cell::new(0);
        let _ = Outcome::success(5).inspect(|n| seen.set(*n));
        assert_eq!(seen.get(), 5);

        let _ = failure_ab().inspect(|n| seen.set(*n + 100));
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn inspect_failure_receives_errors() {
        let count = Cell::new(0);
        let out = failure_ab().inspect_failure(|errors| count.set(errors.len()));
        assert_eq!(count.get(), 2);
        assert!(out.is_failure());

        let out = Outcome::success(1).inspect_failure(|_| count.set(99));
        assert_eq!(count.get(), 2);
        assert!(out.is_success());
    }

    #[test]
    fn on_both_runs_on_either_variant() {
        let s = Outcome::success(1).on_both(|o| if o.is_success() { "yes" } else { "no" });
        assert_eq!(s, "yes");

        let f = failure_ab().on_both(|o| format_errors_default(o.errors()));
        assert_eq!(f, "a\n[f] b");
    }
}
