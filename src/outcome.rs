//! The success/failure duality type.
//!
//! An [`Outcome`] is either *Success*, carrying exactly one value, or
//! *Failure*, carrying a non-empty ordered sequence of
//! [`ErrorValue`]s. The untyped half of the duality is `Outcome<()>`
//! (aliased by the default type parameter); [`Outcome::upcast`] converts the
//! typed form to it explicitly.
//!
//! # Invariants
//!
//! - A value exists iff the variant is Success.
//! - An error sequence exists, and is non-empty, iff the variant is Failure.
//! - Outcomes are immutable and built only through the factory functions
//!   ([`Outcome::ok`], [`Outcome::success`], [`Outcome::fail`] and friends).
//!
//! Reading the value of a Failure, or the errors of a Success, is a contract
//! violation and panics at the call site. Domain failures never use that
//! channel; they travel by value as Failure outcomes.
//!
//! # Example
//! ```
//! use outcome::Outcome;
//!
//! let o = Outcome::success(2).map(|n| n * 2);
//! assert_eq!(*o.value(), 4);
//!
//! let f: Outcome<i32> = Outcome::fail("out of stock");
//! assert!(f.is_failure());
//! assert_eq!(f.errors()[0].message(), "out of stock");
//! ```

use smallvec::SmallVec;

use crate::error::{ErrorValue, Errors};

/// Internal error storage. One error is the overwhelmingly common case.
pub(crate) type ErrorList = SmallVec<[ErrorValue; 1]>;

/// A success-with-value or failure-with-errors outcome.
///
/// `Outcome<T>` carries a `T` on success; the untyped form `Outcome` (that
/// is, `Outcome<()>`) carries nothing. See the [module docs](self) for the
/// variant invariants.
#[must_use = "outcomes carry failure information that should be handled"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T = ()> {
    pub(crate) inner: Inner<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Inner<T> {
    Success(T),
    Failure(ErrorList),
}

impl Outcome<()> {
    /// Creates an untyped success, carrying nothing.
    pub fn ok() -> Outcome {
        Outcome {
            inner: Inner::Success(()),
        }
    }
}

impl<T> Outcome<T> {
    /// Creates a success carrying `value`.
    ///
    /// A "successful nothing" cannot be expressed here; model absence with
    /// `Option` and bridge it via
    /// [`MaybeExt::into_outcome`](crate::maybe::MaybeExt::into_outcome).
    pub fn success(value: T) -> Self {
        Self {
            inner: Inner::Success(value),
        }
    }

    /// Creates a failure with a single field-less error message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::fail_error(ErrorValue::new(message))
    }

    /// Creates a failure with a single error attached to `field`.
    pub fn fail_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::fail_error(ErrorValue::field(field, message))
    }

    /// Creates a failure from one pre-built error.
    pub fn fail_error(error: ErrorValue) -> Self {
        let mut errors = ErrorList::new();
        errors.push(error);
        Self {
            inner: Inner::Failure(errors),
        }
    }

    /// Creates a failure from a sequence of errors, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty: a failure without error content
    /// would break the aggregation algebra, which relies on
    /// Failure ⇒ non-empty errors.
    pub fn fail_with(errors: impl IntoIterator<Item = ErrorValue>) -> Self {
        let errors: ErrorList = errors.into_iter().collect();
        assert!(
            !errors.is_empty(),
            "a failure outcome requires at least one error"
        );
        Self {
            inner: Inner::Failure(errors),
        }
    }

    /// Internal failure constructor for error lists already known non-empty.
    pub(crate) fn from_error_list(errors: ErrorList) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            inner: Inner::Failure(errors),
        }
    }

    /// True iff this outcome is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.inner, Inner::Success(_))
    }

    /// True iff this outcome is a failure. Always `!is_success()`.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.inner, Inner::Failure(_))
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a failure. That is programmer misuse, not
    /// a domain condition; check [`is_success`](Self::is_success) first or
    /// use a combinator.
    #[must_use]
    pub fn value(&self) -> &T {
        match &self.inner {
            Inner::Success(value) => value,
            Inner::Failure(_) => panic!("no value on a failure outcome"),
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a failure.
    #[must_use]
    pub fn into_value(self) -> T {
        match self.inner {
            Inner::Success(value) => value,
            Inner::Failure(_) => panic!("no value on a failure outcome"),
        }
    }

    /// The failure errors, in their original order.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a success.
    #[must_use]
    pub fn errors(&self) -> &[ErrorValue] {
        match &self.inner {
            Inner::Success(_) => panic!("no errors on a success outcome"),
            Inner::Failure(errors) => errors,
        }
    }

    /// Consumes the outcome, returning the failure errors.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a success.
    #[must_use]
    pub fn into_errors(self) -> Vec<ErrorValue> {
        match self.inner {
            Inner::Success(_) => panic!("no errors on a success outcome"),
            Inner::Failure(errors) => errors.into_vec(),
        }
    }

    pub(crate) fn into_error_list(self) -> ErrorList {
        match self.inner {
            Inner::Success(_) => panic!("no errors on a success outcome"),
            Inner::Failure(errors) => errors,
        }
    }

    /// Converts to the untyped form, dropping the value on success.
    ///
    /// Failure is preserved exactly: same errors, same order.
    pub fn upcast(self) -> Outcome {
        match self.inner {
            Inner::Success(_) => Outcome::ok(),
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// Converts into a plain `Result` for `?`-style interop.
    ///
    /// Success maps to `Ok(value)`, failure to `Err` carrying the error
    /// sequence as an [`Errors`] value.
    pub fn into_result(self) -> Result<T, Errors> {
        match self.inner {
            Inner::Success(value) => Ok(value),
            Inner::Failure(errors) => Err(Errors::from_vec(errors.into_vec())),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Flattens a nested outcome.
    ///
    /// An outer success yields the inner outcome directly; an outer failure
    /// propagates its own errors and the inner outcome is never consulted.
    pub fn flatten(self) -> Outcome<T> {
        match self.inner {
            Inner::Success(inner) => inner,
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Errors> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{ErrorList, Inner, Outcome};
    use crate::error::ErrorValue;

    #[derive(Serialize)]
    #[serde(rename = "Outcome")]
    enum Repr<'a, T> {
        Success(&'a T),
        Failure(&'a [ErrorValue]),
    }

    #[derive(Deserialize)]
    #[serde(rename = "Outcome")]
    enum OwnedRepr<T> {
        Success(T),
        Failure(Vec<ErrorValue>),
    }

    impl<T: Serialize> Serialize for Outcome<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let repr = match &self.inner {
                Inner::Success(value) => Repr::Success(value),
                Inner::Failure(errors) => Repr::Failure(errors),
            };
            repr.serialize(serializer)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match OwnedRepr::deserialize(deserializer)? {
                OwnedRepr::Success(value) => Ok(Outcome::success(value)),
                OwnedRepr::Failure(errors) => {
                    if errors.is_empty() {
                        return Err(D::Error::custom(
                            "failure outcome must carry at least one error",
                        ));
                    }
                    Ok(Outcome::from_error_list(ErrorList::from_vec(errors)))
                }
            }
        }
    }
}
