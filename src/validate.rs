//! Bridge to external object validators.
//!
//! A validator is any function that inspects a value and reports zero or
//! more errors; this crate takes no position on how the report is produced
//! (attribute scan, schema check, hand-written rules).

use std::future::Future;

use crate::outcome::{ErrorList, Inner, Outcome};
use crate::ErrorValue;

impl<T> Outcome<T> {
    /// Runs an external validator against the carried value.
    ///
    /// An empty report keeps the value; a non-empty report becomes a
    /// failure with the reported errors in report order. A failure passes
    /// through unchanged and the validator never runs.
    pub fn validate_with(self, f: impl FnOnce(&T) -> Vec<ErrorValue>) -> Outcome<T> {
        match self.inner {
            Inner::Success(value) => {
                let report = f(&value);
                if report.is_empty() {
                    Outcome::success(value)
                } else {
                    Outcome::from_error_list(ErrorList::from_vec(report))
                }
            }
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }

    /// [`validate_with`](Self::validate_with) with a pending validator.
    pub async fn validate_with_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Vec<ErrorValue>>,
    {
        match self.inner {
            Inner::Success(value) => {
                let report = f(&value).await;
                if report.is_empty() {
                    Outcome::success(value)
                } else {
                    Outcome::from_error_list(ErrorList::from_vec(report))
                }
            }
            Inner::Failure(errors) => Outcome::from_error_list(errors),
        }
    }
}
