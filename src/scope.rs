//! Ties a scoped external resource to the outcome of the work inside it.
//!
//! The resource follows an acquire/complete/release protocol: the caller
//! acquires it, runs a chain inside it, and the scope is completed only
//! when the chain succeeds. Release on every other exit path, including
//! unwind, is the implementor's drop obligation, so nothing here needs a
//! catch.

use std::future::Future;

use crate::Outcome;

/// A scoped resource that commits on [`complete`](Self::complete) and
/// releases on drop otherwise.
///
/// Implementors must make dropping without `complete` release the
/// resource (roll back, close, abandon), so every exit path is covered by
/// drop semantics alone.
pub trait UnitOfWork {
    /// Commits the scope's work. Consumes the scope, so a completed scope
    /// cannot also be released.
    fn complete(self);
}

/// Runs `f` inside `scope`, completing the scope iff the outcome succeeds.
///
/// On failure (or unwind) the scope is simply dropped, which releases it.
/// The outcome is returned unchanged either way.
///
/// # Example
/// ```
/// use outcome::{within_scope, Outcome, UnitOfWork};
///
/// struct Tx { committed: bool }
/// impl UnitOfWork for Tx {
///     fn complete(mut self) { self.committed = true; }
/// }
///
/// let out = within_scope(Tx { committed: false }, || Outcome::success(42));
/// assert_eq!(out, Outcome::success(42));
/// ```
pub fn within_scope<T, S, F>(scope: S, f: F) -> Outcome<T>
where
    S: UnitOfWork,
    F: FnOnce() -> Outcome<T>,
{
    let outcome = f();
    if outcome.is_success() {
        tracing::trace!("scope completed");
        scope.complete();
    } else {
        tracing::trace!("scope abandoned");
        drop(scope);
    }
    outcome
}

/// [`within_scope`] with a pending chain.
///
/// The scope is held across the await; dropping the composed future before
/// completion drops the scope, releasing it.
pub async fn within_scope_async<T, S, Fut>(scope: S, fut: Fut) -> Outcome<T>
where
    S: UnitOfWork,
    Fut: Future<Output = Outcome<T>>,
{
    let outcome = fut.await;
    if outcome.is_success() {
        tracing::trace!("scope completed");
        scope.complete();
    } else {
        tracing::trace!("scope abandoned");
        drop(scope);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Fate {
        Pending,
        Completed,
        Released,
    }

    struct Probe {
        fate: Rc<Cell<Fate>>,
    }

    impl Probe {
        fn new() -> (Self, Rc<Cell<Fate>>) {
            let fate = Rc::new(Cell::new(Fate::Pending));
            (Self { fate: fate.clone() }, fate)
        }
    }

    impl UnitOfWork for Probe {
        fn complete(self) {
            self.fate.set(Fate::Completed);
            // Completed scopes must not also release.
            std::mem::forget(self);
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.fate.set(Fate::Released);
        }
    }

    #[test]
    fn success_completes_the_scope() {
        let (probe, fate) = Probe::new();
        let out = within_scope(probe, || Outcome::success(1));
        assert_eq!(out, Outcome::success(1));
        assert_eq!(fate.get(), Fate::Completed);
    }

    #[test]
    fn failure_releases_the_scope() {
        let (probe, fate) = Probe::new();
        let out = within_scope(probe, || Outcome::<i32>::fail("no"));
        assert!(out.is_failure());
        assert_eq!(fate.get(), Fate::Released);
    }

    #[test]
    fn unwind_releases_the_scope() {
        let (probe, fate) = Probe::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            within_scope(probe, || -> Outcome<i32> { panic!("boom") })
        }));
        assert!(result.is_err());
        assert_eq!(fate.get(), Fate::Released);
    }

    #[test]
    fn async_scope_mirrors_sync() {
        let (probe, fate) = Probe::new();
        let out = block_on(within_scope_async(probe, async { Outcome::success(2) }));
        assert_eq!(out, Outcome::success(2));
        assert_eq!(fate.get(), Fate::Completed);

        let (probe, fate) = Probe::new();
        let out = block_on(within_scope_async(probe, async {
            Outcome::<i32>::fail("no")
        }));
        assert!(out.is_failure());
        assert_eq!(fate.get(), Fate::Released);
    }

    #[test]
    fn dropping_the_composed_future_releases_the_scope() {
        let (probe, fate) = Probe::new();
        let fut = within_scope_async(probe, async { Outcome::success(3) });
        drop(fut);
        assert_eq!(fate.get(), Fate::Released);
    }
}
