//! The combinator surface lifted over pending computations.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::executor::block_on;
use outcome::{
    combine_async, combine_retain_values_async, MaybeFutureExt, Outcome, OutcomeFutureExt,
};

/// Resolves on the second poll. Used to stagger completion order.
struct YieldOnce<T> {
    value: Option<T>,
    yielded: bool,
}

fn yield_once<T>(value: T) -> YieldOnce<T> {
    YieldOnce {
        value: Some(value),
        yielded: false,
    }
}

impl<T: Unpin> Future for YieldOnce<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        if self.yielded {
            Poll::Ready(self.value.take().expect("polled after completion"))
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

async fn lookup(id: u32) -> Outcome<&'static str> {
    if id == 1 {
        Outcome::success("alice")
    } else {
        Outcome::fail("customer not found")
    }
}

#[test]
fn pending_chain_mirrors_the_sync_chain() {
    let out = block_on(
        lookup(1)
            .ensure_success(|name| !name.is_empty(), "customer has no name")
            .map_success(|name| format!("hello, {name}")),
    );
    assert_eq!(out, Outcome::success("hello, alice".to_owned()));
}

#[test]
fn pending_failure_skips_later_steps() {
    let mapped = Cell::new(false);
    let out = block_on(lookup(9).map_success(|name| {
        mapped.set(true);
        name.to_owned()
    }));
    assert!(!mapped.get());
    assert_eq!(out.errors()[0].message(), "customer not found");
}

#[test]
fn both_operands_pending() {
    let out = block_on(
        lookup(1).and_then(|name| async move { Outcome::success(name.len()) }),
    );
    assert_eq!(out, Outcome::success(5));
}

#[test]
fn resolve_unifies_a_pending_chain() {
    let s = block_on(lookup(9).resolve(|o| {
        if o.is_success() {
            o.into_value().to_owned()
        } else {
            outcome::format_errors_default(o.errors())
        }
    }));
    assert_eq!(s, "customer not found");
}

#[test]
fn pending_option_bridges_like_the_sync_bridge() {
    let out = block_on(async { Some(3) }.into_outcome_msg("missing"));
    assert_eq!(out, Outcome::success(3));
}

#[test]
fn combine_async_orders_by_input_not_completion() {
    // The first input yields before resolving, so the second completes
    // first under a single-threaded executor. Aggregation order must still
    // follow input order.
    let slow_first: Pin<Box<dyn Future<Output = Outcome>>> = Box::pin(async {
        yield_once(()).await;
        Outcome::fail("first input")
    });
    let fast_second: Pin<Box<dyn Future<Output = Outcome>>> =
        Box::pin(async { Outcome::<()>::fail("second input") });

    let out = block_on(combine_async(vec![slow_first, fast_second]));
    let messages: Vec<_> = out.errors().iter().map(|e| e.message()).collect();
    assert_eq!(messages, ["first input", "second input"]);
}

#[test]
fn combine_async_waits_for_all_inputs() {
    let finished = Cell::new(false);
    let out = block_on(combine_async(vec![
        Box::pin(async { Outcome::<()>::fail("early failure") })
            as Pin<Box<dyn Future<Output = Outcome> + '_>>,
        Box::pin(async {
            yield_once(()).await;
            finished.set(true);
            Outcome::ok()
        }),
    ]));
    assert!(finished.get());
    assert_eq!(out.errors()[0].message(), "early failure");
}

#[test]
fn combine_retain_values_async_keeps_input_order() {
    let slow: Pin<Box<dyn Future<Output = Outcome<i32>>>> = Box::pin(async {
        yield_once(()).await;
        Outcome::success(1)
    });
    let fast: Pin<Box<dyn Future<Output = Outcome<i32>>>> =
        Box::pin(async { Outcome::success(2) });

    let out = block_on(combine_retain_values_async(vec![slow, fast]));
    assert_eq!(out, Outcome::success(vec![1, 2]));
}

#[test]
fn panics_unwind_through_the_adapter() {
    let result = std::panic::catch_unwind(|| {
        block_on(lookup(1).map_success(|_| -> i32 { panic!("transform blew up") }))
    });
    assert!(result.is_err());
}
