//! Scheduling and resource-safety tests for the async composed types.
//!
//! Every timing test runs on a paused tokio clock, so elapsed times are
//! exact and the tests do not sleep for real.
#![cfg(feature = "async")]

use std::cell::{Cell, RefCell};
use std::panic::AssertUnwindSafe;
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use kindred::effect::async_result::{self, AsyncResult};
use kindred::effect::{Async, async_option};
use kindred::typeclass::Apply;
use tokio::time::Instant;

type Log = Rc<RefCell<Vec<String>>>;

/// A step that logs when it starts and when it finishes.
fn step(log: &Log, label: &'static str, millis: u64, outcome: Result<u64, String>) -> AsyncResult<String, u64> {
    let log = Rc::clone(log);
    Async::new(move || async move {
        log.borrow_mut().push(format!("start {label}"));
        tokio::time::sleep(Duration::from_millis(millis)).await;
        log.borrow_mut().push(format!("end {label}"));
        outcome
    })
}

fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// The paused clock advances in whole timer ticks, so allow a few ticks of slack.
fn assert_elapsed(elapsed: Duration, expected_millis: u64) {
    let expected = Duration::from_millis(expected_millis);
    assert!(
        elapsed >= expected && elapsed <= expected + Duration::from_millis(5),
        "expected about {expected:?}, got {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn seq_completes_effects_in_index_order() {
    let log = new_log();
    let start = Instant::now();
    let outcome = async_result::sequence_array_seq(vec![
        step(&log, "a", 30, Ok(1)),
        step(&log, "b", 10, Ok(2)),
        step(&log, "c", 20, Ok(3)),
    ])
    .await;

    assert_eq!(outcome, Ok(vec![1, 2, 3]));
    assert_eq!(
        entries(&log),
        vec!["start a", "end a", "start b", "end b", "start c", "end c"]
    );
    assert_elapsed(start.elapsed(), 60);
}

#[tokio::test(start_paused = true)]
async fn par_interleaves_effects_but_keeps_result_order() {
    let log = new_log();
    let start = Instant::now();
    let outcome = async_result::sequence_array_par(vec![
        step(&log, "a", 30, Ok(1)),
        step(&log, "b", 10, Ok(2)),
        step(&log, "c", 20, Ok(3)),
    ])
    .await;

    assert_eq!(outcome, Ok(vec![1, 2, 3]));
    assert_eq!(
        entries(&log),
        vec!["start a", "start b", "start c", "end b", "end c", "end a"]
    );
    assert_elapsed(start.elapsed(), 30);
}

#[tokio::test(start_paused = true)]
async fn seq_stops_after_first_failure() {
    let log = new_log();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let step_log = Rc::clone(&log);
    let outcome = async_result::traverse_array_seq(vec![1_u64, 2, 3], move |n| {
        counter.set(counter.get() + 1);
        let outcome = if n == 2 { Err(format!("item {n} failed")) } else { Ok(n) };
        step(&step_log, "item", 10, outcome)
    })
    .await;

    assert_eq!(outcome, Err("item 2 failed".to_string()));
    assert_eq!(calls.get(), 2);
    assert_eq!(entries(&log).len(), 4);
}

#[tokio::test(start_paused = true)]
async fn par_reports_failure_with_smallest_index() {
    let log = new_log();
    let outcome = async_result::sequence_array_par(vec![
        step(&log, "a", 10, Ok(1)),
        step(&log, "b", 30, Err("b failed".to_string())),
        step(&log, "c", 5, Err("c failed".to_string())),
    ])
    .await;

    assert_eq!(outcome, Err("b failed".to_string()));
    assert_eq!(entries(&log).len(), 6);
}

#[tokio::test(start_paused = true)]
async fn validated_par_accumulates_in_index_order() {
    let brand = async_result::validated_par::<Vec<String>>();
    let slow = Async::new(|| async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Err::<u8, _>(vec!["slow".to_string()])
    });
    let fast = Async::new(|| async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Err::<u8, _>(vec!["fast".to_string()])
    });
    let start = Instant::now();
    let outcome = brand.map2(slow, fast, |a, b| (a, b)).await;

    assert_eq!(outcome, Err(vec!["slow".to_string(), "fast".to_string()]));
    assert_elapsed(start.elapsed(), 50);
}

#[tokio::test(start_paused = true)]
async fn seq_and_par_brands_differ_only_in_timing() {
    let log = new_log();
    let start = Instant::now();
    let sequential = async_result::seq::<String>()
        .map2(step(&log, "a", 40, Ok(1)), step(&log, "b", 40, Ok(2)), |a, b| a + b)
        .await;
    let sequential_elapsed = start.elapsed();

    let start = Instant::now();
    let parallel = async_result::par::<String>()
        .map2(step(&log, "a", 40, Ok(1)), step(&log, "b", 40, Ok(2)), |a, b| a + b)
        .await;

    assert_eq!(sequential, parallel);
    assert_elapsed(sequential_elapsed, 80);
    assert_elapsed(start.elapsed(), 40);
}

#[tokio::test]
async fn bracket_releases_once_when_use_fails() {
    let releases = Rc::new(Cell::new(0));
    let counter = Rc::clone(&releases);
    let outcome = async_result::bracket(
        async_result::succeed::<String, _>("connection"),
        |_| async_result::fail::<String, u8>("boom".to_string()),
        move |_| {
            counter.set(counter.get() + 1);
            async_result::succeed(())
        },
    )
    .await;

    assert_eq!(outcome, Err("boom".to_string()));
    assert_eq!(releases.get(), 1);
}

#[tokio::test]
async fn bracket_releases_once_when_use_panics() {
    let releases = Rc::new(Cell::new(0));
    let counter = Rc::clone(&releases);
    let guarded = async_result::bracket(
        async_result::succeed::<String, _>("connection"),
        |_| -> AsyncResult<String, u8> { panic!("use exploded") },
        move |_| {
            counter.set(counter.get() + 1);
            async_result::succeed(())
        },
    );
    let unwound = AssertUnwindSafe(guarded).catch_unwind().await;

    assert!(unwound.is_err());
    assert_eq!(releases.get(), 1);
}

#[tokio::test]
async fn bracket_skips_release_when_acquire_fails() {
    let releases = Rc::new(Cell::new(0));
    let counter = Rc::clone(&releases);
    let outcome = async_result::bracket(
        async_result::fail::<String, &str>("refused".to_string()),
        |_| async_result::succeed::<String, u8>(1),
        move |_| {
            counter.set(counter.get() + 1);
            async_result::succeed(())
        },
    )
    .await;

    assert_eq!(outcome, Err("refused".to_string()));
    assert_eq!(releases.get(), 0);
}

#[tokio::test]
async fn async_option_converts_to_async_result() {
    let found = async_option::to_async_result(async_option::some(5), || "missing").await;
    let missing = async_option::to_async_result(async_option::none::<i32>(), || "missing").await;
    assert_eq!(found, Ok(5));
    assert_eq!(missing, Err("missing"));
}
