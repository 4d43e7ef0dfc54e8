//! Integration tests for payload-less events.
//!
//! Covers subscription order, idempotent subscribe, unsubscribe, clear and the
//! `+=` / fluent shorthands.

use event_singleton::{Arity, Event, EventApi, EventError, Subscriber};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn func1() -> Option<i32> {
    None
}

fn func2() -> Option<i32> {
    Some(2)
}

fn tick() -> Option<i32> {
    Some(1)
}

fn tock() -> Option<i32> {
    Some(1)
}

#[test]
fn test_subscribers_keep_subscription_order() {
    let mut event: Event<u8> = Event::new();

    let handles: Vec<Subscriber<(), u8>> = (0..5u8)
        .map(|i| event.subscribe_no_arg(move || i))
        .collect();

    assert_eq!(event.subscribers(), handles.as_slice());
    assert_eq!(event.invoke(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_subscribe_same_handle_twice() {
    let mut event: Event = Event::new();
    let handle = Subscriber::no_arg(|| ());

    assert!(event.subscribe(handle.clone()));
    assert!(!event.subscribe(handle.clone()));

    assert_eq!(event.len(), 1);
}

#[test]
fn test_subscribe_same_function_twice() {
    let mut event: Event<Option<i32>> = Event::new();

    event.subscribe(Subscriber::from_fn(func1));
    event += Subscriber::from_fn(func1);

    assert_eq!(event.len(), 1);
}

#[test]
fn test_subscribe_same_function_through_closure_entry_point() {
    let mut event: Event<Option<i32>> = Event::new();

    let first = event.subscribe_no_arg(tick);
    let second = event.subscribe_no_arg(tick);
    event += Subscriber::no_arg(tick);

    assert_eq!(first, second);
    assert_eq!(event.len(), 1);

    event.unsubscribe(&Subscriber::from_fn(tick)).unwrap();
    assert!(event.is_empty());
}

#[test]
fn test_functions_with_identical_bodies_both_run() {
    let mut event: Event<Option<i32>> = Event::new();

    assert!(event.subscribe(Subscriber::from_fn(tick)));
    assert!(event.subscribe(Subscriber::from_fn(tock)));

    assert_eq!(event.len(), 2);
    assert_eq!(event.invoke(), vec![Some(1), Some(1)]);
}

#[test]
fn test_invoke_collects_all_results() {
    // Results come back in subscription order, "no value" included.
    let mut event: Event<Option<i32>> = Event::new();
    event.subscribe(Subscriber::from_fn(func1));
    event += Subscriber::from_fn(func2);

    assert_eq!(event.invoke(), vec![None, Some(2)]);
}

#[test]
fn test_unsubscribe_middle_keeps_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut event: Event = Event::new();

    let mut make = |name: &'static str| {
        let order = order.clone();
        event.subscribe_no_arg(move || order.lock().unwrap().push(name))
    };
    let _f1 = make("f1");
    let f2 = make("f2");
    let _f3 = make("f3");

    event.unsubscribe(&f2).unwrap();
    assert_eq!(event.invoke().len(), 2);
    assert_eq!(*order.lock().unwrap(), vec!["f1", "f3"]);
}

#[test]
fn test_unsubscribe_never_subscribed() {
    let mut event: Event = Event::new();
    let stranger = Subscriber::no_arg(|| ());

    assert_eq!(
        event.unsubscribe(&stranger),
        Err(EventError::SubscriberNotFound { arity: Arity::Zero })
    );
}

#[test]
fn test_unsubscribe_twice_fails_second_time() {
    let mut event: Event = Event::new();
    let handle = event.subscribe_no_arg(|| ());

    assert!(event.unsubscribe(&handle).is_ok());
    assert!(event.unsubscribe(&handle).is_err());
}

#[test]
fn test_clear_then_invoke_is_empty() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut event: Event = Event::new();

    for _ in 0..3 {
        let calls = calls.clone();
        event.subscribe_no_arg(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        });
    }

    event.clear();
    assert!(event.invoke().is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // idempotent
    event.clear();
    assert!(event.is_empty());
}

#[test]
fn test_fluent_subscribe_and_unsubscribe() {
    let a = Subscriber::no_arg(|| 'a');
    let b = Subscriber::no_arg(|| 'b');

    let event: Event<char> = Event::new()
        .with_subscriber(a.clone())
        .with_subscriber(b.clone());
    assert_eq!(event.invoke(), vec!['a', 'b']);

    let event = event.without_subscriber(&a).unwrap();
    assert_eq!(event.invoke(), vec!['b']);

    let missing = event.without_subscriber(&a);
    assert!(missing.is_err());
}

#[test]
fn test_iteration_is_restartable() {
    let mut event: Event<i32> = Event::new();
    event.subscribe_no_arg(|| 1);
    event.subscribe_no_arg(|| 2);

    let first: Vec<i32> = event.iter().map(|s| s.call(&())).collect();
    let second: Vec<i32> = (&event).into_iter().map(|s| s.call(&())).collect();

    assert_eq!(first, vec![1, 2]);
    assert_eq!(first, second);
}

#[test]
fn test_try_invoke_aborts_on_first_error() {
    let later = Arc::new(AtomicUsize::new(0));
    let later_clone = later.clone();

    let mut event: Event<Result<&'static str, String>> = Event::new();
    event.subscribe_no_arg(|| Ok("first"));
    event.subscribe_no_arg(|| Err("second failed".to_string()));
    event.subscribe_no_arg(move || {
        later_clone.fetch_add(1, Ordering::SeqCst);
        Ok("third")
    });

    assert_eq!(event.try_invoke(), Err("second failed".to_string()));
    assert_eq!(later.load(Ordering::SeqCst), 0);
}

#[test]
fn test_event_shared_across_threads() {
    let hits = Arc::new(AtomicUsize::new(0));
    let event = Arc::new(Mutex::new(Event::<()>::new()));

    {
        let hits = hits.clone();
        event.lock().unwrap().subscribe_no_arg(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        });
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let event = event.clone();
            std::thread::spawn(move || {
                event.lock().unwrap().invoke();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(hits.load(Ordering::SeqCst), 4);
}
