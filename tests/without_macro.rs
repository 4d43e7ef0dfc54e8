//! Integration tests using a singleton guard WITHOUT the macro.
//!
//! This shows the manual implementation approach: provide the two statics and
//! implement `GuardApi` by hand. Every operation comes from the trait's defaults.
//!
//! NOTE: All tests use #[serial] because they share the same static guard (MY_GUARD).

use event_singleton::{GuardApi, GuardSlots, GuardTrace, SingletonError};
use serial_test::serial;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, Mutex};

// ============================================================================
// Manual Guard Implementation (Without Macro)
// ============================================================================

static MY_SLOTS: GuardSlots = LazyLock::new(|| Mutex::new(HashMap::new()));

static MY_TRACE: GuardTrace = LazyLock::new(|| Mutex::new(None));

struct MyGuard;

impl GuardApi for MyGuard {
    fn slots() -> &'static GuardSlots {
        &MY_SLOTS
    }

    fn trace() -> &'static GuardTrace {
        &MY_TRACE
    }
}

const MY_GUARD: MyGuard = MyGuard;

// ============================================================================
// Tests Using Manual Implementation
// ============================================================================

#[test]
#[serial]
fn test_basic_construct_and_instance() {
    MY_GUARD.reset();

    let created = MY_GUARD.construct(42i32).unwrap();
    let value: Arc<i32> = MY_GUARD.instance().unwrap();

    assert_eq!(*value, 42);
    assert!(Arc::ptr_eq(&created, &value));
}

#[test]
#[serial]
fn test_construct_multiple_types() {
    MY_GUARD.reset();

    MY_GUARD.construct(100u32).unwrap();
    MY_GUARD.construct("Hello".to_string()).unwrap();
    MY_GUARD.construct(2.5f64).unwrap();

    assert_eq!(*MY_GUARD.instance::<u32>().unwrap(), 100);
    assert_eq!(&**MY_GUARD.instance::<String>().unwrap(), "Hello");
    assert_eq!(*MY_GUARD.instance::<f64>().unwrap(), 2.5);
}

#[test]
#[serial]
fn test_second_construction_leaves_slot_untouched() {
    MY_GUARD.reset();

    MY_GUARD.construct(10u16).unwrap();
    let err = MY_GUARD.construct(20u16).unwrap_err();

    assert_eq!(err, SingletonError::Violation { type_name: "u16" });
    assert_eq!(*MY_GUARD.instance::<u16>().unwrap(), 10);
}

#[test]
#[serial]
fn test_has_instance_check() {
    MY_GUARD.reset();

    assert!(!MY_GUARD.has_instance::<i64>());
    MY_GUARD.construct(999i64).unwrap();
    assert!(MY_GUARD.has_instance::<i64>());
    assert!(!MY_GUARD.has_instance::<i8>());
}

#[test]
#[serial]
fn test_with_tracing() {
    MY_GUARD.reset();

    let event_count = Arc::new(AtomicUsize::new(0));
    let event_count_clone = Arc::clone(&event_count);

    MY_GUARD.set_trace_callback(move |_event| {
        event_count_clone.fetch_add(1, Ordering::SeqCst);
    });

    MY_GUARD.construct(777i32).unwrap(); // +1 event
    let _: Arc<i32> = MY_GUARD.instance().unwrap(); // +1 event
    MY_GUARD.has_instance::<i32>(); // +1 event
    let _ = MY_GUARD.construct(778i32); // +1 event

    assert_eq!(event_count.load(Ordering::SeqCst), 4);

    MY_GUARD.clear_trace_callback();
}

#[test]
#[serial]
fn test_construct_with_panicking_init_leaves_slot_empty() {
    MY_GUARD.reset();

    let outcome = std::panic::catch_unwind(|| {
        MY_GUARD.construct_with(|| -> u128 { panic!("init failed") })
    });
    assert!(outcome.is_err());

    // The slot is still free.
    assert!(!MY_GUARD.has_instance::<u128>());
    assert_eq!(*MY_GUARD.construct(5u128).unwrap(), 5);
}
