//! Event usage example for event-singleton.
//!
//! Demonstrates:
//! - Subscribing plain functions and closures to an `Event`
//! - Collecting subscriber results in subscription order
//! - Unsubscribing and clearing
//! - Mixing zero- and one-argument subscribers on a `DataEvent`
//!
//! Run with: `cargo run --example events`

use event_singleton::{DataEvent, Event, EventApi, Subscriber};

fn func1() -> Option<i32> {
    println!("   Hello World! (from func1)");
    None
}

fn func2() -> Option<i32> {
    println!("   Hello World! (from func2)");
    Some(2)
}

fn func3(message: &String) -> Option<i32> {
    println!("   {message} (from func3)");
    None
}

fn main() {
    println!("=== event-singleton: Events ===\n");

    // -------------------------------------------------------------------------
    // 1. Basic event
    // -------------------------------------------------------------------------
    println!("1. Subscribing func1 and func2, then invoking...");

    let mut event: Event<Option<i32>> = Event::new();
    event.subscribe(Subscriber::from_fn(func1));
    event += Subscriber::from_fn(func2);

    let result = event.invoke();
    assert_eq!(result, vec![None, Some(2)]);
    println!("   Results: {:?}", result);

    // -------------------------------------------------------------------------
    // 2. Unsubscribe
    // -------------------------------------------------------------------------
    println!("\n2. Unsubscribing func2...");

    event
        .unsubscribe(&Subscriber::from_fn(func2))
        .expect("func2 was subscribed");
    event.invoke();

    // -------------------------------------------------------------------------
    // 3. Clear
    // -------------------------------------------------------------------------
    println!("\n3. Clearing all subscribers...");

    event.clear();
    println!("   Results after clear: {:?}", event.invoke());

    // -------------------------------------------------------------------------
    // 4. DataEvent
    // -------------------------------------------------------------------------
    println!("\n4. DataEvent with a one-argument and a zero-argument subscriber...");

    let mut data_event: DataEvent<String, Option<i32>> = DataEvent::new();
    data_event += Subscriber::from_fn_with_arg(func3);
    data_event += Subscriber::from_fn(func1);
    data_event.invoke("Hello!".to_string());

    println!("   Last sent data: {:?}", data_event.last_sent_data());

    // -------------------------------------------------------------------------
    // 5. Unsubscribing something that was never subscribed
    // -------------------------------------------------------------------------
    println!("\n5. Unsubscribing an unknown subscriber...");

    match data_event.unsubscribe(&Subscriber::from_fn(func2)) {
        Ok(_) => println!("   Unexpectedly removed"),
        Err(e) => println!("   Error (expected): {}", e),
    }

    println!("\n=== Example Complete ===");
}
