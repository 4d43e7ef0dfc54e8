//! Singleton usage example for event-singleton.
//!
//! Demonstrates:
//! - Opting a type into the process-wide guard with `impl Singleton`
//! - A second construction failing with `SingletonError::Violation`
//! - Looking the instance up later through the type
//!
//! Run with: `cargo run --example singleton`

use event_singleton::{set_trace_callback, Singleton, SingletonError};
use std::sync::Arc;

/// Fields are private, so `UniqueObject::new` is the only way to build one.
struct UniqueObject {
    name: String,
}

impl Singleton for UniqueObject {}

impl UniqueObject {
    fn new(name: &str) -> Result<Arc<Self>, SingletonError> {
        Self::install(UniqueObject {
            name: name.to_string(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn main() {
    println!("=== event-singleton: Singleton ===\n");

    set_trace_callback(|event| println!("   [trace] {event}"));

    // -------------------------------------------------------------------------
    // 1. First construction
    // -------------------------------------------------------------------------
    println!("1. Constructing UniqueObject...");

    println!("   has_instance before: {}", UniqueObject::has_instance());
    let uo = UniqueObject::new("Unique Object").expect("first construction succeeds");
    println!("   has_instance after:  {}", UniqueObject::has_instance());

    // -------------------------------------------------------------------------
    // 2. Second construction is rejected
    // -------------------------------------------------------------------------
    println!("\n2. Constructing UniqueObject again...");

    match UniqueObject::new("Unique Object2") {
        Ok(_) => println!("   Unexpectedly constructed twice"),
        Err(e) => println!("   Error (expected): {}", e),
    }

    // -------------------------------------------------------------------------
    // 3. Lookup through the type
    // -------------------------------------------------------------------------
    println!("\n3. Looking the instance up through the type...");

    let looked_up = UniqueObject::instance().expect("instance exists");
    assert_eq!(uo.name(), looked_up.name());
    assert!(Arc::ptr_eq(&uo, &looked_up));
    println!("   Same instance: {}", looked_up.name());

    println!("\n=== Example Complete ===");
}
