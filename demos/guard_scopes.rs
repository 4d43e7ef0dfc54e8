//! Guard scope example for event-singleton.
//!
//! Demonstrates:
//! - Isolated guards created with `define_guard!`
//! - Lazy construction with `construct_with`
//! - Concurrent first construction producing exactly one instance
//!
//! Run with: `cargo run --example guard_scopes`

use event_singleton::define_guard;
use std::sync::Arc;
use std::thread;

define_guard!(primary);
define_guard!(replica);

#[derive(Debug)]
struct Connection {
    url: String,
}

fn main() {
    println!("=== event-singleton: Guard Scopes ===\n");

    // -------------------------------------------------------------------------
    // 1. One instance per guard
    // -------------------------------------------------------------------------
    println!("1. Constructing a Connection in each guard...");

    primary::construct(Connection {
        url: "db://primary".to_string(),
    })
    .expect("primary is empty");
    replica::construct(Connection {
        url: "db://replica".to_string(),
    })
    .expect("replica is empty");

    println!("   primary: {}", primary::instance::<Connection>().unwrap().url);
    println!("   replica: {}", replica::instance::<Connection>().unwrap().url);

    // -------------------------------------------------------------------------
    // 2. construct_with skips init on violation
    // -------------------------------------------------------------------------
    println!("\n2. Lazy construction...");

    let rejected = primary::construct_with(|| {
        println!("   (never printed)");
        Connection {
            url: "db://other".to_string(),
        }
    });
    println!("   Rejected: {}", rejected.unwrap_err());

    // -------------------------------------------------------------------------
    // 3. Racing threads
    // -------------------------------------------------------------------------
    println!("\n3. Racing eight threads to construct a String...");

    let handles: Vec<_> = (0..8)
        .map(|i| thread::spawn(move || primary::construct(format!("winner is thread {i}")).is_ok()))
        .collect();
    let winners = handles
        .into_iter()
        .filter_map(|h| h.join().ok())
        .filter(|won| *won)
        .count();

    let message: Arc<String> = primary::instance().unwrap();
    println!("   {} winner(s): {}", winners, message);

    println!("\n=== Example Complete ===");
}
