//! # Event Singleton
//!
//! Two small building blocks:
//!
//! - **Events**: ordered publish/subscribe containers whose subscribers take either
//!   no argument or a reference to the payload. Invoking an event calls every
//!   subscriber in subscription order and collects what they return.
//! - **Singleton guards**: once-only construction per type, with the instance
//!   retrievable afterwards and a distinguishable error on a second construction.
//!
//! ## Quick Start
//!
//! ```rust
//! use event_singleton::{DataEvent, Event, EventApi, Subscriber};
//!
//! fn func1() {
//!     println!("Hello World! (from func1)");
//! }
//!
//! let mut event: Event = Event::new();
//! let f1 = Subscriber::from_fn(func1);
//! event.subscribe(f1.clone());
//! event.subscribe(f1.clone()); // already subscribed: no-op
//! assert_eq!(event.invoke(), vec![()]);
//!
//! let mut data_event: DataEvent<String> = DataEvent::new();
//! data_event += Subscriber::with_arg(|message: &String| println!("{message} (from func3)"));
//! data_event += Subscriber::from_fn(func1);
//! data_event.invoke("Hello!".to_string());
//! ```
//!
//! ```rust
//! use event_singleton::define_guard;
//!
//! define_guard!(app);
//!
//! app::construct(42i32).unwrap();
//! assert!(app::construct(7i32).is_err());
//! assert_eq!(*app::instance::<i32>().unwrap(), 42);
//! ```
//!
//! ## Main Items
//!
//! - [`Event`] / [`DataEvent`] - events without and with payload
//! - [`EventApi`] - subscribe, unsubscribe, clear and iterate
//! - [`Subscriber`] - identity-compared callback handle with a fixed [`Arity`]
//! - [`Singleton`] - opt-in trait for process-wide singletons
//! - [`define_guard`] - isolated guard scopes
//! - [`GuardApi`] - the guard operations, for manual implementations

mod error;
mod event;
mod event_api;
mod guard_event;
mod guard_trait;
mod macros;
mod singleton;
mod subscriber;
mod subscriber_list;

pub use error::{EventError, SingletonError};
pub use event::{DataEvent, Event};
pub use event_api::EventApi;
pub use guard_event::GuardEvent;
pub use guard_trait::{GuardApi, GuardSlots, GuardTrace, TraceCallback};
pub use singleton::{
    clear_trace_callback, reset, set_trace_callback, GlobalGuard, Singleton, GLOBAL,
};
pub use subscriber::{Arity, Subscriber};
pub use subscriber_list::SubscriberList;
