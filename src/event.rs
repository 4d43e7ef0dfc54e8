//! Concrete event types.
//!
//! [`Event`] carries no payload: every subscriber is called with nothing.
//! [`DataEvent`] hands a payload to one-argument subscribers, calls zero-argument
//! subscribers without it, and remembers the most recently sent payload.
//!
//! # Examples
//!
//! ```rust
//! use event_singleton::{DataEvent, Event, EventApi, Subscriber};
//!
//! let mut event: Event<Option<i32>> = Event::new();
//! event.subscribe_no_arg(|| None);
//! event += Subscriber::no_arg(|| Some(2));
//! assert_eq!(event.invoke(), vec![None, Some(2)]);
//!
//! let mut data_event: DataEvent<String> = DataEvent::new();
//! data_event.subscribe_with_arg(|message: &String| println!("{message}"));
//! data_event.subscribe_no_arg(|| println!("called without data"));
//! data_event.invoke("Hello!".to_string());
//! assert_eq!(data_event.last_sent_data().map(String::as_str), Some("Hello!"));
//! ```

use std::fmt;
use std::ops::AddAssign;
use std::slice;

use crate::{EventApi, Subscriber, SubscriberList};

// -------------------------------------------------------------------------------------------------
// Event
// -------------------------------------------------------------------------------------------------

/// An event without payload.
///
/// `R` is the return type shared by all subscribers; use `()` when they return
/// nothing, or an `Option`/enum when some of them do.
pub struct Event<R = ()> {
    subscribers: SubscriberList<(), R>,
}

impl<R> Event<R> {
    /// Creates an event with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
        }
    }

    /// Calls every subscriber in subscription order and returns their results.
    ///
    /// All subscribers run even if some return an error value; see
    /// [`try_invoke`](Event::try_invoke) for the short-circuiting form.
    pub fn invoke(&self) -> Vec<R> {
        log::trace!("invoke: {} subscribers", self.subscribers.len());
        self.subscribers.dispatch(&())
    }
}

impl<U, E> Event<Result<U, E>> {
    /// Calls subscribers in order until one returns `Err`.
    ///
    /// Subscribers after the failing one are not called.
    pub fn try_invoke(&self) -> Result<Vec<U>, E> {
        log::trace!("try_invoke: {} subscribers", self.subscribers.len());
        self.subscribers.try_dispatch(&())
    }
}

impl<R> EventApi for Event<R> {
    type Payload = ();
    type Output = R;

    fn subscriber_list(&self) -> &SubscriberList<(), R> {
        &self.subscribers
    }

    fn subscriber_list_mut(&mut self) -> &mut SubscriberList<(), R> {
        &mut self.subscribers
    }
}

impl<R> Default for Event<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Event<R> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<R> fmt::Debug for Event<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

impl<R> AddAssign<Subscriber<(), R>> for Event<R> {
    fn add_assign(&mut self, subscriber: Subscriber<(), R>) {
        self.subscribe(subscriber);
    }
}

impl<'a, R> IntoIterator for &'a Event<R> {
    type Item = &'a Subscriber<(), R>;
    type IntoIter = slice::Iter<'a, Subscriber<(), R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.subscribers.iter()
    }
}

// -------------------------------------------------------------------------------------------------
// DataEvent
// -------------------------------------------------------------------------------------------------

/// An event that transfers a `T` to its subscribers.
///
/// Subscribers built with [`Subscriber::with_arg`] receive `&T`, those built with
/// [`Subscriber::no_arg`] are called without it. Both kinds can be mixed freely.
pub struct DataEvent<T, R = ()> {
    subscribers: SubscriberList<T, R>,
    last_sent_data: Option<T>,
}

impl<T, R> DataEvent<T, R> {
    /// Creates an event whose last sent data is `None` until the first invoke.
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
            last_sent_data: None,
        }
    }

    /// Creates an event that reports `default` as last sent data until the first invoke.
    pub fn with_default(default: T) -> Self {
        Self {
            subscribers: SubscriberList::new(),
            last_sent_data: Some(default),
        }
    }

    /// The payload of the most recent invoke, or the configured default.
    pub fn last_sent_data(&self) -> Option<&T> {
        self.last_sent_data.as_ref()
    }

    /// Stores `data` as last sent data, then calls every subscriber in order.
    pub fn invoke(&mut self, data: T) -> Vec<R> {
        log::trace!("invoke: {} subscribers", self.subscribers.len());
        let data = self.last_sent_data.insert(data);
        self.subscribers.dispatch(data)
    }
}

impl<T, U, E> DataEvent<T, Result<U, E>> {
    /// Stores `data` as last sent data, then calls subscribers until one returns `Err`.
    pub fn try_invoke(&mut self, data: T) -> Result<Vec<U>, E> {
        log::trace!("try_invoke: {} subscribers", self.subscribers.len());
        let data = self.last_sent_data.insert(data);
        self.subscribers.try_dispatch(data)
    }
}

impl<T, R> EventApi for DataEvent<T, R> {
    type Payload = T;
    type Output = R;

    fn subscriber_list(&self) -> &SubscriberList<T, R> {
        &self.subscribers
    }

    fn subscriber_list_mut(&mut self) -> &mut SubscriberList<T, R> {
        &mut self.subscribers
    }
}

impl<T, R> Default for DataEvent<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R> Clone for DataEvent<T, R> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
            last_sent_data: self.last_sent_data.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for DataEvent<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataEvent")
            .field("subscribers", &self.subscribers)
            .field("last_sent_data", &self.last_sent_data)
            .finish()
    }
}

impl<T, R> AddAssign<Subscriber<T, R>> for DataEvent<T, R> {
    fn add_assign(&mut self, subscriber: Subscriber<T, R>) {
        self.subscribe(subscriber);
    }
}

impl<'a, T, R> IntoIterator for &'a DataEvent<T, R> {
    type Item = &'a Subscriber<T, R>;
    type IntoIter = slice::Iter<'a, Subscriber<T, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.subscribers.iter()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
