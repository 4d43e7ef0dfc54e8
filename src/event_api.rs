//! Core trait defining subscriber management.
//!
//! This module provides the `EventApi` trait with default implementations for
//! subscribing, unsubscribing, clearing and iterating subscribers. Implementors only
//! supply access to their [`SubscriberList`]; invocation stays on the concrete event
//! types because its signature depends on whether the event carries a payload.

use std::slice;

use crate::{EventError, Subscriber, SubscriberList};

/// Core trait defining subscriber management for events.
///
/// Subscribers are kept in subscription order and never duplicated. Unsubscribing
/// removes a single entry and leaves the others in place.
pub trait EventApi {
    /// The value handed to one-argument subscribers on invoke.
    type Payload;
    /// What each subscriber returns.
    type Output;

    // -------------------------------------------------------------------------------------------------
    // Storage
    // -------------------------------------------------------------------------------------------------

    /// Access the subscriber list.
    fn subscriber_list(&self) -> &SubscriberList<Self::Payload, Self::Output>;

    /// Mutable access to the subscriber list.
    fn subscriber_list_mut(&mut self) -> &mut SubscriberList<Self::Payload, Self::Output>;

    // -------------------------------------------------------------------------------------------------
    // Subscription
    // -------------------------------------------------------------------------------------------------

    /// Subscribe a handle to the event.
    ///
    /// Subscribing a handle that is already present is a no-op and returns `false`.
    fn subscribe(&mut self, subscriber: Subscriber<Self::Payload, Self::Output>) -> bool {
        let added = self.subscriber_list_mut().push_unique(subscriber);
        log::trace!(
            "subscribe: added={added}, subscribers={}",
            self.subscriber_list().len()
        );
        added
    }

    /// Wrap `f` as a zero-argument subscriber, subscribe it and return its handle.
    ///
    /// Passing the same function item again is a no-op, as with [`subscribe`](Self::subscribe).
    fn subscribe_no_arg<F>(&mut self, f: F) -> Subscriber<Self::Payload, Self::Output>
    where
        F: Fn() -> Self::Output + Send + Sync + 'static,
        Self::Payload: 'static,
        Self::Output: 'static,
    {
        let subscriber = Subscriber::no_arg(f);
        self.subscribe(subscriber.clone());
        subscriber
    }

    /// Wrap `f` as a one-argument subscriber, subscribe it and return its handle.
    fn subscribe_with_arg<F>(&mut self, f: F) -> Subscriber<Self::Payload, Self::Output>
    where
        F: Fn(&Self::Payload) -> Self::Output + Send + Sync + 'static,
        Self::Payload: 'static,
        Self::Output: 'static,
    {
        let subscriber = Subscriber::with_arg(f);
        self.subscribe(subscriber.clone());
        subscriber
    }

    /// Unsubscribe a handle from the event.
    ///
    /// # Errors
    ///
    /// - [`EventError::SubscriberNotFound`] if the handle is not subscribed
    fn unsubscribe(
        &mut self,
        subscriber: &Subscriber<Self::Payload, Self::Output>,
    ) -> Result<Subscriber<Self::Payload, Self::Output>, EventError> {
        let result = self.subscriber_list_mut().remove(subscriber);
        if let Err(err) = &result {
            log::debug!("unsubscribe failed: {err}");
        }
        result
    }

    /// Remove every subscriber.
    fn clear(&mut self) {
        log::trace!("clear: dropping {} subscribers", self.subscriber_list().len());
        self.subscriber_list_mut().clear();
    }

    // -------------------------------------------------------------------------------------------------
    // Fluent shorthands
    // -------------------------------------------------------------------------------------------------

    /// Builder-style [`subscribe`](Self::subscribe).
    fn with_subscriber(mut self, subscriber: Subscriber<Self::Payload, Self::Output>) -> Self
    where
        Self: Sized,
    {
        self.subscribe(subscriber);
        self
    }

    /// Builder-style [`unsubscribe`](Self::unsubscribe).
    ///
    /// # Errors
    ///
    /// - [`EventError::SubscriberNotFound`] if the handle is not subscribed
    fn without_subscriber(
        mut self,
        subscriber: &Subscriber<Self::Payload, Self::Output>,
    ) -> Result<Self, EventError>
    where
        Self: Sized,
    {
        self.unsubscribe(subscriber)?;
        Ok(self)
    }

    // -------------------------------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------------------------------

    /// The current subscribers, in subscription order.
    fn subscribers(&self) -> &[Subscriber<Self::Payload, Self::Output>] {
        self.subscriber_list().as_slice()
    }

    /// Iterate through subscribers in subscription order.
    fn iter(&self) -> slice::Iter<'_, Subscriber<Self::Payload, Self::Output>> {
        self.subscriber_list().iter()
    }

    /// Whether the handle is subscribed.
    fn contains(&self, subscriber: &Subscriber<Self::Payload, Self::Output>) -> bool {
        self.subscriber_list().contains(subscriber)
    }

    /// Number of subscribers.
    fn len(&self) -> usize {
        self.subscriber_list().len()
    }

    /// Whether there are no subscribers.
    fn is_empty(&self) -> bool {
        self.subscriber_list().is_empty()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
