use std::slice;

use crate::{EventError, Subscriber};

/// Ordered, duplicate-free list of subscribers.
///
/// The only ways in are [`push_unique`](Self::push_unique) and the only ways out are
/// [`remove`](Self::remove) and [`clear`](Self::clear), so the no-duplicates
/// invariant cannot be bypassed from outside.
pub struct SubscriberList<T, R = ()> {
    entries: Vec<Subscriber<T, R>>,
}

impl<T, R> SubscriberList<T, R> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `subscriber` unless an equal handle is already present.
    ///
    /// Returns `true` if the subscriber was added.
    pub fn push_unique(&mut self, subscriber: Subscriber<T, R>) -> bool {
        if self.entries.contains(&subscriber) {
            return false;
        }
        self.entries.push(subscriber);
        true
    }

    /// Removes the first entry equal to `subscriber`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// - [`EventError::SubscriberNotFound`] if no equal entry exists
    pub fn remove(&mut self, subscriber: &Subscriber<T, R>) -> Result<Subscriber<T, R>, EventError> {
        let index = self
            .entries
            .iter()
            .position(|s| s == subscriber)
            .ok_or(EventError::SubscriberNotFound {
                arity: subscriber.arity(),
            })?;
        Ok(self.entries.remove(index))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether an equal handle is present.
    pub fn contains(&self, subscriber: &Subscriber<T, R>) -> bool {
        self.entries.contains(subscriber)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in subscription order.
    pub fn as_slice(&self) -> &[Subscriber<T, R>] {
        &self.entries
    }

    /// Iterate through entries in subscription order.
    pub fn iter(&self) -> slice::Iter<'_, Subscriber<T, R>> {
        self.entries.iter()
    }

    /// Calls every subscriber in order and collects all results.
    pub fn dispatch(&self, payload: &T) -> Vec<R> {
        self.entries.iter().map(|s| s.call(payload)).collect()
    }
}

impl<T, U, E> SubscriberList<T, Result<U, E>> {
    /// Calls subscribers in order, stopping at the first `Err`.
    pub fn try_dispatch(&self, payload: &T) -> Result<Vec<U>, E> {
        self.entries.iter().map(|s| s.call(payload)).collect()
    }
}

impl<T, R> Default for SubscriberList<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Clone for SubscriberList<T, R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T, R> std::fmt::Debug for SubscriberList<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<'a, T, R> IntoIterator for &'a SubscriberList<T, R> {
    type Item = &'a Subscriber<T, R>;
    type IntoIter = slice::Iter<'a, Subscriber<T, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
