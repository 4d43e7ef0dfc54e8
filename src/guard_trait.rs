//! Core trait defining singleton guard behavior.
//!
//! This module provides the `GuardApi` trait with default implementations for
//! once-only construction, instance lookup and tracing.
//!
//! The guard is type-based: each type (`TypeId`) has a single slot that moves from
//! empty to filled exactly once. A second construction of the same type fails with
//! [`SingletonError::Violation`] and leaves the stored instance untouched.

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use crate::{GuardEvent, SingletonError};

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `GuardEvent` every time the guard is
/// interacted with. It must be thread-safe because guards are globally shared.
pub type TraceCallback = dyn Fn(&GuardEvent) + Send + Sync + 'static;

/// Storage for a guard's instance slots, one per type.
pub type GuardSlots = LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>;

/// Storage for a guard's optional trace callback.
pub type GuardTrace = LazyLock<Mutex<Option<Arc<TraceCallback>>>>;

/// Core trait defining singleton guard behavior.
///
/// Provides default implementations for all guard operations, requiring only
/// two accessor methods (`slots` and `trace`) to be implemented by the implementor.
pub trait GuardApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static GuardTrace;

    /// Set a tracing callback for guard operations.
    ///
    /// The callback will be invoked for every guard operation (construct, instance,
    /// has_instance, reset). It is called after the trace lock is released, so it may
    /// query the guard it is attached to.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method automatically recovers by
    /// extracting the inner value.
    fn set_trace_callback(&self, callback: impl Fn(&GuardEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Stored instances are not affected.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a guard event using the current callback, if any.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic propagates to the caller. Neither the
    /// trace lock nor the slot lock is held at that point.
    fn emit_event(&self, event: &GuardEvent) {
        let callback = Self::trace()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Slots
    // -------------------------------------------------------------------------------------------------

    /// Access the slot storage static.
    fn slots() -> &'static GuardSlots;

    /// Construct the single instance of `T`.
    ///
    /// On the first call for `T` the value is stored and returned as `Arc<T>`.
    ///
    /// # Errors
    ///
    /// - [`SingletonError::Violation`] if an instance of `T` already exists; the
    ///   stored instance is left untouched and `value` is dropped
    fn construct<T: Send + Sync + 'static>(&self, value: T) -> Result<Arc<T>, SingletonError> {
        self.construct_with(move || value)
    }

    /// Construct the single instance of `T`, building it only if the slot is empty.
    ///
    /// `init` is not called when an instance already exists, so a rejected
    /// construction has no side effects. `init` runs without the slot lock held and
    /// may construct other singletons of the same guard.
    ///
    /// If another construction of `T` completes while `init` runs (another thread,
    /// or `init` itself), that one wins and the value built by `init` is dropped.
    ///
    /// # Errors
    ///
    /// - [`SingletonError::Violation`] if an instance of `T` already exists
    fn construct_with<T, F>(&self, init: F) -> Result<Arc<T>, SingletonError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let type_name = std::any::type_name::<T>();

        let occupied = Self::slots()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains_key(&TypeId::of::<T>());

        let result = if occupied {
            Err(SingletonError::Violation { type_name })
        } else {
            let instance = Arc::new(init());
            let mut slots = Self::slots().lock().unwrap_or_else(|p| p.into_inner());
            match slots.entry(TypeId::of::<T>()) {
                Entry::Occupied(_) => Err(SingletonError::Violation { type_name }),
                Entry::Vacant(slot) => {
                    slot.insert(instance.clone());
                    Ok(instance)
                }
            }
        };

        match &result {
            Ok(_) => {
                log::debug!("constructed singleton {type_name}");
                self.emit_event(&GuardEvent::Construct { type_name });
            }
            Err(_) => {
                log::debug!("rejected second construction of {type_name}");
                self.emit_event(&GuardEvent::Violation { type_name });
            }
        }

        result
    }

    /// Retrieve the instance of `T`.
    ///
    /// The returned `Arc` points at the same allocation that `construct` returned.
    ///
    /// # Errors
    ///
    /// - [`SingletonError::NotConstructed`] if `T` was never constructed
    /// - [`SingletonError::TypeMismatch`] if the slot holds a foreign value (extremely rare)
    fn instance<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, SingletonError> {
        let type_name = std::any::type_name::<T>();

        let any_arc_opt = Self::slots()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(&TypeId::of::<T>())
            .cloned();

        let result: Result<Arc<T>, SingletonError> = match any_arc_opt {
            Some(any_arc) => any_arc
                .downcast::<T>()
                .map_err(|_| SingletonError::TypeMismatch { type_name }),
            None => Err(SingletonError::NotConstructed { type_name }),
        };

        self.emit_event(&GuardEvent::Lookup {
            type_name,
            found: result.is_ok(),
        });

        result
    }

    /// Check whether `T` has been constructed.
    fn has_instance<T: Send + Sync + 'static>(&self) -> bool {
        let found = Self::slots()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains_key(&TypeId::of::<T>());

        self.emit_event(&GuardEvent::HasInstance {
            type_name: std::any::type_name::<T>(),
            found,
        });

        found
    }

    /// Empty every slot of this guard.
    ///
    /// Administrative escape hatch, mainly for test isolation. Instances already
    /// handed out as `Arc<T>` stay valid; the trace callback is kept.
    #[doc(hidden)]
    fn reset(&self) {
        self.emit_event(&GuardEvent::Reset {});
        log::debug!("resetting singleton guard");

        Self::slots()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clear();
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
