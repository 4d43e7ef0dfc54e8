//! The process-wide singleton guard and the `Singleton` opt-in trait.
//!
//! A type becomes a singleton by implementing [`Singleton`] (usually with an empty
//! `impl` block) and routing its public constructor through [`Singleton::install`].
//! Keeping the type's fields private makes that constructor the only way in.
//!
//! # Examples
//!
//! ```
//! use event_singleton::{Singleton, SingletonError};
//! use std::sync::Arc;
//!
//! pub struct UniqueObject {
//!     name: String,
//! }
//!
//! impl Singleton for UniqueObject {}
//!
//! impl UniqueObject {
//!     pub fn new(name: &str) -> Result<Arc<Self>, SingletonError> {
//!         Self::install(UniqueObject { name: name.to_string() })
//!     }
//!
//!     pub fn name(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! let uo = UniqueObject::new("Unique Object").unwrap();
//! assert!(UniqueObject::new("Unique Object2").is_err());
//! assert_eq!(uo.name(), UniqueObject::instance().unwrap().name());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use crate::{GuardApi, GuardEvent, GuardSlots, GuardTrace, SingletonError};

/// Slots of the process-wide guard.
static GLOBAL_SLOTS: GuardSlots = LazyLock::new(|| Mutex::new(HashMap::new()));

/// Trace callback of the process-wide guard.
static GLOBAL_TRACE: GuardTrace = LazyLock::new(|| Mutex::new(None));

/// The process-wide guard used by [`Singleton`].
pub struct GlobalGuard;

impl GuardApi for GlobalGuard {
    fn slots() -> &'static GuardSlots {
        &GLOBAL_SLOTS
    }

    fn trace() -> &'static GuardTrace {
        &GLOBAL_TRACE
    }
}

/// Constant for trait-based access to the process-wide guard.
pub const GLOBAL: GlobalGuard = GlobalGuard;

/// Marks a type as having at most one instance per process.
///
/// Every method has a default implementation backed by the process-wide guard.
pub trait Singleton: Sized + Send + Sync + 'static {
    /// Store `self` as the one instance of this type.
    ///
    /// # Errors
    ///
    /// - [`SingletonError::Violation`] if an instance already exists
    fn install(self) -> Result<Arc<Self>, SingletonError> {
        GLOBAL.construct(self)
    }

    /// Build and store the one instance of this type; `init` is skipped on violation.
    ///
    /// # Errors
    ///
    /// - [`SingletonError::Violation`] if an instance already exists
    fn install_with(init: impl FnOnce() -> Self) -> Result<Arc<Self>, SingletonError> {
        GLOBAL.construct_with(init)
    }

    /// The instance stored by the first successful `install`.
    ///
    /// # Errors
    ///
    /// - [`SingletonError::NotConstructed`] if the type was never installed
    fn instance() -> Result<Arc<Self>, SingletonError> {
        GLOBAL.instance()
    }

    /// Whether the type has been installed.
    fn has_instance() -> bool {
        GLOBAL.has_instance::<Self>()
    }
}

/// Sets a tracing callback on the process-wide guard.
///
/// # Example
/// ```rust
/// use event_singleton::set_trace_callback;
///
/// set_trace_callback(|event| println!("[singleton-trace] {event}"));
/// ```
pub fn set_trace_callback(callback: impl Fn(&GuardEvent) + Send + Sync + 'static) {
    GLOBAL.set_trace_callback(callback)
}

/// Clears the tracing callback of the process-wide guard.
pub fn clear_trace_callback() {
    GLOBAL.clear_trace_callback()
}

/// Empties every slot of the process-wide guard.
#[doc(hidden)]
pub fn reset() {
    GLOBAL.reset()
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
