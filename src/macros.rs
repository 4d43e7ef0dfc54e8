//! Macros for creating isolated singleton guards.

/// Creates a complete, isolated singleton guard with a single macro invocation.
///
/// The macro generates a module containing:
/// - Slot storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `GuardApi`, and an `API` constant
/// - Free functions mirroring every guard operation
///
/// # Examples
///
/// ```rust
/// use event_singleton::define_guard;
/// use std::sync::Arc;
///
/// define_guard!(services);
///
/// let first = services::construct("db://primary".to_string()).unwrap();
/// assert!(services::construct("db://replica".to_string()).is_err());
///
/// let again: Arc<String> = services::instance().unwrap();
/// assert!(Arc::ptr_eq(&first, &again));
/// ```
///
/// # Multiple Guards
///
/// Each guard keeps its own slots, so the same type can have one instance per guard:
///
/// ```rust
/// use event_singleton::define_guard;
///
/// define_guard!(tenant_a);
/// define_guard!(tenant_b);
///
/// tenant_a::construct(1u32).unwrap();
/// tenant_b::construct(2u32).unwrap();
///
/// assert_eq!(*tenant_a::instance::<u32>().unwrap(), 1);
/// assert_eq!(*tenant_b::instance::<u32>().unwrap(), 2);
/// ```
///
/// # Trait-Based Usage
///
/// ```rust
/// use event_singleton::{define_guard, GuardApi};
///
/// define_guard!(app);
///
/// app::API.construct(100i32).unwrap();
/// assert!(app::API.has_instance::<i32>());
/// ```
#[macro_export]
macro_rules! define_guard {
    ($name:ident) => {
        pub mod $name {
            use std::collections::HashMap;
            use std::sync::{Arc, LazyLock, Mutex};

            // Slot storage (module-private)
            static SLOTS: $crate::GuardSlots = LazyLock::new(|| Mutex::new(HashMap::new()));

            // Trace callback storage (module-private)
            static TRACE: $crate::GuardTrace = LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the guard API.
            ///
            /// All operations come from the `GuardApi` trait's default implementations.
            pub struct Api;

            impl $crate::GuardApi for Api {
                fn slots() -> &'static $crate::GuardSlots {
                    &SLOTS
                }

                fn trace() -> &'static $crate::GuardTrace {
                    &TRACE
                }
            }

            /// Constant for trait-based access to this guard.
            pub const API: Api = Api;

            /// Construct the single instance of `T` in this guard.
            pub fn construct<T: Send + Sync + 'static>(
                value: T,
            ) -> Result<Arc<T>, $crate::SingletonError> {
                use $crate::GuardApi;
                API.construct(value)
            }

            /// Construct the single instance of `T`, running `init` only if the slot is empty.
            pub fn construct_with<T: Send + Sync + 'static>(
                init: impl FnOnce() -> T,
            ) -> Result<Arc<T>, $crate::SingletonError> {
                use $crate::GuardApi;
                API.construct_with(init)
            }

            /// Retrieve the instance of `T` from this guard.
            pub fn instance<T: Send + Sync + 'static>() -> Result<Arc<T>, $crate::SingletonError> {
                use $crate::GuardApi;
                API.instance()
            }

            /// Check whether `T` has been constructed in this guard.
            pub fn has_instance<T: Send + Sync + 'static>() -> bool {
                use $crate::GuardApi;
                API.has_instance::<T>()
            }

            /// Set a tracing callback for this guard.
            pub fn set_trace_callback(callback: impl Fn(&$crate::GuardEvent) + Send + Sync + 'static) {
                use $crate::GuardApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::GuardApi;
                API.clear_trace_callback()
            }

            /// Empty every slot of this guard.
            #[doc(hidden)]
            pub fn reset() {
                use $crate::GuardApi;
                API.reset()
            }
        }
    };
}
