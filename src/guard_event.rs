/// Events emitted by singleton guards during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use event_singleton::GuardEvent;
///
/// let event = GuardEvent::Construct { type_name: "i32" };
/// assert_eq!(event.to_string(), "construct { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardEvent {
    /// A type's slot was filled by its first construction.
    Construct {
        /// The type name of the constructed value (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// A construction was rejected because the slot was already filled.
    Violation {
        /// The type name whose construction was rejected
        type_name: &'static str,
    },

    /// The instance of a type was requested.
    Lookup {
        /// The type name that was requested
        type_name: &'static str,
        /// Whether an instance was found
        found: bool,
    },

    /// An instance existence check was performed.
    HasInstance {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether an instance exists
        found: bool,
    },

    /// Every slot of the guard was emptied.
    Reset {},
}

impl std::fmt::Display for GuardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardEvent::Construct { type_name } => {
                write!(f, "construct {{ type_name: {type_name} }}")
            }
            GuardEvent::Violation { type_name } => {
                write!(f, "violation {{ type_name: {type_name} }}")
            }
            GuardEvent::Lookup { type_name, found } => {
                write!(f, "lookup {{ type_name: {type_name}, found: {found} }}")
            }
            GuardEvent::HasInstance { type_name, found } => {
                write!(f, "has_instance {{ type_name: {type_name}, found: {found} }}")
            }
            GuardEvent::Reset {} => write!(f, "Resetting the guard"),
        }
    }
}
