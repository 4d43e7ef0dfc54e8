//! Callback handles stored by events.
//!
//! A [`Subscriber`] wraps a callback that takes either nothing or a reference to the
//! event payload. The shape is fixed when the handle is built, so dispatch is a
//! plain `match` and can never fail because of a callback's signature.
//!
//! Handles compare by identity. Zero-sized callables (function items and closures
//! that capture nothing) are identified by their type, so wrapping the same function
//! twice yields equal handles while two different functions never collide. Any other
//! closure is identified by the allocation of its handle: clones are equal, separately
//! built handles are not.

use std::any::TypeId;
use std::fmt;
use std::mem;
use std::sync::Arc;

type NoArgFn<R> = dyn Fn() -> R + Send + Sync;
type WithArgFn<T, R> = dyn Fn(&T) -> R + Send + Sync;

/// Number of arguments a subscriber accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Called with no arguments; the payload is ignored.
    Zero,
    /// Called with a reference to the payload.
    One,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Zero => write!(f, "0"),
            Arity::One => write!(f, "1"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Identity {
    Callable(TypeId),
    Allocation(usize),
}

impl Identity {
    fn of<F: 'static, C: ?Sized>(callback: &Arc<C>) -> Self {
        if mem::size_of::<F>() == 0 {
            Identity::Callable(TypeId::of::<F>())
        } else {
            Identity::Allocation(Arc::as_ptr(callback) as *const () as usize)
        }
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Callable(id) => write!(f, "{id:?}"),
            Identity::Allocation(addr) => write!(f, "{addr:#x}"),
        }
    }
}

enum Callback<T, R> {
    NoArg(Arc<NoArgFn<R>>),
    WithArg(Arc<WithArgFn<T, R>>),
}

impl<T, R> Clone for Callback<T, R> {
    fn clone(&self) -> Self {
        match self {
            Callback::NoArg(f) => Callback::NoArg(Arc::clone(f)),
            Callback::WithArg(f) => Callback::WithArg(Arc::clone(f)),
        }
    }
}

/// A cloneable, identity-compared callback handle.
///
/// `T` is the payload type of the event the handle is meant for and `R` is what the
/// callback returns. Keep a clone of the handle around if you intend to
/// unsubscribe later.
///
/// # Examples
///
/// ```rust
/// use event_singleton::{Arity, Subscriber};
///
/// let greet: Subscriber<String> = Subscriber::with_arg(|name: &String| println!("hi {name}"));
/// let tick: Subscriber<String> = Subscriber::no_arg(|| println!("tick"));
///
/// assert_eq!(greet.arity(), Arity::One);
/// assert_eq!(tick.arity(), Arity::Zero);
/// assert_eq!(greet, greet.clone());
/// assert_ne!(greet, tick);
/// ```
pub struct Subscriber<T, R = ()> {
    callback: Callback<T, R>,
    key: Identity,
}

impl<T: 'static, R: 'static> Subscriber<T, R> {
    /// Wraps a closure that ignores the payload.
    pub fn no_arg<F>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        let callback: Arc<NoArgFn<R>> = Arc::new(f);
        let key = Identity::of::<F, _>(&callback);
        Self {
            callback: Callback::NoArg(callback),
            key,
        }
    }

    /// Wraps a closure that receives the payload.
    pub fn with_arg<F>(f: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        let callback: Arc<WithArgFn<T, R>> = Arc::new(f);
        let key = Identity::of::<F, _>(&callback);
        Self {
            callback: Callback::WithArg(callback),
            key,
        }
    }

    /// Wraps a function item that ignores the payload.
    ///
    /// Same as [`no_arg`](Self::no_arg); handles of the same function compare equal.
    /// A coerced `fn()` pointer is not zero-sized and gets a per-handle identity.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> R + Copy + Send + Sync + 'static,
    {
        Self::no_arg(f)
    }

    /// Wraps a function item that receives the payload.
    ///
    /// Same as [`with_arg`](Self::with_arg); handles of the same function compare equal.
    pub fn from_fn_with_arg<F>(f: F) -> Self
    where
        F: Fn(&T) -> R + Copy + Send + Sync + 'static,
    {
        Self::with_arg(f)
    }
}

impl<T, R> Subscriber<T, R> {
    /// Returns how many arguments this subscriber is called with.
    pub fn arity(&self) -> Arity {
        match self.callback {
            Callback::NoArg(_) => Arity::Zero,
            Callback::WithArg(_) => Arity::One,
        }
    }

    /// Calls the subscriber, passing `payload` only if it accepts an argument.
    pub fn call(&self, payload: &T) -> R {
        match &self.callback {
            Callback::NoArg(f) => f(),
            Callback::WithArg(f) => f(payload),
        }
    }
}

impl<T, R> Clone for Subscriber<T, R> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            key: self.key,
        }
    }
}

impl<T, R> PartialEq for Subscriber<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.arity() == other.arity()
    }
}

impl<T, R> Eq for Subscriber<T, R> {}

impl<T, R> fmt::Debug for Subscriber<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("arity", &self.arity())
            .field("key", &self.key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer() -> i32 {
        42
    }

    fn double(x: &i32) -> i32 {
        x * 2
    }

    fn one_a() -> u8 {
        1
    }

    fn one_b() -> u8 {
        1
    }

    #[test]
    fn test_no_arg_ignores_payload() {
        let sub: Subscriber<i32, i32> = Subscriber::no_arg(|| 7);
        assert_eq!(sub.arity(), Arity::Zero);
        assert_eq!(sub.call(&100), 7);
    }

    #[test]
    fn test_with_arg_receives_payload() {
        let sub: Subscriber<i32, i32> = Subscriber::with_arg(|x| x + 1);
        assert_eq!(sub.arity(), Arity::One);
        assert_eq!(sub.call(&41), 42);
    }

    #[test]
    fn test_clone_is_equal() {
        let sub: Subscriber<()> = Subscriber::no_arg(|| ());
        assert_eq!(sub, sub.clone());
    }

    #[test]
    fn test_separate_closures_are_distinct() {
        let a: Subscriber<()> = Subscriber::no_arg(|| ());
        let b: Subscriber<()> = Subscriber::no_arg(|| ());
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_function_through_every_constructor_is_equal() {
        let a: Subscriber<i32, i32> = Subscriber::no_arg(answer);
        let b: Subscriber<i32, i32> = Subscriber::no_arg(answer);
        let c: Subscriber<i32, i32> = Subscriber::from_fn(answer);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_functions_with_identical_bodies_are_distinct() {
        let a: Subscriber<(), u8> = Subscriber::from_fn(one_a);
        let b: Subscriber<(), u8> = Subscriber::from_fn(one_b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_reused_non_capturing_closure_is_equal() {
        let tick = || 5u8;
        let a: Subscriber<(), u8> = Subscriber::no_arg(tick);
        let b: Subscriber<(), u8> = Subscriber::no_arg(tick);
        assert_eq!(a, b);
    }

    #[test]
    fn test_capturing_closures_are_distinct_per_handle() {
        let base = 5u8;
        let add = move || base;
        let a: Subscriber<(), u8> = Subscriber::no_arg(add);
        let b: Subscriber<(), u8> = Subscriber::no_arg(add);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_plain_functions_compare_by_function() {
        let a: Subscriber<i32, i32> = Subscriber::from_fn(answer);
        let b: Subscriber<i32, i32> = Subscriber::from_fn(answer);
        assert_eq!(a, b);
        assert_eq!(a.call(&0), 42);

        let c: Subscriber<i32, i32> = Subscriber::from_fn_with_arg(double);
        assert_ne!(a, c);
        assert_eq!(c.call(&21), 42);
    }

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::Zero.to_string(), "0");
        assert_eq!(Arity::One.to_string(), "1");
    }

    #[test]
    fn test_debug_format() {
        let sub: Subscriber<u8> = Subscriber::with_arg(|_| ());
        let debug = format!("{:?}", sub);
        assert!(debug.starts_with("Subscriber { arity: One, key: "));

        let base = 1u8;
        let sub: Subscriber<u8> = Subscriber::with_arg(move |x| assert_ne!(*x, base));
        assert!(format!("{:?}", sub).contains("key: 0x"));
    }
}
