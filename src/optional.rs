//! Optional - A value-or-absence container with a default payload
//!
//! An `Optional` replaces the "value plus validity flag" pattern with a single
//! value type. Unlike `Option`, the payload slot always holds a `T`: when the
//! container is empty that slot is `T::default()`. This makes it suitable for
//! fixed layout struct members such as configuration fields, where a missing
//! value still needs a well defined placeholder.
//!
//! Nothing here can fail. An empty container reads back as the default value,
//! and callers that care must check the flag returned by `unwrap`.

use core::mem;

use tracing::trace;

/// A value of type `T` that may or may not be present.
///
/// When the container is empty the stored value is always `T::default()`, so
/// two empty containers of the same type compare equal.
///
/// # Examples
/// ```
/// use optval::Optional;
///
/// let mut port: Optional<u16> = Optional::none();
/// assert_eq!(port.or_some(8080), 8080);
///
/// // Install a value, receiving the previous (empty) state.
/// let prev = port.replace(443);
/// assert!(prev.is_none());
/// assert_eq!(port.unwrap(), (443, true));
///
/// // Move it back out, leaving the container empty.
/// let taken = port.take();
/// assert_eq!(taken.unwrap(), (443, true));
/// assert!(port.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: T,
    valid: bool,
}

impl<T> Optional<T>
where
    T: Default,
{
    /// Build an `Optional` from a value and its validity flag. If `valid` is
    /// false the value is dropped and an empty container is returned.
    pub fn new(value: T, valid: bool) -> Self {
        if valid {
            Self::some(value)
        } else {
            Self::none()
        }
    }

    /// Create an empty `Optional`.
    pub fn none() -> Self {
        Optional {
            value: T::default(),
            valid: false,
        }
    }

    /// Empty the container, dropping any held value.
    pub fn reset(&mut self) {
        trace!(was_some = self.valid, "reset");
        *self = Self::none();
    }

    /// Move the current state out, leaving the container empty.
    pub fn take(&mut self) -> Self {
        trace!(was_some = self.valid, "take");
        mem::replace(self, Self::none())
    }

    /// Install `value`, returning the state that was displaced.
    pub fn replace(&mut self, value: T) -> Self {
        trace!(was_some = self.valid, "replace");
        mem::replace(self, Self::some(value))
    }

    /// Install `value` and return a mutable reference to it.
    pub fn insert(&mut self, value: T) -> &mut T {
        trace!(was_some = self.valid, "insert");
        *self = Self::some(value);
        &mut self.value
    }
}

impl<T> Optional<T> {
    /// Create an `Optional` holding `value`.
    pub const fn some(value: T) -> Self {
        Optional { value, valid: true }
    }

    /// Return the stored value if present, otherwise the supplied fallback.
    pub fn or_some(self, value: T) -> T {
        if self.valid {
            self.value
        } else {
            value
        }
    }

    /// Return the stored value, or `T::default()` if empty. This is the same
    /// as `unwrap` with the flag discarded.
    pub fn or_default(self) -> T {
        self.value
    }

    /// Return a present copy of the stored value, or the result of `f` if
    /// empty. `f` is only evaluated when the container is empty.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.valid {
            Self::some(self.value)
        } else {
            f()
        }
    }

    /// Apply `f` to the stored value. `f` is never called on an empty container.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        if self.valid {
            Optional::some(f(self.value))
        } else {
            Optional::none()
        }
    }

    /// Returns true if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.valid
    }

    /// Returns true if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Split into the stored value and its presence flag. This never panics:
    /// an empty container yields `(T::default(), false)`.
    pub fn unwrap(self) -> (T, bool) {
        (self.value, self.valid)
    }

    /// Borrowing form of `unwrap`.
    pub fn as_parts(&self) -> (&T, bool) {
        (&self.value, self.valid)
    }

    /// Returns the stored value if one is present.
    pub fn get(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    /// Returns the stored value mutably if one is present.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.valid {
            Some(&mut self.value)
        } else {
            None
        }
    }

    /// Return `self` if it holds a value, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        if self.valid {
            self
        } else {
            other
        }
    }

    /// Convert into a standard `Option`.
    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T> Default for Optional<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T>
where
    T: Default,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Optional::some(v),
            None => Optional::none(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Self {
        opt.into_option()
    }
}
