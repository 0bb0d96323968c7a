use std::panic::UnwindSafe;

use super::iter::{IntoIter, Iter, IterMut};
use super::panic::capture;
use super::result::Result::{self, Err, Ok};

pub use self::Option::{None, Some};

/// An optional value: either `Some` value or `None`.
///
/// Follows the same rules as [`Result`]: the variant is fixed at
/// construction and combinators return new values.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// No value
    None,

    /// Some value of type `T`
    Some(T),
}

impl<T> Option<T> {
    /// Runs `f` and wraps its return value in `Some`.
    ///
    /// A panic raised by `f` is caught and yields `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn from<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match capture(f) {
            std::result::Result::Ok(v) => Some(v),
            std::result::Result::Err(_) => None,
        }
    }

    pub fn into_std(self) -> std::option::Option<T> {
        match self {
            Some(v) => std::option::Option::Some(v),
            None => std::option::Option::None,
        }
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    /// Returns `true` if the option is a `Some` and the value inside of it
    /// matches the predicate.
    #[inline]
    pub fn is_some_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Some(v) => f(v),
            None => false,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Some(v) => x == v,
            None => false,
        }
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Some(v) => Some(v),
            None => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Some(v) => Some(v),
            None => None,
        }
    }

    /// Returns the contained `Some` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` as message if the value is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Some(v) => v,
            None => {
                tracing::debug!("called `Option::expect()` on a `None` value");

                panic!("{}", msg)
            }
        }
    }

    /// Returns the contained `Some` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Some(v) => v,
            None => {
                tracing::debug!("called `Option::unwrap()` on a `None` value");

                panic!("called `Option::unwrap()` on a `None` value")
            }
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(v) => v,
            None => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(v) => v,
            None => f(),
        }
    }

    /// Behaves exactly like [`unwrap_or`](Option::unwrap_or).
    #[inline]
    pub fn unwrap_or_default(self, default: T) -> T {
        self.unwrap_or(default)
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => Some(f(v)),
            None => None,
        }
    }

    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => f(v),
            None => default,
        }
    }

    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => f(v),
            None => default(),
        }
    }

    /// Calls `f` with a reference to the contained value (if `Some`).
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(v) = &self {
            f(v);
        }

        self
    }

    /// Returns `None` if the option is `None` or `predicate` returns `false`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Some(v) = self {
            if predicate(&v) {
                return Some(v);
            }
        }

        None
    }

    /// Transforms into a [`Result`], mapping `None` to `Err(err)`.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }

    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(err()),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_std())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut().into_std())
    }

    #[inline]
    pub fn and<U>(self, optb: Option<U>) -> Option<U> {
        match self {
            Some(_) => optb,
            None => None,
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(v) => f(v),
            None => None,
        }
    }

    #[inline]
    pub fn or(self, optb: Option<T>) -> Option<T> {
        match self {
            Some(v) => Some(v),
            None => optb,
        }
    }

    #[inline]
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Some(v) => Some(v),
            None => f(),
        }
    }

    /// Returns `Some` if exactly one of `self` and `optb` is `Some`.
    #[inline]
    pub fn xor(self, optb: Option<T>) -> Option<T> {
        match (self, optb) {
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            _ => None,
        }
    }
}

impl<T> Option<Option<T>> {
    pub fn flatten(self) -> Option<T> {
        self.and_then(|x| x)
    }
}

// A derive would require `T: Default`.
#[allow(clippy::derivable_impls)]
impl<T> Default for Option<T> {
    fn default() -> Self {
        None
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(opt: std::option::Option<T>) -> Self {
        match opt {
            std::option::Option::Some(v) => Some(v),
            std::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(opt: Option<T>) -> Self {
        opt.into_std()
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_std())
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Option<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
