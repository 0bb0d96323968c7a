use std::any::Any;
use std::hint::unreachable_unchecked;
use std::panic::UnwindSafe;

use crate::misc::Try;

use super::iter::{IntoIter, Iter, IterMut};
use super::option::Option::{self, None, Some};
use super::panic::{capture, raise, Panic};

pub use self::Result::{Err, Ok};

/// A value that is either a success (`Ok`) or a failure (`Err`).
///
/// The variant is fixed at construction. Every combinator hands out a new
/// value instead of changing the receiver, so a `Result` can be passed around
/// and chained freely.
///
/// ```
/// use fallible::{Err, Ok, Result};
///
/// let x: Result<i32, &str> = Ok(2);
/// let x = x
///     .map(|x| x * 2)
///     .and_then(|x| if x > 0 { Ok(x) } else { Err("neg") });
///
/// assert_eq!(4, x.unwrap());
/// ```
///
/// [`unwrap`](Result::unwrap) and [`unwrap_err`](Result::unwrap_err) unwind
/// with the payload of the unexpected variant, so they need that payload to
/// be `Send + 'static`. Errors like `Box<dyn std::error::Error>`, `Rc<_>` or
/// a borrowed `&'a str` do not qualify; use [`expect`](Result::expect),
/// [`unwrap_or_else`](Result::unwrap_or_else) or
/// [`into_ok`](Result::into_ok) with those.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// Contains the success value
    Ok(T),

    /// Contains the error value
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Runs `f` and wraps its outcome.
    ///
    /// A normal return becomes `Ok`, a panic raised by `f` is caught and
    /// becomes `Err`. This is the only place where unwinding is turned into a
    /// value; the panic does not reach the caller.
    ///
    /// Closures capturing references to interior mutable state are not
    /// [`UnwindSafe`]; wrap them in [`std::panic::AssertUnwindSafe`] if the
    /// state is known to stay consistent.
    ///
    /// ```
    /// use fallible::{Panic, Result};
    ///
    /// let x: Result<u32, Panic> = Result::from(|| 42);
    /// assert!(x.is_ok());
    ///
    /// let x: Result<u32, Panic> = Result::from(|| panic!("boom"));
    /// assert_eq!("boom", x.unwrap_err().to_string());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
        E: From<Panic>,
    {
        capture(f).map_err(<E as From<Panic>>::from).into()
    }

    /// Runs `f`, which reports failure through its return value.
    ///
    /// The error payload of the returned [`Try`] value becomes `Err`, as does
    /// a panic raised by `f`.
    ///
    /// ```
    /// use fallible::Result;
    ///
    /// #[derive(Debug)]
    /// enum Error {
    ///     Parse(std::num::ParseIntError),
    ///     Panic(fallible::Panic),
    /// }
    ///
    /// impl From<std::num::ParseIntError> for Error {
    ///     fn from(err: std::num::ParseIntError) -> Self {
    ///         Self::Parse(err)
    ///     }
    /// }
    ///
    /// impl From<fallible::Panic> for Error {
    ///     fn from(panic: fallible::Panic) -> Self {
    ///         Self::Panic(panic)
    ///     }
    /// }
    ///
    /// let x: Result<i32, Error> = Result::from_fallible(|| "12".parse::<i32>());
    /// assert!(x.contains(&12i32));
    /// ```
    pub fn from_fallible<F, X>(f: F) -> Self
    where
        F: FnOnce() -> X + UnwindSafe,
        X: Try<Ok = T>,
        E: From<X::Error> + From<Panic>,
    {
        match capture(f) {
            std::result::Result::Ok(x) => x.into_result().map_err(<E as From<X::Error>>::from),
            std::result::Result::Err(panic) => Err(<E as From<Panic>>::from(panic)),
        }
    }

    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Ok(v) => std::result::Result::Ok(v),
            Err(e) => std::result::Result::Err(e),
        }
    }

    /* Introspection */

    /// Returns `true` if the result is `Ok`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    /// Returns `true` if the result is `Ok` and the value inside of it
    /// matches the predicate.
    #[inline]
    pub fn is_ok_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Ok(v) => f(v),
            Err(_) => false,
        }
    }

    /// Returns `true` if the result is `Err`.
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the result is `Err` and the error inside of it
    /// matches the predicate.
    #[inline]
    pub fn is_err_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Ok(_) => false,
            Err(e) => f(e),
        }
    }

    /// Returns `true` if the result is an `Ok` value equal to `x`.
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Ok(v) => x == v,
            Err(_) => false,
        }
    }

    /// Returns `true` if the result is an `Err` value equal to `e`.
    pub fn contains_err<F>(&self, e: &F) -> bool
    where
        F: PartialEq<E>,
    {
        match self {
            Ok(_) => false,
            Err(x) => e == x,
        }
    }

    /* Safe extraction */

    /// Returns the success value, or `None` if the result is `Err`.
    pub fn ok(&self) -> Option<&T> {
        match self {
            Ok(v) => Some(v),
            Err(_) => None,
        }
    }

    /// Returns the error value, or `None` if the result is `Ok`.
    pub fn err(&self) -> Option<&E> {
        match self {
            Ok(_) => None,
            Err(e) => Some(e),
        }
    }

    /// Converts into the success value, discarding the error, if any.
    pub fn into_ok(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(_) => None,
        }
    }

    /// Converts into the error value, discarding the success value, if any.
    pub fn into_err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(e) => Some(e),
        }
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e),
        }
    }

    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e),
        }
    }

    /* Transformation */

    /// Maps a `Result<T, E>` to `Result<U, E>` by applying a function to a
    /// contained `Ok` value, leaving an `Err` value untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => Ok(f(v)),
            Err(e) => Err(e),
        }
    }

    /// Returns the provided default (if `Err`), or applies a function to the
    /// contained value (if `Ok`).
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => f(v),
            Err(_) => default,
        }
    }

    /// Maps the result to `U` by applying `fallback` to a contained `Err`
    /// value, or `f` to a contained `Ok` value.
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => f(v),
            Err(e) => fallback(e),
        }
    }

    /// Maps a `Result<T, E>` to `Result<T, F>` by applying a function to a
    /// contained `Err` value, leaving an `Ok` value untouched.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(op(e)),
        }
    }

    /* Inspection */

    /// Calls `f` with a reference to the contained value (if `Ok`).
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(v) = &self {
            f(v);
        }

        self
    }

    /// Calls `f` with a reference to the contained error (if `Err`).
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Err(e) = &self {
            f(e);
        }

        self
    }

    /* Iteration */

    /// Returns an iterator over the possibly contained value.
    ///
    /// The iterator yields one value if the result is `Ok`, otherwise none.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.ok().into_std())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut().into_ok().into_std())
    }

    /* Unsafe extraction */

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` as message if the value is an `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Ok(v) => v,
            Err(_) => {
                tracing::debug!("called `Result::expect()` on an `Err` value");

                panic!("{}", msg)
            }
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Err`. The error itself is used as panic
    /// payload, so code catching the unwind receives the original `E`. An
    /// error of type [`Panic`] resumes the unwind it was captured from.
    ///
    /// `E` has to be `Send + 'static` for this; for other error types use
    /// [`expect`](Result::expect) or [`unwrap_or_else`](Result::unwrap_or_else).
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("called `Result::unwrap()` on an `Err` value");

                raise(e)
            }
        }
    }

    /// Returns the contained `Ok` value or the provided default.
    ///
    /// Behaves exactly like [`unwrap_or`](Result::unwrap_or).
    #[inline]
    pub fn unwrap_or_default(self, default: T) -> T {
        self.unwrap_or(default)
    }

    /// Returns the contained `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` as message if the value is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Ok(_) => {
                tracing::debug!("called `Result::expect_err()` on an `Ok` value");

                panic!("{}", msg)
            }
            Err(e) => e,
        }
    }

    /// Returns the contained `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with the success value as payload if the value is an `Ok`.
    /// `T` has to be `Send + 'static` for this; otherwise use
    /// [`expect_err`](Result::expect_err).
    #[inline]
    pub fn unwrap_err(self) -> E
    where
        T: Any + Send,
    {
        match self {
            Ok(v) => {
                tracing::debug!("called `Result::unwrap_err()` on an `Ok` value");

                raise(v)
            }
            Err(e) => e,
        }
    }

    /// Returns the contained `Ok` value without checking the variant.
    ///
    /// # Safety
    ///
    /// Calling this on an `Err` is undefined behavior.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        debug_assert!(self.is_ok());

        match self {
            Ok(v) => v,
            Err(_) => unreachable_unchecked(),
        }
    }

    /// Returns the contained `Err` value without checking the variant.
    ///
    /// # Safety
    ///
    /// Calling this on an `Ok` is undefined behavior.
    #[inline]
    pub unsafe fn unwrap_err_unchecked(self) -> E {
        debug_assert!(self.is_err());

        match self {
            Ok(_) => unreachable_unchecked(),
            Err(e) => e,
        }
    }

    /* Chaining */

    /// Returns `res` if the result is `Ok`, otherwise the own `Err` value.
    ///
    /// `res` is evaluated eagerly, use [`and_then`](Result::and_then) to
    /// pass the result of a function call.
    #[inline]
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Ok(_) => res,
            Err(e) => Err(e),
        }
    }

    /// Calls `op` if the result is `Ok`, otherwise returns the own `Err`
    /// value.
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(v) => op(v),
            Err(e) => Err(e),
        }
    }

    /// Returns `res` if the result is `Err`, otherwise the own `Ok` value.
    #[inline]
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(_) => res,
        }
    }

    /// Calls `op` if the result is `Err`, otherwise returns the own `Ok`
    /// value.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => op(e),
        }
    }

    /// Returns the contained `Ok` value or the provided default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(v) => v,
            Err(_) => default,
        }
    }

    /// Returns the contained `Ok` value or computes it from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Ok(v) => v,
            Err(e) => op(e),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Result<T, E> {
        self.and_then(|x| x)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(res: std::result::Result<T, E>) -> Self {
        match res {
            std::result::Result::Ok(v) => Ok(v),
            std::result::Result::Err(e) => Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(res: Result<T, E>) -> Self {
        res.into_std()
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_ok().into_std())
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Result<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    fn catch<F, T>(f: F) -> Panic
    where
        F: FnOnce() -> T + UnwindSafe,
        T: Any + Send,
    {
        Result::<T, Panic>::from(f).unwrap_err()
    }

    #[test]
    fn test_ok() {
        let x: Result<usize, &str> = Ok(5);

        assert!(x.is_ok());
        assert!(!x.is_err());
        assert_eq!(Some(&5), x.ok());
        assert_eq!(None, x.err());
        assert_eq!(5, x.unwrap());
    }

    #[test]
    fn test_err() {
        let x: Result<usize, &str> = Err("error");

        assert!(x.is_err());
        assert!(!x.is_ok());
        assert_eq!(None, x.ok());
        assert_eq!(Some(&"error"), x.err());
        assert_eq!("error", x.unwrap_err());
    }

    #[test]
    fn test_from_return_value() {
        let x: Result<&str, Panic> = Result::from(|| "Test");

        assert!(x.is_ok());
        assert_eq!("Test", x.unwrap());
    }

    #[test]
    fn test_from_panic() {
        let x: Result<usize, Panic> = Result::from(|| panic!("boom"));

        assert!(x.is_err());
        assert_eq!("boom", x.unwrap_err().to_string());
    }

    #[test]
    fn test_from_panic_keeps_payload() {
        let x: Result<usize, Panic> = Result::from(|| std::panic::panic_any(404u16));
        let payload = x.unwrap_err().downcast::<u16>().unwrap();

        assert_eq!(404, payload);
    }

    #[test]
    fn test_from_converts_error() {
        #[derive(Debug)]
        struct Error(String);

        impl From<Panic> for Error {
            fn from(panic: Panic) -> Self {
                Self(panic.to_string())
            }
        }

        let x: Result<usize, Error> = Result::from(|| panic!("converted"));

        assert!(x.is_err_and(|e| e.0 == "converted"));
    }

    #[test]
    fn test_from_fallible() {
        let x: Result<i32, Box<dyn std::error::Error>> =
            Result::from_fallible(|| "12".parse::<i32>());
        assert!(x.contains(&12i32));

        let x: Result<i32, Box<dyn std::error::Error>> =
            Result::from_fallible(|| "twelve".parse::<i32>());
        assert!(x.is_err());

        let x: Result<i32, Box<dyn std::error::Error>> =
            Result::from_fallible(|| -> std::result::Result<i32, std::num::ParseIntError> {
                panic!("parser exploded")
            });
        assert!(x.is_err_and(|e| e.to_string() == "parser exploded"));
    }

    #[test]
    fn test_is_ok_and() {
        let x: Result<usize, &str> = Ok(2);
        assert!(x.is_ok_and(|x| *x > 1));
        assert!(!x.is_ok_and(|x| *x > 2));

        let called = Cell::new(false);
        let x: Result<usize, &str> = Err("hey");
        assert!(!x.is_ok_and(|_| {
            called.set(true);
            true
        }));
        assert!(!called.get());
    }

    #[test]
    fn test_is_err_and() {
        let x: Result<usize, &str> = Err("hey");
        assert!(x.is_err_and(|e| e.len() == 3));

        let called = Cell::new(false);
        let x: Result<usize, &str> = Ok(2);
        assert!(!x.is_err_and(|_| {
            called.set(true);
            true
        }));
        assert!(!called.get());
    }

    #[test]
    fn test_contains() {
        let x: Result<String, usize> = Ok(String::from("a"));
        assert!(x.contains(&"a"));
        assert!(!x.contains(&"b"));
        assert!(!x.contains_err(&0usize));

        let x: Result<String, usize> = Err(3);
        assert!(x.contains_err(&3usize));
        assert!(!x.contains(&"a"));
    }

    #[test]
    fn test_into_ok_into_err() {
        let x: Result<usize, &str> = Ok(1);
        assert_eq!(Some(1), x.into_ok());
        assert_eq!(None, x.into_err());

        let x: Result<usize, &str> = Err("nope");
        assert_eq!(None, x.into_ok());
        assert_eq!(Some("nope"), x.into_err());
    }

    #[test]
    fn test_unwrap_raises_error_payload() {
        let panic = catch(|| Err::<usize, &str>("boom").unwrap());

        assert_eq!("boom", panic.downcast::<&str>().unwrap());
    }

    #[test]
    fn test_unwrap_resumes_captured_panic() {
        let panic = catch(|| {
            let x: Result<usize, Panic> = Result::from(|| std::panic::panic_any(7u64));

            x.unwrap()
        });

        assert_eq!(7, panic.downcast::<u64>().unwrap());
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_unwrap_err_value() {
        Err::<usize, &str>("boom").unwrap();
    }

    #[test]
    fn test_extract_non_send_error() {
        use std::rc::Rc;

        let x: Result<usize, Box<dyn std::error::Error>> = Ok(3);
        assert_eq!(3, x.expect("boxed error"));

        let x: Result<usize, Rc<String>> = Err(Rc::new(String::from("shared")));
        assert_eq!(6, x.unwrap_or_else(|e| e.len()));

        let msg = String::from("borrowed");
        let x: Result<usize, &str> = Err(msg.as_str());
        assert_eq!(Some("borrowed"), x.into_err());
    }

    #[test]
    fn test_expect() {
        let x: Result<usize, &str> = Ok(1);
        assert_eq!(1, x.expect("not reached"));

        let panic = catch(|| Err::<usize, usize>(13).expect("custom message"));
        assert_eq!("custom message", panic.to_string());
    }

    #[test]
    fn test_unwrap_err_raises_value() {
        let panic = catch(|| Ok::<usize, &str>(9).unwrap_err());

        assert_eq!(9, panic.downcast::<usize>().unwrap());
    }

    #[test]
    fn test_expect_err() {
        let x: Result<usize, &str> = Err("err");
        assert_eq!("err", x.expect_err("not reached"));

        let panic = catch(|| Ok::<usize, usize>(1).expect_err("expected failure"));
        assert_eq!("expected failure", panic.to_string());
    }

    #[test]
    fn test_unwrap_or() {
        let x: Result<usize, &str> = Ok(9);
        assert_eq!(9, x.unwrap_or(2));
        assert_eq!(9, x.unwrap_or_default(2));

        let x: Result<usize, &str> = Err("error");
        assert_eq!(2, x.unwrap_or(2));
        assert_eq!(2, x.unwrap_or_default(2));
        assert_eq!(5, x.unwrap_or_else(|e| e.len()));
    }

    #[test]
    fn test_unwrap_unchecked() {
        let x: Result<usize, &str> = Ok(2);
        assert_eq!(2, unsafe { x.unwrap_unchecked() });

        let x: Result<usize, &str> = Err("emergency failure");
        assert_eq!("emergency failure", unsafe { x.unwrap_err_unchecked() });
    }

    #[test]
    fn test_map() {
        let x: Result<usize, &str> = Ok(2);
        assert_eq!(Ok(4), x.map(|x| x * 2));

        let x: Result<usize, &str> = Err("fail");
        assert_eq!(0, x.map(|x| x + 1).unwrap_or(0));
    }

    #[test]
    fn test_map_err() {
        let x: Result<usize, usize> = Err(13);
        assert_eq!(Err(String::from("error code: 13")), x.map_err(|e| format!("error code: {}", e)));

        let x: Result<usize, usize> = Ok(2);
        assert_eq!(Ok(2), x.map_err(|_| -> usize { unreachable!() }));
    }

    #[test]
    fn test_map_or() {
        let x: Result<&str, &str> = Ok("foo");
        assert_eq!(3, x.map_or(42, |v| v.len()));

        let x: Result<&str, &str> = Err("bar");
        assert_eq!(42, x.map_or(42, |v| v.len()));
    }

    #[test]
    fn test_map_or_else() {
        let k = 21;

        let x: Result<&str, &str> = Ok("foo");
        assert_eq!(3, x.map_or_else(|_| k * 2, |v| v.len()));

        let x: Result<&str, &str> = Err("bar");
        assert_eq!(42, x.map_or_else(|_| k * 2, |v| v.len()));
    }

    #[test]
    fn test_and() {
        let x: Result<usize, &str> = Ok(2);
        let y: Result<&str, &str> = Err("late error");
        assert_eq!(Err("late error"), x.and(y));

        let x: Result<usize, &str> = Err("early error");
        let y: Result<&str, &str> = Ok("foo");
        assert_eq!(Err("early error"), x.and(y));

        let x: Result<usize, &str> = Ok(2);
        let y: Result<&str, &str> = Ok("different result type");
        assert_eq!(Ok("different result type"), x.and(y));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let called = Cell::new(false);
        let x: Result<usize, &str> = Err("fail");
        let x = x.and_then(|v| {
            called.set(true);
            Ok(v)
        });

        assert_eq!(Err("fail"), x);
        assert!(!called.get());
    }

    #[test]
    fn test_or() {
        let x: Result<usize, &str> = Ok(2);
        let y: Result<usize, &str> = Err("late error");
        assert_eq!(Ok(2), x.or(y));

        let x: Result<usize, &str> = Err("early error");
        let y: Result<usize, &str> = Ok(2);
        assert_eq!(Ok(2), x.or(y));
    }

    #[test]
    fn test_or_else_short_circuits() {
        let called = Cell::new(false);
        let x: Result<usize, &str> = Ok(2);
        let x = x.or_else(|e| -> Result<usize, usize> {
            called.set(true);
            Err(e.len())
        });

        assert_eq!(Ok(2), x);
        assert!(!called.get());

        let x: Result<usize, &str> = Err("four");
        assert_eq!(Ok(4), x.or_else(|e| Ok::<usize, ()>(e.len())));
    }

    #[test]
    fn test_inspect() {
        let seen = Cell::new(0);

        let x: Result<usize, &str> = Ok(4);
        let y = x.inspect(|v| seen.set(*v)).inspect_err(|_| seen.set(100));
        assert_eq!(x, y);
        assert_eq!(4, seen.get());

        let x: Result<usize, &str> = Err("e");
        let y = x.inspect(|v| seen.set(*v + 1));
        assert_eq!(x, y);
        assert_eq!(4, seen.get());
    }

    #[test]
    fn test_iter() {
        let x: Result<usize, &str> = Ok(5);
        assert_eq!(vec![&5], x.iter().collect::<Vec<_>>());
        assert_eq!(vec![&5], x.iter().collect::<Vec<_>>());

        let x: Result<usize, &str> = Err("x");
        assert_eq!(0, x.iter().count());
    }

    #[test]
    fn test_iter_mut() {
        let mut x: Result<usize, &str> = Ok(5);

        for v in &mut x {
            *v += 1;
        }

        assert_eq!(Ok(6), x);
        assert_eq!(vec![6], x.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_flatten() {
        let x: Result<Result<usize, &str>, &str> = Ok(Ok(1));
        assert_eq!(Ok(1), x.flatten());

        let x: Result<Result<usize, &str>, &str> = Ok(Err("inner"));
        assert_eq!(Err("inner"), x.flatten());
    }

    #[test]
    fn test_std_conversion() {
        let x: Result<usize, &str> = "7".parse::<usize>().map_err(|_| "parse").into();
        assert_eq!(Ok(7), x);

        let y: std::result::Result<usize, &str> = x.into();
        assert_eq!(std::result::Result::Ok(7), y);
    }

    #[test]
    fn test_end_to_end() {
        let x = Ok::<i32, &str>(2)
            .map(|x| x * 2)
            .and_then(|x| if x > 0 { Ok(x) } else { Err("neg") })
            .unwrap();
        assert_eq!(4, x);

        let x = Err::<i32, &str>("fail").map(|x| x + 1).unwrap_or(0);
        assert_eq!(0, x);
    }
}
