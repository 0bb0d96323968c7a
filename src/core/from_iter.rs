use std::iter::FromIterator;

use super::option::Option;
use super::result::Result;

/// Collects the `Ok` values of an iterator, stopping at the first `Err`.
///
/// ```
/// use fallible::{Err, Ok, Result};
///
/// let x: Result<Vec<u32>, &str> = vec![Ok(1), Ok(2)].into_iter().collect();
/// assert_eq!(Ok(vec![1, 2]), x);
///
/// let x: Result<Vec<u32>, &str> = vec![Ok(1), Err("bad"), Ok(3)].into_iter().collect();
/// assert_eq!(Err("bad"), x);
/// ```
impl<A, E, V> FromIterator<Result<A, E>> for Result<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Result<A, E>>,
    {
        iter.into_iter()
            .map(Result::into_std)
            .collect::<std::result::Result<V, E>>()
            .into()
    }
}

/// Collects the `Some` values of an iterator, stopping at the first `None`.
impl<A, V> FromIterator<Option<A>> for Option<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Option<A>>,
    {
        iter.into_iter()
            .map(Option::into_std)
            .collect::<std::option::Option<V>>()
            .into()
    }
}
