use std::option::Option as StdOption;
use std::result::Result as StdResult;

use crate::{Err, None, Ok, Option, Result, Some};

/// A value that carries either an ok payload or an error payload.
///
/// Implemented for the types of this crate as well as their `std`
/// counterparts, so fallible computations may return either.
pub trait Try {
    type Ok;
    type Error;

    fn into_result(self) -> Result<Self::Ok, Self::Error>;
    fn from_ok(v: Self::Ok) -> Self;
    fn from_error(v: Self::Error) -> Self;
}

impl<T, E> Try for Result<T, E> {
    type Ok = T;
    type Error = E;

    fn into_result(self) -> Result<T, E> {
        self
    }

    fn from_ok(v: T) -> Self {
        Ok(v)
    }

    fn from_error(v: E) -> Self {
        Err(v)
    }
}

impl<T> Try for Option<T> {
    type Ok = T;
    type Error = ();

    fn into_result(self) -> Result<T, ()> {
        self.ok_or(())
    }

    fn from_ok(v: T) -> Self {
        Some(v)
    }

    fn from_error(_: ()) -> Self {
        None
    }
}

impl<T, E> Try for StdResult<T, E> {
    type Ok = T;
    type Error = E;

    fn into_result(self) -> Result<T, E> {
        self.into()
    }

    fn from_ok(v: T) -> Self {
        StdResult::Ok(v)
    }

    fn from_error(v: E) -> Self {
        StdResult::Err(v)
    }
}

impl<T> Try for StdOption<T> {
    type Ok = T;
    type Error = ();

    fn into_result(self) -> Result<T, ()> {
        let opt: Option<T> = self.into();

        opt.ok_or(())
    }

    fn from_ok(v: T) -> Self {
        StdOption::Some(v)
    }

    fn from_error(_: ()) -> Self {
        StdOption::None
    }
}
