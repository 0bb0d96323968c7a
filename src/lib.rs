//! Tagged `Result` and `Option` types with a fluent combinator API.
//!
//! A [`Result`] is either `Ok` or `Err`; an [`Option`] is either `Some` or
//! `None`. Both can be built from a computation that might panic
//! ([`Result::from`], [`Option::from`]), which turns the panic into a plain
//! value that flows through `map`, `and_then`, `or_else` and friends until it
//! is explicitly unwrapped.
//!
//! ```
//! use fallible::{Err, Ok, Panic, Result};
//!
//! let x = Ok::<i32, &str>(2)
//!     .map(|x| x * 2)
//!     .and_then(|x| if x > 0 { Ok(x) } else { Err("neg") });
//! assert_eq!(4, x.unwrap());
//!
//! let x: Result<i32, Panic> = Result::from(|| "x".parse::<i32>().unwrap());
//! assert!(x.is_err());
//! ```
//!
//! The `async-capture` feature adds `from_future` to both types.

mod core;
mod misc;

pub use self::core::{Err, IntoIter, Iter, IterMut, None, Ok, Option, Panic, Result, Some};
pub use self::misc::Try;
