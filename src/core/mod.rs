mod from_iter;
#[cfg(feature = "async-capture")]
mod future;
mod iter;
mod option;
mod panic;
mod result;

pub use iter::{IntoIter, Iter, IterMut};
pub use option::{None, Option, Some};
pub use panic::Panic;
pub use result::{Err, Ok, Result};
