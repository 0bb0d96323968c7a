use std::any::Any;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::panic::{catch_unwind, resume_unwind, RefUnwindSafe, UnwindSafe};

/// The captured payload of a panic.
///
/// A `Panic` is what a wrapped computation "throws": whenever
/// [`Result::from`](crate::Result::from) catches an unwind, the payload
/// handed to `panic!` (or [`std::panic::panic_any`]) ends up in here. The
/// original value can be recovered with [`downcast`](Panic::downcast), and
/// the unwind can be continued with [`resume`](Panic::resume).
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message if the payload is a string.
    ///
    /// `panic!("literal")` produces a `&'static str` payload and
    /// `panic!("{}", x)` with a runtime `x` produces a `String`; both are
    /// covered.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(s)
        } else if let Some(s) = self.payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            None
        }
    }

    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Tries to recover the original payload, returning `self` unchanged if
    /// the payload is of a different type.
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        match self.payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload }),
        }
    }

    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the captured payload.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl Debug for Panic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.message() {
            Some(message) => f.debug_tuple("Panic").field(&message).finish(),
            None => f.debug_tuple("Panic").field(&"..").finish(),
        }
    }
}

impl Display for Panic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.message() {
            Some(message) => f.write_str(message),
            None => f.write_str("panicked with a non-string payload"),
        }
    }
}

impl Error for Panic {}

// The payload is never touched again after the unwind it came from.
impl UnwindSafe for Panic {}
impl RefUnwindSafe for Panic {}

/// Runs `f`, turning an unwind into a `Panic` value.
pub(crate) fn capture<F, T>(f: F) -> Result<T, Panic>
where
    F: FnOnce() -> T + UnwindSafe,
{
    catch_unwind(f).map_err(caught)
}

/// Wraps the payload of a caught unwind.
pub(crate) fn caught(payload: Box<dyn Any + Send + 'static>) -> Panic {
    let panic = Panic::new(payload);

    tracing::debug!(panic = %panic, "captured panic of fallible computation");

    panic
}

/// Unwinds with `payload` as the panic payload.
///
/// A `Panic` is not wrapped a second time: its own payload is resumed, so a
/// value captured by [`capture`] is re-raised exactly as it was thrown.
pub(crate) fn raise<P>(payload: P) -> !
where
    P: Any + Send,
{
    let payload: Box<dyn Any + Send> = Box::new(payload);

    match payload.downcast::<Panic>() {
        Ok(panic) => panic.resume(),
        Err(payload) => resume_unwind(payload),
    }
}
