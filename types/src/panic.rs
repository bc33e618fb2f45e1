//! Captured panic payloads.

use std::any::{Any, TypeId};
use std::error::Error;
use std::fmt;
use std::panic::{panic_any, resume_unwind};

const OPAQUE_PAYLOAD: &str = "opaque panic payload";

/// A panic payload captured at an unwind boundary, stored verbatim.
///
/// The payload is whatever the panicking code handed to the runtime: a `&'static str`
/// or `String` for `panic!` with a message, or any `Send + 'static` value for
/// [`std::panic::panic_any`]. No attempt is made to normalize it.
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    #[must_use]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// The panic message, when the payload is one of the string types `panic!` produces.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(s)
        } else if let Some(s) = self.payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    #[must_use]
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Resume unwinding with the original payload.
    ///
    /// The panic hook is not invoked again; it already ran when the panic was first raised.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl From<Box<dyn Any + Send>> for Panic {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::new(payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message().unwrap_or(OPAQUE_PAYLOAD))
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or(OPAQUE_PAYLOAD))
    }
}

impl Error for Panic {}

/// Panic with `error` as the payload.
///
/// The payload is `error` itself, so a `catch_unwind` boundary can downcast it back to
/// `E`, and the panic hook reports it like any other panic. A [`Panic`] was already
/// reported when it was first raised, so it is resumed with its original payload without
/// running the hook again.
pub fn raise<E: Send + 'static>(error: E) -> ! {
    if TypeId::of::<E>() == TypeId::of::<Panic>() {
        let payload: Box<dyn Any + Send> = Box::new(error);
        if let Ok(panic) = payload.downcast::<Panic>() {
            let panic = *panic;
            panic.resume();
        }
        unreachable!("payload type was checked to be Panic");
    }
    panic_any(error)
}
