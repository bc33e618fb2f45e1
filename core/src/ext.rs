use std::panic::AssertUnwindSafe;
use std::thread;

use futures_util::FutureExt;
use futures_util::future::{CatchUnwind, Map};
use resultify_types::{Outcome, Panic};

/// Future returned by [`CatchPanicExt::catch_panic`].
pub type CatchPanic<Fut> = Map<
    CatchUnwind<AssertUnwindSafe<Fut>>,
    fn(thread::Result<<Fut as Future>::Output>) -> Outcome<<Fut as Future>::Output, Panic>,
>;

/// Capture panics raised while polling a future as [`Outcome::Err`].
pub trait CatchPanicExt: Future + Sized {
    /// Resolve to `Outcome::Ok` with the future's output, or to `Outcome::Err` with the
    /// payload of a panic raised during any poll.
    ///
    /// The future is asserted unwind-safe. State it shares with the caller may be left
    /// half-updated when a panic is captured.
    fn catch_panic(self) -> CatchPanic<Self>;
}

impl<Fut: Future> CatchPanicExt for Fut {
    fn catch_panic(self) -> CatchPanic<Self> {
        AssertUnwindSafe(self)
            .catch_unwind()
            .map(capture as fn(thread::Result<Fut::Output>) -> Outcome<Fut::Output, Panic>)
    }
}

fn capture<T>(result: thread::Result<T>) -> Outcome<T, Panic> {
    match result {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => Outcome::Err(Panic::new(payload)),
    }
}
