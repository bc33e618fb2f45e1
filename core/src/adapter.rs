use std::any::type_name;
use std::panic::{AssertUnwindSafe, catch_unwind};

use resultify_types::{Outcome, Panic, Raised};

use crate::call::AsyncCall;
use crate::ext::CatchPanicExt;

/// An async operation whose calls resolve to an [`Outcome`] instead of unwinding.
///
/// Created by [`resultify`]. Holds nothing but the wrapped callable and a label for log
/// events, so calls are independent of each other and may run concurrently.
#[derive(Clone)]
pub struct Resultify<F> {
    func: F,
    name: &'static str,
}

/// Wrap `func` so that each call resolves to an [`Outcome`].
///
/// ```
/// use resultify::resultify;
///
/// async fn explode() -> u32 {
///     panic!("boom")
/// }
///
/// # futures_util::FutureExt::now_or_never(async {
/// let outcome = resultify(explode).call(()).await;
/// assert!(outcome.value().is_none());
/// assert_eq!(outcome.error().and_then(|p| p.message()), Some("boom"));
/// # }).unwrap();
/// ```
#[must_use]
pub fn resultify<F>(func: F) -> Resultify<F> {
    Resultify::new(func)
}

impl<F> Resultify<F> {
    #[must_use]
    pub fn new(func: F) -> Self {
        Self {
            func,
            name: type_name::<F>(),
        }
    }

    /// Label recorded as `operation` on log events. Defaults to the callable's type name.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn get_ref(&self) -> &F {
        &self.func
    }

    #[must_use]
    pub fn into_inner(self) -> F {
        self.func
    }

    /// Invoke the wrapped operation with `args` and wait for it.
    ///
    /// Resolves to `Outcome::Ok` with the operation's output, or to `Outcome::Err` with
    /// the payload of a panic raised either while creating the future or while polling it.
    /// Nothing escapes this call as an unwind.
    pub async fn call<Args>(&self, args: Args) -> Outcome<<F as AsyncCall<Args>>::Output, Panic>
    where
        F: AsyncCall<Args>,
    {
        let outcome = match catch_unwind(AssertUnwindSafe(|| self.func.invoke(args))) {
            Ok(future) => future.catch_panic().await,
            Err(payload) => Outcome::Err(Panic::new(payload)),
        };

        match &outcome {
            Outcome::Ok(_) => tracing::trace!(operation = self.name, "operation completed"),
            Outcome::Err(panic) => tracing::debug!(
                operation = self.name,
                panic = %panic,
                "captured panic from operation"
            ),
        }
        outcome
    }

    /// Like [`call`](Self::call), for operations that already report failure as `Err`.
    ///
    /// `Ok(value)` becomes `Outcome::Ok(value)`, `Err(error)` becomes
    /// `Outcome::Err(Raised::Error(error))`, and a panic becomes
    /// `Outcome::Err(Raised::Panic(..))`.
    pub async fn try_call<Args, T, E>(&self, args: Args) -> Outcome<T, Raised<E>>
    where
        F: AsyncCall<Args, Output = Result<T, E>>,
    {
        match self.call(args).await {
            Outcome::Ok(Ok(value)) => Outcome::Ok(value),
            Outcome::Ok(Err(error)) => Outcome::Err(Raised::Error(error)),
            Outcome::Err(panic) => Outcome::Err(Raised::Panic(panic)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resultify;
    use futures_util::FutureExt;
    use futures_util::future::Ready;
    use resultify_types::Raised;

    async fn halve(x: u32) -> Result<u32, String> {
        if x % 2 == 0 {
            Ok(x / 2)
        } else {
            Err(format!("{x} is odd"))
        }
    }

    fn eager_panic(_: u8) -> Ready<u8> {
        panic!("before the future existed")
    }

    #[test]
    fn call_wraps_success() {
        let outcome = resultify(|x: i32| async move { x * 2 })
            .call((21,))
            .now_or_never()
            .unwrap();
        assert_eq!(outcome.value(), Some(&42));
        assert!(outcome.error().is_none());
    }

    #[test]
    fn call_captures_panic_raised_before_future() {
        let outcome = resultify(eager_panic).call((1,)).now_or_never().unwrap();
        assert!(outcome.value().is_none());
        assert_eq!(
            outcome.error().and_then(|p| p.message()),
            Some("before the future existed")
        );
    }

    #[test]
    fn try_call_maps_each_channel() {
        let halver = resultify(halve);

        let ok = halver.try_call((8,)).now_or_never().unwrap();
        assert_eq!(ok.into_value(), Some(4));

        let err = halver.try_call((3,)).now_or_never().unwrap();
        match err.into_error() {
            Some(Raised::Error(message)) => assert_eq!(message, "3 is odd"),
            other => panic!("expected Raised::Error, got {other:?}"),
        }
    }

    #[test]
    fn try_call_captures_panics() {
        let failing = resultify(|| async {
            if true {
                panic!("no result at all");
            }
            Ok::<u8, String>(0)
        });
        let outcome = failing.try_call(()).now_or_never().unwrap();
        let raised = outcome.into_error().unwrap();
        assert!(raised.is_panic());
        assert_eq!(raised.to_string(), "panicked: no result at all");
    }

    #[test]
    fn name_defaults_to_type_and_can_be_overridden() {
        let adapter = resultify(halve);
        assert!(adapter.name().ends_with("halve"));
        assert_eq!(adapter.with_name("halve-op").name(), "halve-op");
    }
}
