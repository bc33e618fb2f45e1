//! The success/failure union.

use serde::{Deserialize, Serialize};

use crate::panic::raise;

/// Either a success carrying a value or a failure carrying an error.
///
/// Both parameters are unconstrained. An `Outcome` is a plain value: it exposes no way to
/// replace its payload after construction, so it is read by matching, by the total
/// accessors ([`value`](Self::value), [`error`](Self::error), [`into_parts`](Self::into_parts)),
/// or by one of the two escape hatches back to other control flow:
/// [`unwrap`](Self::unwrap) unwinds, [`into_result`](Self::into_result) feeds `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

/// Field-wise view of an [`Outcome`]: exactly one of `error` and `value` is `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parts<T, E> {
    pub error: Option<E>,
    pub value: Option<T>,
}

impl<T, E> Outcome<T, E> {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Split into `{ error, value }` for destructuring without a match.
    ///
    /// ```
    /// use resultify_types::{Outcome, Parts};
    ///
    /// let Parts { error, value } = Outcome::<u32, String>::Ok(7).into_parts();
    /// assert_eq!((error, value), (None, Some(7)));
    /// ```
    #[must_use]
    pub fn into_parts(self) -> Parts<T, E> {
        match self {
            Self::Ok(value) => Parts {
                error: None,
                value: Some(value),
            },
            Self::Err(error) => Parts {
                error: Some(error),
                value: None,
            },
        }
    }

    /// Convert to a standard `Result` so the error can be propagated with `?`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Return the success value, or unwind with the stored error as the panic payload.
    ///
    /// The unwind carries the error itself, so a `catch_unwind` boundary gets back exactly
    /// what was stored. A captured [`Panic`](crate::Panic) resumes its original payload.
    /// Called on `Err` outside any such boundary, this terminates the current thread.
    pub fn unwrap(self) -> T
    where
        E: Send + 'static,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => raise(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
