use thiserror::Error;

use crate::panic::Panic;

/// Failure of an operation that can fail either by returning `Err` or by panicking.
///
/// The variant records only which channel the failure arrived on. The payload itself is
/// kept as-is.
#[derive(Debug, Error)]
pub enum Raised<E> {
    #[error("{0}")]
    Error(E),
    #[error("panicked: {0}")]
    Panic(Panic),
}

impl<E> Raised<E> {
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panic(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Panic(_) => None,
        }
    }

    #[must_use]
    pub fn panic(&self) -> Option<&Panic> {
        match self {
            Self::Error(_) => None,
            Self::Panic(panic) => Some(panic),
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Panic(_) => None,
        }
    }
}

impl<E> From<Panic> for Raised<E> {
    fn from(panic: Panic) -> Self {
        Self::Panic(panic)
    }
}

#[cfg(test)]
mod tests {
    use super::Raised;
    use crate::Panic;

    #[test]
    fn error_variant_displays_payload() {
        let raised: Raised<String> = Raised::Error("connection reset".into());
        assert!(!raised.is_panic());
        assert_eq!(raised.to_string(), "connection reset");
        assert_eq!(raised.error().map(String::as_str), Some("connection reset"));
        assert!(raised.panic().is_none());
    }

    #[test]
    fn panic_variant_keeps_message() {
        let raised: Raised<String> = Panic::new(Box::new("boom")).into();
        assert!(raised.is_panic());
        assert_eq!(raised.to_string(), "panicked: boom");
        assert_eq!(raised.panic().and_then(Panic::message), Some("boom"));
        assert_eq!(raised.into_error(), None);
    }
}
