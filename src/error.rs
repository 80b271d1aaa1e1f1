use core::fmt;

/// Specific kind of formatting failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The formatted text does not fit in the destination slice or within the
    /// caller's digit budget. `len` is the length the output would need,
    /// `cap` the capacity that was available.
    Capacity { len: usize, cap: usize },
    /// The value's magnitude does not fit the fixed decimal layout.
    Overflow,
}

/// Error returned by the formatting functions.
///
/// The original device firmware signalled these conditions implicitly, by
/// leaving the destination unterminated; here they are explicit and the
/// destination contents are unspecified after a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Returns the [`ErrorKind`] of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn capacity(len: usize, cap: usize) -> Self {
        Self {
            kind: ErrorKind::Capacity { len, cap },
        }
    }

    pub(crate) fn overflow() -> Self {
        Self {
            kind: ErrorKind::Overflow,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Capacity { len, cap } => {
                write!(f, "output of {} bytes exceeds capacity of {}", len, cap)
            }
            ErrorKind::Overflow => write!(f, "magnitude exceeds the fixed decimal layout"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
