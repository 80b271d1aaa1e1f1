use core::fmt;
use core::str;

use arrayvec::ArrayVec;

use crate::constants::{FLOAT_BUF_LEN, I32_MAX_LEN, MAX_BUF_LEN, U32_MAX_LEN};
use crate::error::Error;
use crate::ftoa;
use crate::itoa;
use crate::itoa::Integer;

/// A stack-allocated buffer you can write formatted numbers into.
///
/// Each write replaces the previous contents and hands back the formatted
/// text as a `&str` borrowing the buffer, so one `Buffer` can be reused
/// across a render loop without allocating.
///
/// # Example
///
/// ```
/// use num_text::Buffer;
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.write_integer(-128).unwrap(), "-128");
/// assert_eq!(buf.write_float(0.0).unwrap(), "0");
/// assert_eq!(buf.as_str(), "0");
/// ```
#[derive(Clone, Default)]
pub struct Buffer {
    inner: ArrayVec<u8, MAX_BUF_LEN>,
}

impl Buffer {
    /// Constructs a new, empty `Buffer`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ArrayVec::new(),
        }
    }

    /// Formats `n` as decimal text into the buffer, replacing any previous
    /// contents, and returns the formatted text.
    pub fn write_integer<N>(&mut self, n: N) -> Result<&str, Error>
    where
        N: Integer,
    {
        let mut tmp = [0u8; I32_MAX_LEN];
        let len = itoa::format(n, &mut tmp, U32_MAX_LEN)?;
        self.replace_with(&tmp[..len])
    }

    /// Formats `f` as fixed-decimal text into the buffer, replacing any
    /// previous contents, and returns the formatted text.
    pub fn write_float(&mut self, f: f32) -> Result<&str, Error> {
        let mut tmp = [0u8; FLOAT_BUF_LEN];
        let len = ftoa::format(f, &mut tmp)?;
        self.replace_with(&tmp[..len])
    }

    /// Returns a `&str` view of the buffer's contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // The formatters only ever emit ASCII.
        unsafe { str::from_utf8_unchecked(self.inner.as_slice()) }
    }

    /// Returns a `&[u8]` view of the buffer's contents.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_slice()
    }

    /// Returns the length of the buffer's contents in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn replace_with(&mut self, bytes: &[u8]) -> Result<&str, Error> {
        self.inner.clear();
        self.inner
            .try_extend_from_slice(bytes)
            .map_err(|_| Error::capacity(bytes.len(), MAX_BUF_LEN))?;
        Ok(self.as_str())
    }
}

impl AsRef<str> for Buffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Buffer {}

#[cfg(feature = "with-serde")]
mod serialization {
    use super::{Buffer, MAX_BUF_LEN};

    use core::fmt;

    use serde::{de, ser};

    impl ser::Serialize for Buffer {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> de::Deserialize<'de> for Buffer {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            struct BufferVisitor;

            impl<'de> de::Visitor<'de> for BufferVisitor {
                type Value = Buffer;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "a string no longer than {} bytes", MAX_BUF_LEN)
                }

                fn visit_str<E>(self, v: &str) -> Result<Buffer, E>
                where
                    E: de::Error,
                {
                    let mut buf = Buffer::new();
                    buf.inner
                        .try_extend_from_slice(v.as_bytes())
                        .map_err(|_| E::invalid_length(v.len(), &self))?;
                    Ok(buf)
                }
            }

            deserializer.deserialize_str(BufferVisitor)
        }
    }
}
