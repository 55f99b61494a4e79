//! Fixed-width NUL-terminated UTF-8 text fields

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::Result;
use crate::wire::{ByteReader, ByteWriter, WireFormat};

/// A `N`-byte text field as sent on the wire.
///
/// The raw bytes are kept untouched so a decoded record encodes back to the same bytes.
/// [`FixedString::as_str`] gives the text up to the first NUL, replacing invalid UTF-8.
///
/// Serializes as that text. Deserializing zero-fills the remainder, so bytes after the
/// terminator are not preserved through serde.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedString<const N: usize>([u8; N]);

impl<const N: usize> FixedString<N> {
    /// Wrap raw wire bytes.
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Build a field from text, truncated to at most `N - 1` bytes so a terminator
    /// always fits. Truncation backs off to a character boundary.
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(N.saturating_sub(1));
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let mut bytes = [0u8; N];
        bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        Self(bytes)
    }

    /// Text up to the first NUL byte.
    pub fn as_str(&self) -> Cow<'_, str> {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        String::from_utf8_lossy(&self.0[..end])
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.first().is_none_or(|&b| b == 0)
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl<const N: usize> WireFormat for FixedString<N> {
    const SIZE: usize = N;

    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        reader.take::<N>().map(Self)
    }

    fn encode(&self, writer: &mut ByteWriter) {
        writer.put(&self.0);
    }
}

impl<const N: usize> Serialize for FixedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedString<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TextVisitor<const N: usize>;

        impl<const N: usize> Visitor<'_> for TextVisitor<N> {
            type Value = FixedString<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a string of at most {} bytes", N.saturating_sub(1))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
                if value.len() >= N {
                    return Err(E::invalid_length(value.len(), &self));
                }
                Ok(FixedString::new(value))
            }
        }

        deserializer.deserialize_str(TextVisitor::<N>)
    }
}
