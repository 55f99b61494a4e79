//! Little-endian wire primitives and packed record layouts
//!
//! Every telemetry record is described once with [`wire_struct!`], which generates the
//! struct, its [`WireFormat`] implementation (exact size, decode, encode) and its
//! [`Layout`] field table. Sizes are the plain sum of field widths: the wire format has
//! no alignment padding, so nothing here depends on `repr` attributes or host layout.
//!
//! ## Byte order
//!
//! All multi-byte values are little-endian regardless of host architecture. Reads go
//! through [`ByteReader`], which bounds-checks every access and reports overruns as
//! [`DecodeError::TooShort`].

use crate::{DecodeError, Result};

/// A fixed-size value with an exact little-endian wire representation.
pub trait WireFormat: Sized {
    /// Exact encoded size in bytes.
    const SIZE: usize;

    /// Decode one value, advancing the reader by exactly [`Self::SIZE`] bytes.
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self>;

    /// Append the encoded value (exactly [`Self::SIZE`] bytes) to the writer.
    fn encode(&self, writer: &mut ByteWriter);

    /// Decode a value from the front of `data`.
    fn decode_from(data: &[u8]) -> Result<Self> {
        Self::decode(&mut ByteReader::new(data))
    }

    /// Encode into a freshly allocated buffer of exactly [`Self::SIZE`] bytes.
    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SIZE);
        self.encode(&mut writer);
        writer.into_inner()
    }
}

/// Name and width of one top-level field of a packed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as exposed on the Rust struct
    pub name: &'static str,
    /// Width in bytes (element width × count for arrays)
    pub size: usize,
}

/// Static field table for a packed record, in wire order.
pub trait Layout: WireFormat {
    /// Fields in wire order; offsets are the running sum of the preceding sizes.
    const FIELDS: &'static [FieldSpec];

    /// Byte offset of a top-level field, relative to the start of the record.
    fn offset_of(name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in Self::FIELDS {
            if field.name == name {
                return Some(offset);
            }
            offset += field.size;
        }
        None
    }
}

/// Bounds-checked little-endian cursor over a byte slice.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Take the next `N` bytes as an array.
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.take_slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Take the next `len` bytes as a slice.
    pub fn take_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.data.len();
        let end = self
            .pos
            .checked_add(len)
            .ok_or_else(|| DecodeError::too_short(available, usize::MAX))?;
        let bytes =
            self.data.get(self.pos..end).ok_or_else(|| DecodeError::too_short(available, end))?;
        self.pos = end;
        Ok(bytes)
    }
}

/// Growable little-endian output buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    pub fn put(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append `len` zero bytes.
    pub fn pad(&mut self, len: usize) {
        self.buf.resize(self.buf.len() + len, 0);
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

macro_rules! impl_wire_primitive {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl WireFormat for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
                    reader.take::<{ std::mem::size_of::<$ty>() }>().map(<$ty>::from_le_bytes)
                }

                #[inline]
                fn encode(&self, writer: &mut ByteWriter) {
                    writer.put(&self.to_le_bytes());
                }
            }
        )+
    };
}

impl_wire_primitive!(u8, i8, u16, i16, u32, i32, u64, f32, f64);

impl<T: WireFormat + Default, const N: usize> WireFormat for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let mut out: [T; N] = std::array::from_fn(|_| T::default());
        for item in out.iter_mut() {
            *item = T::decode(reader)?;
        }
        Ok(out)
    }

    fn encode(&self, writer: &mut ByteWriter) {
        for item in self {
            item.encode(writer);
        }
    }
}

/// Declare a packed little-endian record.
///
/// Fields are decoded and encoded in declaration order; the record's size is the sum of
/// the field sizes. Attributes (including doc comments and derives) pass through.
macro_rules! wire_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        impl $crate::wire::WireFormat for $name {
            const SIZE: usize = 0 $( + <$ty as $crate::wire::WireFormat>::SIZE )+;

            fn decode(reader: &mut $crate::wire::ByteReader<'_>) -> $crate::Result<Self> {
                Ok(Self {
                    $( $field: <$ty as $crate::wire::WireFormat>::decode(reader)?, )+
                })
            }

            fn encode(&self, writer: &mut $crate::wire::ByteWriter) {
                $( $crate::wire::WireFormat::encode(&self.$field, writer); )+
            }
        }

        impl $crate::wire::Layout for $name {
            const FIELDS: &'static [$crate::wire::FieldSpec] = &[
                $(
                    $crate::wire::FieldSpec {
                        name: stringify!($field),
                        size: <$ty as $crate::wire::WireFormat>::SIZE,
                    },
                )+
            ];
        }
    };
}

pub(crate) use wire_struct;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    wire_struct! {
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct Mixed {
            pub a: u8,
            pub b: f32,
            pub c: i16,
            pub d: [u16; 3],
            pub e: f64,
        }
    }

    #[test]
    fn sizes_have_no_padding() {
        assert_eq!(<Mixed as WireFormat>::SIZE, 1 + 4 + 2 + 6 + 8);
        assert_eq!(<[f32; 4] as WireFormat>::SIZE, 16);
        assert_eq!(<u64 as WireFormat>::SIZE, 8);
    }

    #[test]
    fn offsets_follow_declaration_order() {
        assert_eq!(Mixed::offset_of("a"), Some(0));
        assert_eq!(Mixed::offset_of("b"), Some(1));
        assert_eq!(Mixed::offset_of("c"), Some(5));
        assert_eq!(Mixed::offset_of("d"), Some(7));
        assert_eq!(Mixed::offset_of("e"), Some(13));
        assert_eq!(Mixed::offset_of("missing"), None);
    }

    #[test]
    fn values_are_little_endian_at_fixed_offsets() -> Result<()> {
        let value = Mixed { a: 0xAB, b: 1.5, c: -2, d: [0x0102, 0x0304, 0x0506], e: -0.25 };
        let bytes = value.to_bytes();
        assert_eq!(bytes.len(), <Mixed as WireFormat>::SIZE);
        assert_eq!(bytes[0], 0xAB);
        assert_eq!(&bytes[1..5], &1.5f32.to_le_bytes());
        assert_eq!(&bytes[5..7], &(-2i16).to_le_bytes());
        assert_eq!(&bytes[7..9], &[0x02, 0x01]);
        assert_eq!(&bytes[13..21], &(-0.25f64).to_le_bytes());

        assert_eq!(Mixed::decode_from(&bytes)?, value);
        Ok(())
    }

    #[test]
    fn reader_overrun_reports_too_short() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        assert_eq!(reader.take::<2>(), Ok([1, 2]));
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.take::<4>(), Err(DecodeError::TooShort { actual: 3, required: 6 }));
        // A failed read does not advance the cursor.
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn writer_pads_with_zeroes() {
        let mut writer = ByteWriter::default();
        writer.put(&[9]);
        writer.pad(3);
        assert_eq!(writer.len(), 4);
        assert_eq!(writer.into_inner(), vec![9, 0, 0, 0]);
    }

    proptest! {
        #[test]
        fn primitive_values_survive_the_wire(
            a in any::<u8>(),
            c in any::<i16>(),
            d in any::<[u16; 3]>(),
            b in -1.0e6f32..1.0e6,
            e in -1.0e9f64..1.0e9,
        ) {
            let value = Mixed { a, b, c, d, e };
            let bytes = value.to_bytes();
            prop_assert_eq!(Mixed::decode_from(&bytes)?, value);
        }

        #[test]
        fn truncated_records_never_panic(data in proptest::collection::vec(any::<u8>(), 0..21)) {
            prop_assert!(Mixed::decode_from(&data).is_err());
        }
    }
}
