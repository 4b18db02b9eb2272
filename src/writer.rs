use std::io::{self, Write};

use crate::{ByteOrder, Error, Result};

/// Encodes fixed-width values into a byte stream, in a byte order given by the caller.
///
/// Implementors only provide [`write_cbytes`](WriteEndian::write_cbytes). Every other method
/// converts its value with [`ByteOrder`] and writes exactly the width of its type. On success the
/// width is returned. On failure the method returns [`Error::WriteFailure`].
pub trait WriteEndian {
    /// Writes all `N` bytes of `value`, returning `N`.
    fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<usize>;

    /// Writes a single `u8` value. Byte order does not apply.
    #[inline(always)]
    fn write_u8(&mut self, value: u8) -> Result<usize> {
        self.write_cbytes([value])
    }

    /// Writes a `u16` in the given byte order.
    #[inline(always)]
    fn write_u16_in(&mut self, value: u16, order: ByteOrder) -> Result<usize> {
        self.write_cbytes(order.u16_to_bytes(value))
    }

    /// Writes a `u32` in the given byte order.
    #[inline(always)]
    fn write_u32_in(&mut self, value: u32, order: ByteOrder) -> Result<usize> {
        self.write_cbytes(order.u32_to_bytes(value))
    }

    /// Writes a `u64` in the given byte order.
    #[inline(always)]
    fn write_u64_in(&mut self, value: u64, order: ByteOrder) -> Result<usize> {
        self.write_cbytes(order.u64_to_bytes(value))
    }

    /// Writes an `f32` in the given byte order. The value's IEEE-754 bit pattern is written as a
    /// `u32`, so NaN payloads and negative zero are kept.
    #[inline(always)]
    fn write_f32_in(&mut self, value: f32, order: ByteOrder) -> Result<usize> {
        self.write_cbytes(order.f32_to_bytes(value))
    }

    /// Writes an `f64` in the given byte order. The value's IEEE-754 bit pattern is written as a
    /// `u64`, so NaN payloads and negative zero are kept.
    #[inline(always)]
    fn write_f64_in(&mut self, value: f64, order: ByteOrder) -> Result<usize> {
        self.write_cbytes(order.f64_to_bytes(value))
    }
}

/// Encodes values into a byte stream, choosing the byte order on each call.
pub struct BinaryWriter<W> {
    /// The output data.
    pub out: W,
}

impl<W: Write> BinaryWriter<W> {
    /// Constructor
    pub fn wrap(out: W) -> Self {
        Self { out }
    }

    /// Accesses the inner stream
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Accesses the inner stream
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Extracts the inner stream
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Flushes the inner stream.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Writes a big-endian `u16`.
    pub fn write_u16_be(&mut self, value: u16) -> Result<usize> {
        self.write_u16_in(value, ByteOrder::Big)
    }

    /// Writes a little-endian `u16`.
    pub fn write_u16_le(&mut self, value: u16) -> Result<usize> {
        self.write_u16_in(value, ByteOrder::Little)
    }

    /// Writes a big-endian `u32`.
    pub fn write_u32_be(&mut self, value: u32) -> Result<usize> {
        self.write_u32_in(value, ByteOrder::Big)
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32_le(&mut self, value: u32) -> Result<usize> {
        self.write_u32_in(value, ByteOrder::Little)
    }

    /// Writes a big-endian `u64`.
    pub fn write_u64_be(&mut self, value: u64) -> Result<usize> {
        self.write_u64_in(value, ByteOrder::Big)
    }

    /// Writes a little-endian `u64`.
    pub fn write_u64_le(&mut self, value: u64) -> Result<usize> {
        self.write_u64_in(value, ByteOrder::Little)
    }

    /// Writes a big-endian `f32`.
    pub fn write_f32_be(&mut self, value: f32) -> Result<usize> {
        self.write_f32_in(value, ByteOrder::Big)
    }

    /// Writes a little-endian `f32`.
    pub fn write_f32_le(&mut self, value: f32) -> Result<usize> {
        self.write_f32_in(value, ByteOrder::Little)
    }

    /// Writes a big-endian `f64`.
    pub fn write_f64_be(&mut self, value: f64) -> Result<usize> {
        self.write_f64_in(value, ByteOrder::Big)
    }

    /// Writes a little-endian `f64`.
    pub fn write_f64_le(&mut self, value: f64) -> Result<usize> {
        self.write_f64_in(value, ByteOrder::Little)
    }
}

impl BinaryWriter<Vec<u8>> {
    /// Creates a new `BinaryWriter` over a `Vec<u8>`
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    /// Creates a new `BinaryWriter` over a `Vec<u8>` with the given capacity.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len),
        }
    }
}

impl Default for BinaryWriter<Vec<u8>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> WriteEndian for BinaryWriter<W> {
    fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<usize> {
        // A stream that accepts zero bytes makes write_all fail with `WriteZero`.
        match self.out.write_all(&value) {
            Ok(()) => Ok(N),
            Err(source) => {
                tracing::trace!(width = N, kind = ?source.kind(), "write failure");
                Err(Error::WriteFailure { width: N, source })
            }
        }
    }
}

/// Encodes values into a byte stream using one byte order, fixed when the writer is created.
///
/// This is a thin adapter over [`BinaryWriter`] and produces the same bytes.
pub struct EndianWriter<W> {
    inner: BinaryWriter<W>,
    order: ByteOrder,
}

impl<W: Write> EndianWriter<W> {
    /// Creates a writer that encodes every value in `order`.
    pub fn new(out: W, order: ByteOrder) -> Self {
        Self {
            inner: BinaryWriter::wrap(out),
            order,
        }
    }

    /// Creates a big-endian writer.
    pub fn big(out: W) -> Self {
        Self::new(out, ByteOrder::Big)
    }

    /// Creates a little-endian writer.
    pub fn little(out: W) -> Self {
        Self::new(out, ByteOrder::Little)
    }

    /// The byte order this writer was created with.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Accesses the inner stream
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Accesses the inner stream
    pub fn get_mut(&mut self) -> &mut W {
        self.inner.get_mut()
    }

    /// Extracts the inner stream
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }

    /// Flushes the inner stream.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) -> Result<usize> {
        self.inner.write_u8(value)
    }

    /// Writes a single `u16` value
    pub fn write_u16(&mut self, value: u16) -> Result<usize> {
        self.inner.write_u16_in(value, self.order)
    }

    /// Writes a single `u32` value
    pub fn write_u32(&mut self, value: u32) -> Result<usize> {
        self.inner.write_u32_in(value, self.order)
    }

    /// Writes a single `u64` value
    pub fn write_u64(&mut self, value: u64) -> Result<usize> {
        self.inner.write_u64_in(value, self.order)
    }

    /// Writes an `f32` value using its IEEE-754 bit pattern.
    pub fn write_f32(&mut self, value: f32) -> Result<usize> {
        self.inner.write_f32_in(value, self.order)
    }

    /// Writes an `f64` value using its IEEE-754 bit pattern.
    pub fn write_f64(&mut self, value: f64) -> Result<usize> {
        self.inner.write_f64_in(value, self.order)
    }
}

impl<W: Write> WriteEndian for EndianWriter<W> {
    #[inline(always)]
    fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<usize> {
        self.inner.write_cbytes(value)
    }
}
