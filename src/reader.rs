use std::io::Read;

use crate::{ByteOrder, Error, Result};

/// Decodes fixed-width values from a byte stream, in a byte order given by the caller.
///
/// Implementors only provide [`read_cbytes`](ReadEndian::read_cbytes). Every other method reads
/// exactly the width of its type and converts the bytes with [`ByteOrder`]. Either all of the
/// bytes are read and a value is returned, or the method fails with
/// [`Error::IncompleteRead`]. A partial value is never returned.
///
/// [`BinaryReader`] implements this directly. [`EndianReader`] implements it by delegating to a
/// `BinaryReader`, and adds methods that use the byte order it was constructed with.
pub trait ReadEndian {
    /// Reads exactly `N` bytes.
    fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]>;

    /// Reads a single `u8` value. Byte order does not apply.
    #[inline(always)]
    fn read_u8(&mut self) -> Result<u8> {
        let b: [u8; 1] = self.read_cbytes()?;
        Ok(b[0])
    }

    /// Reads a `u16` in the given byte order.
    #[inline(always)]
    fn read_u16_in(&mut self, order: ByteOrder) -> Result<u16> {
        Ok(order.u16_from_bytes(self.read_cbytes()?))
    }

    /// Reads a `u32` in the given byte order.
    #[inline(always)]
    fn read_u32_in(&mut self, order: ByteOrder) -> Result<u32> {
        Ok(order.u32_from_bytes(self.read_cbytes()?))
    }

    /// Reads a `u64` in the given byte order.
    #[inline(always)]
    fn read_u64_in(&mut self, order: ByteOrder) -> Result<u64> {
        Ok(order.u64_from_bytes(self.read_cbytes()?))
    }

    /// Reads an `f32` in the given byte order. The 4 bytes are decoded as a `u32`, then
    /// reinterpreted as an IEEE-754 binary32 bit pattern.
    #[inline(always)]
    fn read_f32_in(&mut self, order: ByteOrder) -> Result<f32> {
        Ok(order.f32_from_bytes(self.read_cbytes()?))
    }

    /// Reads an `f64` in the given byte order. The 8 bytes are decoded as a `u64`, then
    /// reinterpreted as an IEEE-754 binary64 bit pattern.
    #[inline(always)]
    fn read_f64_in(&mut self, order: ByteOrder) -> Result<f64> {
        Ok(order.f64_from_bytes(self.read_cbytes()?))
    }
}

/// Reads values from a byte stream, choosing the byte order on each call.
///
/// Each call reads from the stream until it has the full width of the value. Streams that
/// return fewer bytes than requested (a socket, a pipe, a chunked decoder) are read again until
/// the value is complete or the stream reports end of data or an error.
///
/// `BinaryReader` does not buffer. If the underlying stream is expensive to call, such as a
/// `File`, wrap it in a `std::io::BufReader` first.
pub struct BinaryReader<R> {
    /// The input stream.
    pub input: R,
}

impl<R: Read> BinaryReader<R> {
    /// Constructor
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Accesses the inner stream
    pub fn get_ref(&self) -> &R {
        &self.input
    }

    /// Accesses the inner stream
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.input
    }

    /// Extracts the inner stream
    pub fn into_inner(self) -> R {
        self.input
    }

    /// Reads a big-endian `u16`.
    #[inline(always)]
    pub fn read_u16_be(&mut self) -> Result<u16> {
        self.read_u16_in(ByteOrder::Big)
    }

    /// Reads a little-endian `u16`.
    #[inline(always)]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.read_u16_in(ByteOrder::Little)
    }

    /// Reads a big-endian `u32`.
    #[inline(always)]
    pub fn read_u32_be(&mut self) -> Result<u32> {
        self.read_u32_in(ByteOrder::Big)
    }

    /// Reads a little-endian `u32`.
    #[inline(always)]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_u32_in(ByteOrder::Little)
    }

    /// Reads a big-endian `u64`.
    #[inline(always)]
    pub fn read_u64_be(&mut self) -> Result<u64> {
        self.read_u64_in(ByteOrder::Big)
    }

    /// Reads a little-endian `u64`.
    #[inline(always)]
    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.read_u64_in(ByteOrder::Little)
    }

    /// Reads a big-endian `f32`.
    #[inline(always)]
    pub fn read_f32_be(&mut self) -> Result<f32> {
        self.read_f32_in(ByteOrder::Big)
    }

    /// Reads a little-endian `f32`.
    #[inline(always)]
    pub fn read_f32_le(&mut self) -> Result<f32> {
        self.read_f32_in(ByteOrder::Little)
    }

    /// Reads a big-endian `f64`.
    #[inline(always)]
    pub fn read_f64_be(&mut self) -> Result<f64> {
        self.read_f64_in(ByteOrder::Big)
    }

    /// Reads a little-endian `f64`.
    #[inline(always)]
    pub fn read_f64_le(&mut self) -> Result<f64> {
        self.read_f64_in(ByteOrder::Little)
    }
}

impl<R: Read> ReadEndian for BinaryReader<R> {
    fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        // read_exact keeps reading after short reads and retries `Interrupted`.
        match self.input.read_exact(&mut buf) {
            Ok(()) => Ok(buf),
            Err(source) => {
                tracing::trace!(width = N, kind = ?source.kind(), "incomplete read");
                Err(Error::IncompleteRead { width: N, source })
            }
        }
    }
}

/// Reads values from a byte stream using one byte order, fixed when the reader is created.
///
/// This is a thin adapter over [`BinaryReader`]. The bytes it consumes and the values it
/// returns are the same as calling the `BinaryReader` methods with the same byte order.
pub struct EndianReader<R> {
    inner: BinaryReader<R>,
    order: ByteOrder,
}

impl<R: Read> EndianReader<R> {
    /// Creates a reader that decodes every value in `order`.
    pub fn new(input: R, order: ByteOrder) -> Self {
        Self {
            inner: BinaryReader::new(input),
            order,
        }
    }

    /// Creates a big-endian reader.
    pub fn big(input: R) -> Self {
        Self::new(input, ByteOrder::Big)
    }

    /// Creates a little-endian reader.
    pub fn little(input: R) -> Self {
        Self::new(input, ByteOrder::Little)
    }

    /// The byte order this reader was created with.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Accesses the inner stream
    pub fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }

    /// Accesses the inner stream
    pub fn get_mut(&mut self) -> &mut R {
        self.inner.get_mut()
    }

    /// Extracts the inner stream
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.inner.read_u8()
    }

    /// Reads a `u16`.
    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.inner.read_u16_in(self.order)
    }

    /// Reads a `u32`.
    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.inner.read_u32_in(self.order)
    }

    /// Reads a `u64`.
    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64> {
        self.inner.read_u64_in(self.order)
    }

    /// Reads an `f32`.
    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.inner.read_f32_in(self.order)
    }

    /// Reads an `f64`.
    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64> {
        self.inner.read_f64_in(self.order)
    }
}

impl<R: Read> ReadEndian for EndianReader<R> {
    #[inline(always)]
    fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.inner.read_cbytes()
    }
}
