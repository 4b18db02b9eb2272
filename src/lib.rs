//! Reads and writes fixed-width unsigned integers (`u8`, `u16`, `u32`, `u64`) and IEEE-754 floats
//! (`f32`, `f64`) to and from byte streams, in big-endian or little-endian byte order.
//!
//! Every value has a fixed width on the wire: 1, 2, 4, or 8 bytes. Floats are written as the
//! unsigned integer of the same width that holds their bit pattern, so every bit survives a
//! round trip, including NaN payloads and the sign of zero.
//!
//! There are two ways to pick the byte order:
//!
//! * [`EndianReader`] and [`EndianWriter`] are bound to one [`ByteOrder`] when they are created.
//! * [`BinaryReader`] and [`BinaryWriter`] take the byte order on each call, either as an
//!   argument (`read_u32_in(ByteOrder::Big)`) or in the method name (`read_u32_be`).
//!
//! Both produce the same bytes. They share the [`ReadEndian`] and [`WriteEndian`] traits, so code
//! that is generic over the stream can accept either.
//!
//! ```
//! use endian_binary_io::{BinaryReader, ByteOrder, EndianWriter, ReadEndian};
//!
//! let mut w = EndianWriter::big(Vec::new());
//! w.write_u16(0x1234).unwrap();
//! w.write_f32(0.1).unwrap();
//! assert_eq!(w.get_ref(), &[0x12, 0x34, 0x3d, 0xcc, 0xcc, 0xcd]);
//!
//! let bytes = w.into_inner();
//! let mut r = BinaryReader::new(bytes.as_slice());
//! assert_eq!(r.read_u16_in(ByteOrder::Big).unwrap(), 0x1234);
//! assert_eq!(r.read_f32_be().unwrap(), 0.1);
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod error;
mod order;
mod reader;
mod writer;


pub use error::{Error, ParseByteOrderError, Result};
pub use order::ByteOrder;
pub use reader::{BinaryReader, EndianReader, ReadEndian};
pub use writer::{BinaryWriter, EndianWriter, WriteEndian};
