//! Payload framings: a fixed-width prefix followed by a body whose size the prefix gives.
//!
//! Encoding and decoding of a frame walk the same fields in the same order and widths,
//! so a frame read from a carrier with a fresh [`BitChannel`] matches the one written.

use crate::bits;
use crate::channel::BitChannel;
use crate::error::Result;
use crate::raster::PixelBuffer;

mod binary;
mod image;
mod text;

pub use self::image::{Dimensions, ImageFrame};
pub use binary::BinaryFrame;
pub use text::TextFrame;

pub type Writer<'a> = BitChannel<&'a mut PixelBuffer>;
pub type Reader<'a> = BitChannel<&'a PixelBuffer>;

pub trait Frame {
    /// What gets hidden.
    type Payload: ?Sized;

    /// What comes back out; the owned form of `Payload`.
    type Output;

    /// What the prefix holds: a length or a set of dimensions.
    type Header;

    /// Width of the prefix in bits.
    const PREFIX_BITS: u64;

    /// Name used in log messages.
    const NAME: &'static str;

    /// Build the prefix for `payload`, failing if a field does not fit its width.
    fn header(payload: &Self::Payload) -> Result<Self::Header>;

    /// Bits the whole frame needs, when the carrier must be checked before writing.
    fn required_bits(header: &Self::Header) -> Option<u64>;

    fn write_header(writer: &mut Writer, header: &Self::Header) -> Result<()>;

    fn write_body(writer: &mut Writer, payload: &Self::Payload) -> Result<()>;

    fn read_header(reader: &mut Reader) -> Result<Self::Header>;

    fn read_body(reader: &mut Reader, header: &Self::Header) -> Result<Self::Output>;
}

fn put(writer: &mut Writer, value: u64, width: u32) -> Result<()> {
    writer.write_bits(&bits::to_bits(value, width)?)
}

fn take(reader: &mut Reader, width: u32) -> Result<u64> {
    Ok(bits::from_bits(&reader.read_bits(width as usize)?))
}

fn put_bytes(writer: &mut Writer, bytes: &[u8]) -> Result<()> {
    bytes.iter().try_for_each(|&byte| put(writer, byte as u64, 8))
}

/// Read `len` bytes, never reserving more than the carrier has room left for.
fn take_bytes(reader: &mut Reader, len: u64) -> Result<Vec<u8>> {
    let room = reader.cursor().remaining() / 8;
    let mut bytes = Vec::with_capacity(len.min(room) as usize);

    for _ in 0..len {
        bytes.push(take(reader, 8)? as u8);
    }

    Ok(bytes)
}
