use bitfield_struct::bitfield;

use super::{put, put_bytes, take, take_bytes, Frame, Reader, Writer};
use crate::error::{Result, StegError};
use crate::raster::PixelBuffer;

/// Channels of every hidden image. The prefix carries no channel count.
pub const CHANNELS: u8 = 3;

/// The image frame prefix: width in the high half, height in the low half.
#[bitfield(u32, order = Msb)]
pub struct Dimensions {
    #[bits(16)]
    pub width: u16,
    #[bits(16)]
    pub height: u16,
}

impl Dimensions {
    fn body_len(&self) -> u64 {
        self.width() as u64 * self.height() as u64 * CHANNELS as u64
    }
}

/// The dimensions of an RGB image followed by its channel values, in buffer order.
pub struct ImageFrame;

fn narrow(value: u32) -> Result<u16> {
    u16::try_from(value).map_err(|_| StegError::ValueTooLarge {
        value: value as u64,
        width: 16,
    })
}

impl Frame for ImageFrame {
    type Payload = PixelBuffer;
    type Output = PixelBuffer;
    type Header = Dimensions;

    const PREFIX_BITS: u64 = u32::BITS as u64;
    const NAME: &'static str = "image";

    fn header(payload: &PixelBuffer) -> Result<Dimensions> {
        if payload.channels() != CHANNELS {
            return Err(StegError::UnsupportedChannels {
                expected: CHANNELS,
                actual: payload.channels(),
            });
        }

        Ok(Dimensions::new()
            .with_width(narrow(payload.width())?)
            .with_height(narrow(payload.height())?))
    }

    fn required_bits(dims: &Dimensions) -> Option<u64> {
        Some(dims.body_len() * 8 + Self::PREFIX_BITS)
    }

    fn write_header(writer: &mut Writer, dims: &Dimensions) -> Result<()> {
        put(writer, u32::from(*dims) as u64, u32::BITS)
    }

    fn write_body(writer: &mut Writer, payload: &PixelBuffer) -> Result<()> {
        put_bytes(writer, payload.as_raw())
    }

    fn read_header(reader: &mut Reader) -> Result<Dimensions> {
        Ok(Dimensions::from(take(reader, u32::BITS)? as u32))
    }

    fn read_body(reader: &mut Reader, dims: &Dimensions) -> Result<PixelBuffer> {
        let data = take_bytes(reader, dims.body_len())?;

        PixelBuffer::new(dims.width() as u32, dims.height() as u32, CHANNELS, data)
    }
}
