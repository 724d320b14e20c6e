use super::{put, put_bytes, take, take_bytes, Frame, Reader, Writer};
use crate::error::Result;

const LEN_BITS: u32 = 64;

/// A 64-bit byte length followed by the bytes themselves.
pub struct BinaryFrame;

impl Frame for BinaryFrame {
    type Payload = [u8];
    type Output = Vec<u8>;
    type Header = u64;

    const PREFIX_BITS: u64 = LEN_BITS as u64;
    const NAME: &'static str = "binary";

    fn header(payload: &[u8]) -> Result<u64> {
        Ok(payload.len() as u64)
    }

    fn required_bits(len: &u64) -> Option<u64> {
        Some(len.saturating_mul(8).saturating_add(Self::PREFIX_BITS))
    }

    fn write_header(writer: &mut Writer, len: &u64) -> Result<()> {
        put(writer, *len, LEN_BITS)
    }

    fn write_body(writer: &mut Writer, payload: &[u8]) -> Result<()> {
        put_bytes(writer, payload)
    }

    fn read_header(reader: &mut Reader) -> Result<u64> {
        take(reader, LEN_BITS)
    }

    fn read_body(reader: &mut Reader, len: &u64) -> Result<Vec<u8>> {
        take_bytes(reader, *len)
    }
}
