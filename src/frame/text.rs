use super::{put, put_bytes, take, take_bytes, Frame, Reader, Writer};
use crate::error::{Result, StegError};

const LEN_BITS: u32 = 16;

/// A 16-bit byte length followed by the UTF-8 bytes of the text.
pub struct TextFrame;

impl Frame for TextFrame {
    type Payload = str;
    type Output = String;
    type Header = u64;

    const PREFIX_BITS: u64 = LEN_BITS as u64;
    const NAME: &'static str = "text";

    fn header(payload: &str) -> Result<u64> {
        let len = payload.len() as u64;

        if len >> LEN_BITS != 0 {
            return Err(StegError::ValueTooLarge {
                value: len,
                width: LEN_BITS,
            });
        }

        Ok(len)
    }

    // Text is never checked against the carrier up front, unlike binary and image
    // frames. A message that does not fit fails with CapacityExhausted once every
    // plane is used, after part of it has been written.
    fn required_bits(_: &u64) -> Option<u64> {
        None
    }

    fn write_header(writer: &mut Writer, len: &u64) -> Result<()> {
        put(writer, *len, LEN_BITS)
    }

    fn write_body(writer: &mut Writer, payload: &str) -> Result<()> {
        put_bytes(writer, payload.as_bytes())
    }

    fn read_header(reader: &mut Reader) -> Result<u64> {
        take(reader, LEN_BITS)
    }

    fn read_body(reader: &mut Reader, len: &u64) -> Result<String> {
        String::from_utf8(take_bytes(reader, *len)?).map_err(|_| StegError::InvalidText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::BitChannel;
    use crate::raster::PixelBuffer;

    #[test]
    fn length_comes_first_then_characters() {
        let mut buffer = PixelBuffer::filled(4, 4, 3, 0);
        let text = String::from("hi");

        {
            let mut writer = BitChannel::new(&mut buffer);
            let len = TextFrame::header(&text).unwrap();
            TextFrame::write_header(&mut writer, &len).unwrap();
            TextFrame::write_body(&mut writer, &text).unwrap();
        }

        // 16-bit length 2: only the 15th bit is set
        let lsbs = buffer.as_raw().iter().map(|v| v & 1).collect::<Vec<_>>();
        assert_eq!(lsbs[..16].iter().sum::<u8>(), 1);
        assert_eq!(lsbs[14], 1);
        // 'h' = 0x68 = 01101000
        assert_eq!(lsbs[16..24], [0u8, 1, 1, 0, 1, 0, 0, 0]);

        let mut reader = BitChannel::new(&buffer);
        let len = TextFrame::read_header(&mut reader).unwrap();
        assert_eq!(len, 2);
        assert_eq!(TextFrame::read_body(&mut reader, &len).unwrap(), "hi");
    }

    #[test]
    fn too_long_for_a_16_bit_length() {
        let text = "x".repeat(65536);
        assert!(matches!(
            TextFrame::header(&text),
            Err(StegError::ValueTooLarge { width: 16, .. })
        ));
        assert!(TextFrame::header(&"x".repeat(65535)).is_ok());
    }

    #[test]
    fn rejects_bytes_that_are_not_utf8() {
        let mut buffer = PixelBuffer::filled(8, 8, 3, 0);

        {
            let mut writer = BitChannel::new(&mut buffer);
            put(&mut writer, 1, LEN_BITS).unwrap();
            put_bytes(&mut writer, &[0xFF]).unwrap();
        }

        let mut reader = BitChannel::new(&buffer);
        let len = TextFrame::read_header(&mut reader).unwrap();
        assert!(matches!(
            TextFrame::read_body(&mut reader, &len),
            Err(StegError::InvalidText)
        ));
    }
}
