use std::borrow::{Borrow, BorrowMut};

use crate::cursor::PlaneCursor;
use crate::error::Result;
use crate::raster::PixelBuffer;

/// Reads and writes single bits of a pixel buffer in cursor order.
///
/// `B` is `&PixelBuffer` for revealing and `&mut PixelBuffer` for hiding; only the
/// latter gets the write methods. Each channel owns its own cursor, starting at the
/// first bit of the first plane.
#[derive(Debug)]
pub struct BitChannel<B> {
    buffer: B,
    cursor: PlaneCursor,
}

impl<B: Borrow<PixelBuffer>> BitChannel<B> {
    pub fn new(buffer: B) -> Self {
        let cursor = {
            let b = buffer.borrow();
            PlaneCursor::new(b.width(), b.height(), b.channels())
        };

        Self { buffer, cursor }
    }

    pub fn cursor(&self) -> &PlaneCursor {
        &self.cursor
    }

    pub fn read_bit(&mut self) -> Result<bool> {
        let pos = self.cursor.position()?;

        let value = self.buffer.borrow().get(pos.row, pos.column, pos.channel);
        let bit = value & self.cursor.mask() != 0;

        self.cursor.advance()?;

        Ok(bit)
    }

    pub fn read_bits(&mut self, n: usize) -> Result<Vec<bool>> {
        (0..n).map(|_| self.read_bit()).collect()
    }
}

impl<B: BorrowMut<PixelBuffer>> BitChannel<B> {
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        let pos = self.cursor.position()?;
        let mask = self.cursor.mask();

        let buffer = self.buffer.borrow_mut();
        let value = buffer.get(pos.row, pos.column, pos.channel);
        let value = if bit { value | mask } else { value & !mask };
        buffer.set(pos.row, pos.column, pos.channel, value);

        self.cursor.advance()
    }

    /// Writes `bits` in order. Running out of room part way leaves the bits already
    /// written in the buffer.
    pub fn write_bits(&mut self, bits: &[bool]) -> Result<()> {
        bits.iter().try_for_each(|&bit| self.write_bit(bit))
    }
}
