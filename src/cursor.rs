//! Address generator over the (row, column, channel, plane) space of a pixel buffer.

use crate::error::{Result, StegError};

pub const PLANES: u8 = 8;

/// One addressable bit: a channel of a pixel, and which bit of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub column: u32,
    pub channel: u8,
    pub plane: u8,
}

/// Walks every channel of every pixel, channel fastest, then column, then row.
///
/// Once the whole grid has been walked the cursor moves on to the next more significant
/// bit plane and starts over at the first pixel. After the grid wraps on the last plane
/// the cursor is exhausted: the next [`position`][PlaneCursor::position] or
/// [`advance`][PlaneCursor::advance] fails with [`StegError::CapacityExhausted`].
#[derive(Clone, Debug)]
pub struct PlaneCursor {
    width: u32,
    height: u32,
    channels: u8,

    pos: Position,
    exhausted: bool,
}

impl PlaneCursor {
    pub fn new(width: u32, height: u32, channels: u8) -> Self {
        Self {
            width,
            height,
            channels,
            pos: Position {
                row: 0,
                column: 0,
                channel: 0,
                plane: 0,
            },
            exhausted: width == 0 || height == 0 || channels == 0,
        }
    }

    /// Bits in a single plane of the grid.
    pub fn plane_bits(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.channels as u64
    }

    /// Bits left, counting the current position.
    pub fn remaining(&self) -> u64 {
        if self.exhausted {
            return 0;
        }

        let per_row = self.width as u64 * self.channels as u64;
        let used = self.pos.plane as u64 * self.plane_bits()
            + self.pos.row as u64 * per_row
            + self.pos.column as u64 * self.channels as u64
            + self.pos.channel as u64;

        PLANES as u64 * self.plane_bits() - used
    }

    pub fn position(&self) -> Result<Position> {
        if self.exhausted {
            return Err(StegError::CapacityExhausted);
        }

        Ok(self.pos)
    }

    pub fn mask(&self) -> u8 {
        1 << self.pos.plane
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn advance(&mut self) -> Result<()> {
        if self.exhausted {
            return Err(StegError::CapacityExhausted);
        }

        let pos = &mut self.pos;

        pos.channel += 1;
        if pos.channel < self.channels {
            return Ok(());
        }

        pos.channel = 0;
        pos.column += 1;
        if pos.column < self.width {
            return Ok(());
        }

        pos.column = 0;
        pos.row += 1;
        if pos.row < self.height {
            return Ok(());
        }

        pos.row = 0;
        if pos.plane + 1 == PLANES {
            log::debug!("All {} bit planes used", PLANES);
            self.exhausted = true;
        } else {
            pos.plane += 1;
            log::debug!("Escalating to bit plane {}", pos.plane);
        }

        Ok(())
    }
}
