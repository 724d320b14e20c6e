//! Hide payloads in the low bits of an image's pixel channels, and get them back.
//!
//! A [`PixelBuffer`] is walked channel by channel, pixel by pixel, one bit at a time.
//! When the whole grid has been used the walk starts over one bit higher, so a carrier
//! holds up to `width × height × channels × 8` bits. What is written is a [`Frame`]:
//! a length or dimension prefix followed by the payload.
//!
//! ```
//! use lsbsteg::{engine, PixelBuffer, TextFrame};
//!
//! let mut carrier = PixelBuffer::filled(4, 4, 3, 0x80);
//! engine::hide::<TextFrame>(&mut carrier, "hi")?;
//!
//! assert_eq!(engine::reveal::<TextFrame>(&carrier)?, "hi");
//! # Ok::<(), lsbsteg::StegError>(())
//! ```

pub mod bits;
pub mod channel;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod frame;
pub mod raster;

pub use channel::BitChannel;
pub use cursor::PlaneCursor;
pub use error::StegError;
pub use frame::{BinaryFrame, Frame, ImageFrame, TextFrame};
pub use raster::PixelBuffer;
