use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use std::path::Path;

use crate::error::{Result, StegError};

/// A `width × height` grid of pixels, each holding `channels` 8-bit values.
///
/// Pixels are stored row-major with the channels of one pixel next to each other,
/// the same layout the `image` crate uses for its raw buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels as usize;

        if data.len() != expected {
            return Err(StegError::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A buffer with every channel value set to `fill`.
    pub fn filled(width: u32, height: u32, channels: u8, fill: u8) -> Self {
        let len = width as usize * height as usize * channels as usize;

        Self {
            width,
            height,
            channels,
            data: vec![fill; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn get(&self, row: u32, column: u32, channel: u8) -> u8 {
        self.data[self.index(row, column, channel)]
    }

    pub fn set(&mut self, row: u32, column: u32, channel: u8, value: u8) {
        let index = self.index(row, column, channel);
        self.data[index] = value;
    }

    fn index(&self, row: u32, column: u32, channel: u8) -> usize {
        (row as usize * self.width as usize + column as usize) * self.channels as usize
            + channel as usize
    }

    fn color_type(&self) -> Option<ColorType> {
        match self.channels {
            1 => Some(ColorType::L8),
            2 => Some(ColorType::La8),
            3 => Some(ColorType::Rgb8),
            4 => Some(ColorType::Rgba8),
            _ => None,
        }
    }
}

impl From<DynamicImage> for PixelBuffer {
    fn from(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();

        let (channels, data) = match img.color() {
            ColorType::L8 => (1, img.into_luma8().into_raw()),
            ColorType::La8 => (2, img.into_luma_alpha8().into_raw()),
            color if color.has_alpha() => (4, img.into_rgba8().into_raw()),
            _ => (3, img.into_rgb8().into_raw()),
        };

        Self {
            width,
            height,
            channels,
            data,
        }
    }
}

/// Decode the image at `path`, keeping its channel count where it is 8-bit.
pub fn load<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let img = image::open(path.as_ref())?;

    log::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.as_ref().display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(PixelBuffer::from(img))
}

/// Decode the image at `path` as 3-channel RGB.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let img = image::open(path)?;

    Ok(PixelBuffer::from(DynamicImage::ImageRgb8(img.into_rgb8())))
}

/// Write `buffer` to `path` verbatim. The format comes from the extension and must be lossless.
pub fn save<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();

    let format = ImageFormat::from_path(path)?;
    match format {
        ImageFormat::Png
        | ImageFormat::Bmp
        | ImageFormat::Tiff
        | ImageFormat::Tga
        | ImageFormat::Pnm
        | ImageFormat::Farbfeld => {}
        other => return Err(StegError::LossyFormat(other)),
    }

    let color = buffer
        .color_type()
        .ok_or(StegError::UnsupportedChannels {
            expected: 3,
            actual: buffer.channels,
        })?;

    image::save_buffer_with_format(
        path,
        &buffer.data,
        buffer.width,
        buffer.height,
        color,
        format,
    )?;

    log::debug!("Saved {}", path.display());

    Ok(())
}
