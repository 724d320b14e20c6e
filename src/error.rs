use image::{ImageError, ImageFormat};
use thiserror::Error;

/// Everything that can go wrong while hiding or revealing a payload.
#[derive(Error, Debug)]
pub enum StegError {
    #[error("value {value} does not fit in {width} bits")]
    ValueTooLarge { value: u64, width: u32 },

    #[error("carrier image not big enough: need {required} bits, have {available}")]
    CapacityExceeded { required: u64, available: u64 },

    #[error("carrier image filled; all 8 bit planes are used")]
    CapacityExhausted,

    #[error("hidden text is not valid UTF-8")]
    InvalidText,

    #[error("expected a {expected}-channel image, got {actual} channels")]
    UnsupportedChannels { expected: u8, actual: u8 },

    #[error("pixel buffer holds {actual} bytes, its dimensions need {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("refusing to save as {0:?}; only lossless formats keep the payload intact")]
    LossyFormat(ImageFormat),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Decode(#[source] ImageError),
}

impl From<ImageError> for StegError {
    fn from(e: ImageError) -> Self {
        match e {
            ImageError::IoError(e) => Self::Io(e),
            e => Self::Decode(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, StegError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_inside_image_errors_are_unwrapped() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = StegError::from(ImageError::IoError(inner));
        assert!(matches!(err, StegError::Io(_)));
    }

    #[test]
    fn messages_carry_the_numbers() {
        let err = StegError::CapacityExceeded {
            required: 520,
            available: 384,
        };
        assert!(err.to_string().contains("520"));

        let err = StegError::ValueTooLarge {
            value: 70000,
            width: 16,
        };
        assert!(err.to_string().contains("16 bits"));
    }
}
