//! Drives a [`Frame`] over a carrier from start to finish.
//!
//! Every call walks the carrier with its own fresh cursor, through the stages
//! `Idle -> Prefix -> Body -> Done`. There is no resuming: a failed call leaves
//! nothing to continue from, and a carrier that failed mid-hide must be thrown away.

use std::fmt;

use crate::channel::BitChannel;
use crate::cursor::PLANES;
use crate::error::{Result, StegError};
use crate::frame::Frame;
use crate::raster::PixelBuffer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    Prefix,
    Body,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Idle => "idle",
            Stage::Prefix => "prefix",
            Stage::Body => "body",
            Stage::Done => "done",
        })
    }
}

/// Total bits the cursor can address in `carrier`, over all eight planes.
pub fn capacity_bits(carrier: &PixelBuffer) -> u64 {
    carrier.width() as u64 * carrier.height() as u64 * carrier.channels() as u64 * PLANES as u64
}

/// Hide `payload` in `carrier` using the framing `F`.
///
/// Frames that report a requirement are checked against the carrier first and fail
/// with [`StegError::CapacityExceeded`] before any pixel changes. Otherwise a payload
/// that does not fit fails with [`StegError::CapacityExhausted`] part way through,
/// and `carrier` must not be saved.
pub fn hide<F: Frame>(carrier: &mut PixelBuffer, payload: &F::Payload) -> Result<()> {
    let mut stage = Stage::Idle;

    let result = hide_stages::<F>(carrier, payload, &mut stage);
    finish::<F, _>(result, stage, "hide")
}

/// Recover the payload hidden in `carrier` with the framing `F`.
///
/// The prefix is trusted as-is. On a carrier that holds no such frame the result is
/// garbage or [`StegError::CapacityExhausted`].
pub fn reveal<F: Frame>(carrier: &PixelBuffer) -> Result<F::Output> {
    let mut stage = Stage::Idle;

    let result = reveal_stages::<F>(carrier, &mut stage);
    finish::<F, _>(result, stage, "reveal")
}

fn hide_stages<F: Frame>(
    carrier: &mut PixelBuffer,
    payload: &F::Payload,
    stage: &mut Stage,
) -> Result<()> {
    let header = F::header(payload)?;

    if let Some(required) = F::required_bits(&header) {
        let available = capacity_bits(carrier);

        log::debug!(
            "Hiding {} frame: {} of {} bits",
            F::NAME,
            required,
            available
        );

        if required > available {
            return Err(StegError::CapacityExceeded {
                required,
                available,
            });
        }
    }

    let mut writer = BitChannel::new(carrier);

    advance(stage, Stage::Prefix);
    F::write_header(&mut writer, &header)?;

    advance(stage, Stage::Body);
    F::write_body(&mut writer, payload)?;

    advance(stage, Stage::Done);
    Ok(())
}

fn reveal_stages<F: Frame>(carrier: &PixelBuffer, stage: &mut Stage) -> Result<F::Output> {
    let mut reader = BitChannel::new(carrier);

    advance(stage, Stage::Prefix);
    let header = F::read_header(&mut reader)?;

    advance(stage, Stage::Body);
    let payload = F::read_body(&mut reader, &header)?;

    advance(stage, Stage::Done);
    Ok(payload)
}

fn advance(stage: &mut Stage, next: Stage) {
    log::trace!("{} -> {}", stage, next);
    *stage = next;
}

fn finish<F: Frame, T>(result: Result<T>, stage: Stage, op: &str) -> Result<T> {
    if let Err(e) = &result {
        log::warn!("{} of {} frame failed at {} stage: {}", op, F::NAME, stage, e);
    }

    result
}
