//! Motion sampling, batch reads and scaled flow output.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(
//! #   mut flow: paa5100je::Paa5100je<impl embedded_hal_async::spi::SpiDevice, impl embedded_hal_async::delay::DelayNs>,
//! # ) {
//! use paa5100je::MotionSample;
//!
//! // Gated single read in counts
//! if let Ok(delta) = flow.get_motion().await {
//!   let _ = (delta.x, delta.y);
//! }
//!
//! // Batch read into a caller-provided buffer; samples carry squal so
//! // the caller applies its own quality policy
//! let mut samples = [MotionSample::default(); 8];
//! flow.read_motion(&mut samples).await.unwrap();
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};
use micromath::vector::Vector2d;

use super::{defs::*, Error, MotionSample, MotionStatus, Paa5100je};

impl<S, D, W, E> Paa5100je<S, D, W>
where
  S: SpiDevice<u8, Error = E>,
  D: DelayNs,
{
  /// Fill a caller-provided buffer with motion samples, one burst frame
  /// per slot.
  ///
  /// Each sample reports displacement accumulated since the previous
  /// frame. No quality gating is applied; every sample carries its own
  /// `squal`. An empty slice is a no-op.
  pub async fn read_motion(&mut self, samples: &mut [MotionSample]) -> Result<(), Error<E>> {
    for slot in samples.iter_mut() {
      *slot = self.read_frame().await?.into();
    }
    Ok(())
  }

  /// Displacement since the previous read, in counts.
  ///
  /// Returns [`Error::NoSignal`] when the frame fails the surface-quality
  /// gate; the deltas of such frames are noise and must not be
  /// accumulated.
  pub async fn get_motion(&mut self) -> Result<Vector2d<i16>, Error<E>> {
    let frame = self.read_frame().await?;
    if !frame.is_valid() {
      return Err(Error::NoSignal);
    }
    Ok(Vector2d { x: frame.delta_x, y: frame.delta_y })
  }

  /// Displacement since the previous read as flow angle in radians.
  ///
  /// Scaled by the sensor's optical geometry. Multiply by height above the
  /// surface to recover linear displacement.
  pub async fn get_flow(&mut self) -> Result<Vector2d<f32>, Error<E>> {
    let delta = self.get_motion().await?;
    Ok(Vector2d { x: delta.x as f32 * RAD_PER_COUNT, y: delta.y as f32 * RAD_PER_COUNT })
  }

  /// Non-burst fallback through the individual motion registers.
  ///
  /// Reads `MOTION` first to latch the deltas, then assembles the sample
  /// from the delta and squal registers one byte at a time. Slower than
  /// [`read_frame`](Self::read_frame) and the bytes are not snapshotted
  /// together; prefer the burst path outside of bring-up debugging.
  pub async fn get_motion_slow(&mut self) -> Result<MotionSample, Error<E>> {
    let status: MotionStatus = self.read(Reg::Motion).await?;
    let xl = self.read_u8(Reg::DeltaXL).await?;
    let xh = self.read_u8(Reg::DeltaXH).await?;
    let yl = self.read_u8(Reg::DeltaYL).await?;
    let yh = self.read_u8(Reg::DeltaYH).await?;
    let squal = self.read_u8(Reg::Squal).await?;
    let observation = self.read_u8(Reg::Observation).await?;

    Ok(MotionSample {
      motion: status.motion,
      raw_overflow: status.raw_overflow,
      observation,
      delta_x: i16::from_le_bytes([xl, xh]),
      delta_y: i16::from_le_bytes([yl, yh]),
      squal,
    })
  }

  /// Whether deltas accumulated since the last read (`MOTION.MOT`).
  pub async fn motion_pending(&mut self) -> Result<bool, Error<E>> {
    let status: MotionStatus = self.read(Reg::Motion).await?;
    Ok(status.motion)
  }
}
