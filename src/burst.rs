//! Motion-burst frame layout and the surface-quality gate.
//!
//! The motion burst register streams a consistent 12-byte snapshot of the
//! navigation core in one chip-select window: every byte belongs to the
//! same latched frame, unlike sequential single-register reads which can
//! straddle a frame boundary.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(
//! #   mut flow: paa5100je::Paa5100je<impl embedded_hal_async::spi::SpiDevice, impl embedded_hal_async::delay::DelayNs>,
//! # ) {
//! let frame = flow.read_frame().await.unwrap();
//! if frame.is_valid() {
//!   let _ = (frame.delta_x, frame.delta_y, frame.shutter());
//! }
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};

use super::{defs::*, Error, MotionSample, Paa5100je};

impl<S, D, W, E> Paa5100je<S, D, W>
where
  S: SpiDevice<u8, Error = E>,
  D: DelayNs,
{
  /// Read one motion-burst frame.
  ///
  /// Reading the frame latches and clears the delta counters, so each
  /// frame reports displacement since the previous frame.
  pub async fn read_frame(&mut self) -> Result<BurstFrame, Error<E>> {
    self.read(Reg::MotionBurst).await
  }
}

/// One 12-byte motion-burst frame, in wire order: motion status,
/// observation, delta X, delta Y, squal, raw-data statistics and the
/// shutter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 12)]
pub struct BurstFrame {
  #[skip(4)]
  pub raw_overflow: bool,
  #[skip(2)]
  pub motion: bool,
  #[bits(8)]
  pub observation: u8,
  #[bits(16)]
  pub delta_x: i16,
  #[bits(16)]
  pub delta_y: i16,
  #[bits(8)]
  pub squal: u8,
  #[bits(8)]
  pub raw_sum: u8,
  #[bits(8)]
  pub raw_max: u8,
  #[bits(8)]
  pub raw_min: u8,
  #[bits(8)]
  pub shutter_upper: u8,
  #[bits(8)]
  pub shutter_lower: u8,
}

impl BurstFrame {
  /// Shutter exposure value assembled from the split registers.
  pub fn shutter(&self) -> u16 {
    (self.shutter_upper as u16) << 8 | self.shutter_lower as u16
  }

  /// Whether the frame carries usable surface information.
  ///
  /// Low surface quality combined with a saturated shutter means the
  /// sensor found nothing trackable (too dark, too far, or a featureless
  /// surface) and the deltas are noise.
  pub fn is_valid(&self) -> bool {
    !(self.squal < SQUAL_THRESHOLD && self.shutter_upper == SHUTTER_SATURATED)
  }
}

impl From<BurstFrame> for MotionSample {
  fn from(f: BurstFrame) -> Self {
    MotionSample {
      motion: f.motion,
      raw_overflow: f.raw_overflow,
      observation: f.observation,
      delta_x: f.delta_x,
      delta_y: f.delta_y,
      squal: f.squal,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn frame(raw: [u8; 12]) -> BurstFrame {
    TryFrom::try_from(raw).ok().unwrap()
  }

  #[test]
  fn frame_decodes_wire_capture() {
    // Motion set, dx = -12, dy = 16, squal 0x55, shutter 0x0532.
    let f = frame([0x80, 0xB7, 0xF4, 0xFF, 0x10, 0x00, 0x55, 0x64, 0xC8, 0x32, 0x05, 0x32]);
    assert!(f.motion);
    assert!(!f.raw_overflow);
    assert_eq!(f.observation, 0xB7);
    assert_eq!(f.delta_x, -12);
    assert_eq!(f.delta_y, 16);
    assert_eq!(f.squal, 0x55);
    assert_eq!(f.shutter(), 0x0532);
    assert!(f.is_valid());
  }

  #[test]
  fn saturated_shutter_with_poor_squal_is_rejected() {
    let f = frame([0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x10, 0x00, 0x00, 0x00, 0x1F, 0xFF]);
    assert!(!f.is_valid());
  }

  #[test]
  fn poor_squal_alone_is_not_rejected() {
    // Short exposure: the scene is bright, low squal is still meaningful.
    let f = frame([0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x10, 0x00, 0x00, 0x00, 0x05, 0xFF]);
    assert!(f.is_valid());
  }

  #[test]
  fn sample_keeps_the_motion_fields() {
    let s: MotionSample = frame([0x90, 0x3F, 0x02, 0x00, 0xFE, 0xFF, 0x42, 0, 0, 0, 0, 0]).into();
    assert!(s.motion);
    assert!(s.raw_overflow);
    assert_eq!(s.observation, 0x3F);
    assert_eq!(s.delta_x, 2);
    assert_eq!(s.delta_y, -2);
    assert_eq!(s.squal, 0x42);
  }
}
