/// Motion status register contents.
///
/// `motion` reports that deltas accumulated since the last read; when
/// `raw_overflow` is set the deltas saturated and undercount the true
/// displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct MotionStatus {
  #[skip(4)]
  pub raw_overflow: bool,
  #[skip(2)]
  pub motion: bool,
}

/// One decoded motion sample.
///
/// Displacement is relative to the previous read: reading a frame latches
/// and clears the delta counters. `squal` is the surface-quality metric;
/// low values mean the deltas should not be trusted (see
/// [`BurstFrame::is_valid`](crate::burst::BurstFrame::is_valid) for the
/// gate [`get_motion`](crate::Paa5100je::get_motion) applies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
  /// Deltas accumulated since the previous read
  pub motion: bool,
  /// Delta counters saturated before the read
  pub raw_overflow: bool,
  /// Navigation-core state byte as reported in the burst frame
  pub observation: u8,
  /// Signed X displacement count since the previous read
  pub delta_x: i16,
  /// Signed Y displacement count since the previous read
  pub delta_y: i16,
  /// Surface quality (tracking confidence)
  pub squal: u8,
}

/// Axis orientation register.
///
/// Maps the sensor's optical axes onto the platform's frame. Applied via
/// [`set_orientation`](crate::Paa5100je::set_orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct Orientation {
  #[skip(5)]
  pub invert_x: bool,
  pub invert_y: bool,
  pub swap_xy: bool,
}

impl Default for Orientation {
  fn default() -> Self {
    Orientation::rotated(Rotation::Deg0)
  }
}

/// Mounting rotation of the sensor relative to the platform's forward axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
  Deg0,
  Deg90,
  Deg180,
  Deg270,
}

impl Orientation {
  /// Orientation bits for a given mounting rotation.
  ///
  /// The unrotated breakout already needs all three transforms to report
  /// +X forward / +Y left; the other rotations fold into that mapping.
  pub fn rotated(rotation: Rotation) -> Self {
    match rotation {
      Rotation::Deg0 => Orientation { invert_x: true, invert_y: true, swap_xy: true },
      Rotation::Deg90 => Orientation { invert_x: false, invert_y: true, swap_xy: false },
      Rotation::Deg180 => Orientation { invert_x: false, invert_y: false, swap_xy: true },
      Rotation::Deg270 => Orientation { invert_x: true, invert_y: false, swap_xy: false },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn motion_status_decodes_flag_bits() {
    let st: MotionStatus = TryFrom::try_from([0x80u8]).ok().unwrap();
    assert!(st.motion);
    assert!(!st.raw_overflow);

    let st: MotionStatus = TryFrom::try_from([0x90u8]).ok().unwrap();
    assert!(st.motion);
    assert!(st.raw_overflow);
  }

  #[test]
  fn orientation_packs_into_high_bits() {
    let bits: [u8; 1] = Orientation::rotated(Rotation::Deg0).try_into().ok().unwrap();
    assert_eq!(bits[0], 0xE0);

    let bits: [u8; 1] = Orientation::rotated(Rotation::Deg90).try_into().ok().unwrap();
    assert_eq!(bits[0], 0x40);

    let bits: [u8; 1] = Orientation { invert_x: false, invert_y: false, swap_xy: false }.try_into().ok().unwrap();
    assert_eq!(bits[0], 0x00);
  }

  #[test]
  fn default_orientation_matches_unrotated_mounting() {
    assert_eq!(Orientation::default(), Orientation::rotated(Rotation::Deg0));
  }
}
