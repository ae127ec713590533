//! Vendor performance-optimization routine and axis orientation.
//!
//! The navigation core is tuned through registers that live behind a page
//! select and are not otherwise documented; the values come from the
//! vendor's recommended bring-up sequence. The routine is run once by
//! [`initialize`](crate::Paa5100je::initialize) and only needs to be
//! repeated after a power-up reset.

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};

use super::{defs::*, Error, Orientation, Paa5100je};

// Opens the tuning window and selects the page holding the laser-drive
// configuration probed by the conditional step.
const NAV_PRELUDE: [(u8, u8); 5] =
  [(PAGE_SELECT, 0x00), (0x55, 0x01), (0x50, 0x07), (PAGE_SELECT, 0x0E), (0x43, 0x10)];

// Closes the probe window and returns to the calibration page.
const NAV_EPILOGUE: [(u8, u8); 5] =
  [(PAGE_SELECT, 0x00), (0x51, 0x7B), (0x50, 0x00), (0x55, 0x00), (PAGE_SELECT, 0x0E)];

// Routes the adjusted LD targets back into the calibration page.
const LD_APPLY: [(u8, u8); 4] = [(PAGE_SELECT, 0x00), (0x61, 0xAD), (0x51, 0x70), (PAGE_SELECT, 0x0E)];

// Main tuning table. Page-bracketed; ends by arming the navigation core
// (page 0x07, register 0x40).
const TUNING_STAGE1: [(u8, u8); 67] = [
  (PAGE_SELECT, 0x00),
  (0x61, 0xAD),
  (PAGE_SELECT, 0x03),
  (0x40, 0x00),
  (PAGE_SELECT, 0x05),
  (0x41, 0xB3),
  (0x43, 0xF1),
  (0x45, 0x14),
  (0x5F, 0x34),
  (0x7B, 0x08),
  (0x5E, 0x34),
  (0x5B, 0x11),
  (0x6D, 0x11),
  (0x45, 0x17),
  (0x70, 0xE5),
  (0x71, 0xE5),
  (PAGE_SELECT, 0x06),
  (0x44, 0x1B),
  (0x40, 0xBF),
  (0x4E, 0x3F),
  (PAGE_SELECT, 0x08),
  (0x66, 0x44),
  (0x65, 0x20),
  (0x6A, 0x3A),
  (0x61, 0x05),
  (0x62, 0x05),
  (PAGE_SELECT, 0x09),
  (0x4F, 0xAF),
  (0x5F, 0x40),
  (0x48, 0x80),
  (0x49, 0x80),
  (0x57, 0x77),
  (0x60, 0x78),
  (0x61, 0x78),
  (0x62, 0x08),
  (0x63, 0x50),
  (PAGE_SELECT, 0x0A),
  (0x45, 0x60),
  (PAGE_SELECT, 0x00),
  (0x4D, 0x11),
  (0x55, 0x80),
  (0x74, 0x21),
  (0x75, 0x1F),
  (0x4A, 0x78),
  (0x4B, 0x78),
  (0x44, 0x08),
  (0x45, 0x50),
  (0x64, 0xFF),
  (0x65, 0x1F),
  (PAGE_SELECT, 0x14),
  (0x65, 0x67),
  (0x66, 0x08),
  (0x63, 0x70),
  (0x6F, 0x1C),
  (PAGE_SELECT, 0x15),
  (0x48, 0x48),
  (PAGE_SELECT, 0x07),
  (0x41, 0x0D),
  (0x43, 0x14),
  (0x4B, 0x0E),
  (0x45, 0x0F),
  (0x44, 0x42),
  (0x4C, 0x80),
  (PAGE_SELECT, 0x10),
  (0x5B, 0x02),
  (PAGE_SELECT, 0x07),
  (0x40, 0x41),
];

// Drops the core into its operating mode after the first settle.
const TUNING_STAGE2: [(u8, u8); 16] = [
  (PAGE_SELECT, 0x00),
  (0x32, 0x00),
  (PAGE_SELECT, 0x07),
  (0x40, 0x40),
  (PAGE_SELECT, 0x06),
  (0x68, 0x70),
  (0x69, 0x01),
  (PAGE_SELECT, 0x0D),
  (0x48, 0xC0),
  (0x6F, 0xD5),
  (PAGE_SELECT, 0x00),
  (0x5B, 0xA0),
  (0x4E, 0xA8),
  (0x5A, 0x90),
  (0x40, 0x80),
  (0x73, 0x1F),
];

impl<S, D, W, E> Paa5100je<S, D, W>
where
  S: SpiDevice<u8, Error = E>,
  D: DelayNs,
{
  /// Run the vendor-recommended tuning sequence.
  ///
  /// Sequence:
  /// - Probe the laser-drive state (paged register 0x67) and pick the
  ///   matching drive configuration.
  /// - If the calibration slot (0x73) reads zero, read the factory LD
  ///   values and write back adjusted targets.
  /// - Apply the main tuning table, settle, switch to operating mode,
  ///   settle again and clear the calibration slot.
  ///
  /// Side-effecting only; results come through the motion reads.
  pub async fn performance_optimization_routine(&mut self) -> Result<(), Error<E>> {
    self.write_seq(&NAV_PRELUDE).await?;

    // Register 0x48 depends on bit 7 of the probe register.
    let probe = self.read_raw(0x67).await?;
    let drive = if probe & 0x80 != 0 { 0x04 } else { 0x02 };
    self.write_raw(0x48, drive).await?;

    self.write_seq(&NAV_EPILOGUE).await?;

    if self.read_raw(0x73).await? == 0x00 {
      let c1 = self.read_raw(0x70).await?;
      let c2 = self.read_raw(0x71).await?;
      let (c1, c2) = ld_target(c1, c2);
      self.write_seq(&LD_APPLY).await?;
      self.write_raw(0x70, c1).await?;
      self.write_raw(0x71, c2).await?;
    }

    self.write_seq(&TUNING_STAGE1).await?;
    self.delay.delay_ms(TUNING_SETTLE_MS).await;
    self.write_seq(&TUNING_STAGE2).await?;
    self.delay.delay_ms(TUNING_SETTLE_MS).await;
    self.write_raw(0x73, 0x00).await?;
    Ok(())
  }

  /// Map the sensor's optical axes onto the platform frame.
  pub async fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error<E>> {
    self.write(Reg::Orientation, orientation).await
  }
}

/// Adjusted LD calibration targets from the factory values.
fn ld_target(c1: u8, c2: u8) -> (u8, u8) {
  let c1 = if c1 <= 28 { c1 + 14 } else { c1 + 11 };
  (c1.min(0x3F), ((c2 as u16 * 45) / 100) as u8)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ld_target_splits_at_low_factory_values() {
    assert_eq!(ld_target(20, 100), (34, 45));
    assert_eq!(ld_target(28, 100), (42, 45));
    assert_eq!(ld_target(29, 100), (40, 45));
  }

  #[test]
  fn ld_target_caps_the_drive_current() {
    let (c1, _) = ld_target(0x60, 0);
    assert_eq!(c1, 0x3F);
  }

  #[test]
  fn tuning_tables_are_page_bracketed() {
    // Both stages must open with an explicit page select so the magic
    // writes never land on whatever page a previous step left active.
    assert_eq!(TUNING_STAGE1[0].0, PAGE_SELECT);
    assert_eq!(TUNING_STAGE2[0].0, PAGE_SELECT);
    assert_eq!(NAV_PRELUDE[0], (PAGE_SELECT, 0x00));
    assert_eq!(NAV_EPILOGUE[0], (PAGE_SELECT, 0x00));
  }

  #[test]
  fn tuning_never_touches_the_reset_registers() {
    for &(addr, _) in TUNING_STAGE1.iter().chain(&TUNING_STAGE2) {
      assert_ne!(addr, 0x3A);
      assert_ne!(addr, 0x3B);
    }
  }
}
