#![allow(dead_code)]

#[repr(u8)]
pub(crate) enum Reg {
  ProductId = 0x00,
  RevisionId = 0x01,
  Motion = 0x02,
  DeltaXL = 0x03,
  DeltaXH = 0x04,
  DeltaYL = 0x05,
  DeltaYH = 0x06,
  Squal = 0x07,
  RawDataSum = 0x08,
  MaximumRawData = 0x09,
  MinimumRawData = 0x0A,
  ShutterLower = 0x0B,
  ShutterUpper = 0x0C,
  Observation = 0x15,
  MotionBurst = 0x16,
  PowerUpReset = 0x3A,
  Shutdown = 0x3B,
  RawDataGrab = 0x58,
  RawDataGrabStatus = 0x59,
  Orientation = 0x5B,
  InverseProductId = 0x5F,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

// Constants used across the crate
pub(crate) const PRODUCT_ID: u8 = 0x49;
pub(crate) const INVERSE_PRODUCT_ID: u8 = 0xB6;
pub(crate) const POWER_UP_RESET_CMD: u8 = 0x5A;
pub(crate) const SHUTDOWN_CMD: u8 = 0xB6;

// MSB of the address byte selects the transfer direction on the wire.
pub(crate) const DIR_WRITE: u8 = 0x80;
pub(crate) const ADDR_MASK: u8 = 0x7F;

// Tuning registers live behind a page-select register; the page values are
// only meaningful inside the vendor sequences.
pub(crate) const PAGE_SELECT: u8 = 0x7F;
pub(crate) const LED_PAGE: u8 = 0x14;
pub(crate) const LED_CTRL: u8 = 0x6F;
pub(crate) const LED_ON: u8 = 0x1C;
pub(crate) const LED_OFF: u8 = 0x00;

// OBSERVATION reads its low five bits set once the navigation core is up.
pub(crate) const OBSERVATION_READY_MASK: u8 = 0x1F;

// Frames with squal below this while the shutter is saturated carry no
// usable surface information.
pub(crate) const SQUAL_THRESHOLD: u8 = 0x19;
pub(crate) const SHUTTER_SATURATED: u8 = 0x1F;

// 42° field of view across a 35 pixel array: flow angle per delta count.
pub(crate) const RAD_PER_COUNT: f32 = 0.733_038 / 35.0;

// Transaction timing (datasheet)
pub(crate) const POWER_UP_SETTLE_MS: u32 = 5;
pub(crate) const TUNING_SETTLE_MS: u32 = 10;
pub(crate) const T_SRAD_NS: u32 = 35_000; // address phase to first data bit
pub(crate) const T_SRR_US: u32 = 20; // read to next transaction
pub(crate) const T_SWW_US: u32 = 45; // write to next transaction
