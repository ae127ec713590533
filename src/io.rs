use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};

use crate::{defs::*, Error, Paa5100je};

impl<S, D, W, E> Paa5100je<S, D, W>
where
  S: SpiDevice<u8, Error = E>,
  D: DelayNs,
{
  /// Read a single register (raw).
  ///
  /// Escape hatch for registers without a typed accessor. The direction
  /// bit is managed by the driver; pass the plain 7-bit address.
  pub async fn read_register(&mut self, address: u8) -> Result<u8, Error<E>> {
    self.read_raw(address & ADDR_MASK).await
  }

  /// Write a single register (raw).
  ///
  /// Stray writes can detune the navigation core; a power-up reset and
  /// re-initialization recover it.
  pub async fn write_register(&mut self, address: u8, value: u8) -> Result<(), Error<E>> {
    self.write_raw(address & ADDR_MASK, value).await
  }

  /// Switch the illumination LED on or off.
  ///
  /// The sensor needs the LED (or equivalent ambient light) to track;
  /// turning it off is only useful around shutdown.
  pub async fn set_led(&mut self, enabled: bool) -> Result<(), Error<E>> {
    self.write_raw(PAGE_SELECT, LED_PAGE).await?;
    self.write_raw(LED_CTRL, if enabled { LED_ON } else { LED_OFF }).await?;
    self.write_raw(PAGE_SELECT, 0x00).await
  }
}
