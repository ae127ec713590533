use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};

use crate::{defs::*, Error, Paa5100je};

impl<S, D, W, E> Paa5100je<S, D, W>
where
  S: SpiDevice<u8, Error = E>,
  D: DelayNs,
{
  /// Check that the navigation core came up after reset.
  ///
  /// Clears `OBSERVATION`, waits briefly, and reads it back: a healthy
  /// core sets the low five bits again on its own. Returns
  /// [`Error::Init`] otherwise.
  pub async fn check_observation(&mut self) -> Result<(), Error<E>> {
    self.write_u8(Reg::Observation, 0x00).await?;
    self.delay.delay_ms(1).await;

    let v = self.read_u8(Reg::Observation).await?;
    if v & OBSERVATION_READY_MASK == OBSERVATION_READY_MASK {
      Ok(())
    } else {
      Err(Error::Init)
    }
  }
}
