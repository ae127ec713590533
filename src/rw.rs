use embedded_hal_async::{
  delay::DelayNs,
  spi::{Operation, SpiDevice},
};

use crate::{defs::Reg, defs::*, Error, Paa5100je};

impl<S, D, W, E> Paa5100je<S, D, W>
where
  S: SpiDevice<u8, Error = E>,
  D: DelayNs,
{
  pub(crate) async fn read<const N: usize, T: TryFrom<[u8; N]>>(&mut self, reg: Reg) -> Result<T, Error<E>> {
    let mut b = [0u8; N];
    self.read_bytes(reg, &mut b).await?;
    Ok(TryFrom::try_from(b).map_err(|_| Error::Data)?)
  }

  pub(crate) async fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    self.read_raw(reg.into()).await
  }

  pub(crate) async fn read_raw(&mut self, addr: u8) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self.read_into(addr, &mut b).await?;
    Ok(b[0])
  }

  /// One address phase, then consecutive data bytes under the same
  /// chip-select window. The sensor needs `t_SRAD` between the address and
  /// the first data bit, and a `t_SRR` gap before the next transaction.
  pub(crate) async fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    self.read_into(reg.into(), buf).await
  }

  async fn read_into(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
    self
      .spi
      .transaction(&mut [
        Operation::Write(&[addr & ADDR_MASK]),
        Operation::DelayNs(T_SRAD_NS),
        Operation::Read(buf),
      ])
      .await
      .map_err(Error::Spi)?;
    self.delay.delay_us(T_SRR_US).await;
    Ok(())
  }

  pub(crate) async fn write_u8(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.write_raw(reg.into(), value).await
  }

  pub(crate) async fn write_raw(&mut self, addr: u8, value: u8) -> Result<(), Error<E>> {
    self.spi.write(&[addr | DIR_WRITE, value]).await.map_err(Error::Spi)?;
    self.delay.delay_us(T_SWW_US).await;
    Ok(())
  }

  pub(crate) async fn write<T: TryInto<[u8; 1]>>(&mut self, reg: Reg, v: T) -> Result<(), Error<E>> {
    let b = v.try_into().map_err(|_| Error::Data)?;
    self.write_raw(reg.into(), b[0]).await
  }

  /// Apply a `(register, value)` table in order.
  pub(crate) async fn write_seq(&mut self, seq: &[(u8, u8)]) -> Result<(), Error<E>> {
    for &(addr, value) in seq {
      self.write_raw(addr, value).await?;
    }
    Ok(())
  }
}
