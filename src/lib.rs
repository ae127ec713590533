#![no_std]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Type-safe**: Decoded motion frames instead of raw byte juggling
//! - **Async-first**: Built on `embedded-hal-async` SPI traits
//! - **Self-contained**: Ships the full vendor bring-up and tuning sequence
//! - **Documented**: Register quirks (dummy bytes, paging, quality gate) are
//!   spelled out where they bite
//!
//! ## Module Organization
//!
//! - [`motion`]: Motion sampling, batch reads and scaled flow output
//! - [`burst`]: Motion-burst frame layout and the surface-quality gate
//! - [`tuning`]: Vendor performance-optimization routine and orientation
//! - [`selftest`]: Navigation-core bring-up check
//! - [`io`]: Raw register access and LED control
//!
//! ## Basic Usage
//!
//! ```no_run
//! # async fn example(
//! #   mut flow: paa5100je::Paa5100je<impl embedded_hal_async::spi::SpiDevice, impl embedded_hal_async::delay::DelayNs>,
//! # ) {
//! // Reset, verify the chip and run the vendor tuning sequence
//! flow.initialize().await.unwrap();
//!
//! // Displacement since the previous read, in counts
//! let delta = flow.get_motion().await.unwrap();
//! let _ = (delta.x, delta.y);
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, spi::SpiDevice};

pub mod burst;
mod defs;
#[cfg(feature = "events")]
mod events;
pub mod io;
pub mod motion;
pub(crate) mod rw;
pub mod selftest;
pub mod tuning;
mod types;

use defs::*;
pub use types::*;

/// Driver error type.
///
/// Wraps the underlying SPI error and adds sensor-specific error
/// conditions.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// SPI communication error
  Spi(E),
  /// Product ID / inverse product ID mismatch (expected 0x49 / 0xB6)
  InvalidChipId(u8),
  /// Navigation core failed to come up after reset
  Init,
  /// Register data conversion error
  Data,
  /// Surface quality too low to trust the reported deltas
  NoSignal,
}

/// PAA5100JE device driver instance.
///
/// Main entry point for interacting with the sensor. Owns the SPI device
/// (chip-select framing included) and the delay provider used for the
/// datasheet transaction gaps.
///
/// # Type Parameters
///
/// - `S`: SPI device implementation (must implement
///   `embedded_hal_async::spi::SpiDevice`)
/// - `D`: Delay provider (must implement `embedded_hal_async::delay::DelayNs`)
/// - `W`: MOTION pin wait implementation (only used with `events` feature)
///
/// # Examples
///
/// ```no_run
/// # async fn example(
/// #   mut flow: paa5100je::Paa5100je<impl embedded_hal_async::spi::SpiDevice, impl embedded_hal_async::delay::DelayNs>,
/// # ) {
/// flow.initialize().await.unwrap();
/// # }
/// ```
pub struct Paa5100je<S, D: DelayNs, W = ()> {
  spi: S,
  delay: D,
  #[cfg(feature = "events")]
  dequeue: heapless::Deque<MotionSample, 16>,
  #[cfg(feature = "events")]
  motion_pin: W,
  #[cfg(not(feature = "events"))]
  _wait: core::marker::PhantomData<W>,
}

// Constructor(s)
#[cfg(feature = "events")]
impl<S, D, W> Paa5100je<S, D, W>
where
  S: SpiDevice<u8>,
  D: DelayNs,
  W: embedded_hal_async::digital::Wait,
{
  /// Create a new PAA5100JE driver instance with motion event support.
  ///
  /// # Arguments
  ///
  /// - `spi`: SPI device implementation (owns chip select)
  /// - `delay`: Delay provider for timing operations
  /// - `motion_pin`: MOTION line input, driven low by the sensor while
  ///   unread motion data is pending (requires `events` feature)
  pub fn new(spi: S, delay: D, motion_pin: W) -> Self {
    Self { spi, delay, dequeue: heapless::Deque::new(), motion_pin }
  }
}

#[cfg(not(feature = "events"))]
impl<S, D, W> Paa5100je<S, D, W>
where
  S: SpiDevice<u8>,
  D: DelayNs,
{
  /// Create a new PAA5100JE driver instance.
  ///
  /// # Arguments
  ///
  /// - `spi`: SPI device implementation (owns chip select)
  /// - `delay`: Delay provider for timing operations
  pub fn new(spi: S, delay: D) -> Self {
    Self { spi, delay, _wait: core::marker::PhantomData }
  }
}

// Common functionality (independent of `events`)
impl<S, D, W, E> Paa5100je<S, D, W>
where
  S: SpiDevice<u8, Error = E>,
  D: DelayNs,
{
  /// Bring the sensor into tracking operation.
  ///
  /// Sequence:
  /// - Power-up reset and settle.
  /// - Verify `PRODUCT_ID` (0x49) and `INVERSE_PRODUCT_ID` (0xB6); a
  ///   mismatch yields [`Error::InvalidChipId`] with the id that was read.
  /// - Drain the motion registers once to clear deltas latched across the
  ///   reset.
  /// - Run the vendor performance-optimization routine.
  ///
  /// The first frame after initialization may still report zero surface
  /// quality while the navigation core locks onto the surface.
  pub async fn initialize(&mut self) -> Result<(), Error<E>> {
    self.power_up_reset().await?;

    let id = self.product_id().await?;
    let inverse = self.read_u8(Reg::InverseProductId).await?;
    if id != PRODUCT_ID || inverse != INVERSE_PRODUCT_ID {
      return Err(Error::InvalidChipId(id));
    }

    self.drain_motion().await?;
    self.performance_optimization_routine().await?;
    Ok(())
  }

  /// Read the product ID register (should be `0x49`).
  ///
  /// Use this to verify communication with the sensor.
  pub async fn product_id(&mut self) -> Result<u8, Error<E>> {
    self.read_u8(Reg::ProductId).await
  }

  /// Read the revision ID register.
  pub async fn revision_id(&mut self) -> Result<u8, Error<E>> {
    self.read_u8(Reg::RevisionId).await
  }

  /// Perform a power-up reset of the sensor.
  ///
  /// Resets all registers to their default values and restarts the
  /// navigation core. The required settle delay is applied automatically.
  pub async fn power_up_reset(&mut self) -> Result<(), Error<E>> {
    self.write_u8(Reg::PowerUpReset, POWER_UP_RESET_CMD).await?;
    self.delay.delay_ms(POWER_UP_SETTLE_MS).await;
    Ok(())
  }

  /// Put the sensor into shutdown. A power-up reset is required before it
  /// will track again.
  pub async fn shutdown(&mut self) -> Result<(), Error<E>> {
    self.write_u8(Reg::Shutdown, SHUTDOWN_CMD).await
  }

  /// One throwaway pass over the motion registers. Reading `MOTION` latches
  /// the delta registers; reading the deltas clears them.
  pub(crate) async fn drain_motion(&mut self) -> Result<(), Error<E>> {
    for reg in [Reg::Motion, Reg::DeltaXL, Reg::DeltaXH, Reg::DeltaYL, Reg::DeltaYH] {
      self.read_u8(reg).await?;
    }
    Ok(())
  }
}
