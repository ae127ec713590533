use embedded_hal_async::{delay::DelayNs, digital, spi::SpiDevice};

use super::{Error, MotionSample, Paa5100je};

impl<S, D, W, E> Paa5100je<S, D, W>
where
  S: SpiDevice<u8, Error = E>,
  D: DelayNs,
  W: digital::Wait,
{
  /// Wait for the next motion sample.
  ///
  /// Pops a buffered sample if one is queued; otherwise waits for the
  /// MOTION line (driven low while unread motion data is pending), drains
  /// the pending frames into the queue and returns the oldest.
  pub async fn wait_motion(&mut self) -> Result<MotionSample, Error<E>> {
    loop {
      if let Some(sample) = self.dequeue.pop_front() {
        return Ok(sample);
      }

      self.motion_pin.wait_for_low().await.map_err(|_| Error::Data)?;
      self.drain_pending().await?;
      if let Some(sample) = self.dequeue.pop_front() {
        return Ok(sample);
      }
    }
  }

  /// Burst-read frames while the sensor reports pending motion and queue
  /// them. Stops once a frame comes back without the motion flag or the
  /// queue is full.
  async fn drain_pending(&mut self) -> Result<(), Error<E>> {
    loop {
      let frame = self.read_frame().await?;
      if !frame.motion {
        break;
      }
      self.push_sample(frame.into());
      if self.dequeue.is_full() {
        break;
      }
    }
    Ok(())
  }

  #[inline]
  fn push_sample(&mut self, sample: MotionSample) {
    if self.dequeue.is_full() {
      let _ = self.dequeue.pop_front();
    }
    let _ = self.dequeue.push_back(sample);
  }
}
