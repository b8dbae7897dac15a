pub mod callback;
pub mod i2c;

#[cfg(test)]
pub(crate) mod mock;

pub use callback::{CallbackError, CallbackTransport};
pub use i2c::I2cTransport;

/// What the driver needs from the bus.
///
/// Every register access is address-prefixed: the driver first transmits the
/// register address (alone for reads, followed by the value for writes), then
/// issues a separate `receive` for the data. Timeouts and byte-level retries are
/// up to the implementation; the driver never retries a failed transfer.
pub trait Transport {
    type Error;

    /// Writes `bytes` to the device at `address`.
    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Fills `buffer` from the device at `address`.
    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// False when the implementation is missing one of its two directions.
    fn is_complete(&self) -> bool {
        true
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        T::transmit(self, address, bytes)
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        T::receive(self, address, buffer)
    }

    fn is_complete(&self) -> bool {
        T::is_complete(self)
    }
}
