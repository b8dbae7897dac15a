use embedded_hal::i2c::{I2c, SevenBitAddress};

use super::Transport;

/// Runs the transport over any embedded-hal 1.0 I2C bus.
pub struct I2cTransport<I> {
    i2c: I,
}

impl<I> I2cTransport<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    pub fn into_inner(self) -> I {
        self.i2c
    }
}

impl<I, E> Transport for I2cTransport<I>
where
    I: I2c<SevenBitAddress, Error = E>,
{
    type Error = E;

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), E> {
        self.i2c.write(address, bytes)
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), E> {
        self.i2c.read(address, buffer)
    }
}
