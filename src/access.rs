use crate::registers::{Registers, DATA_BLOCK_WORDS};
use crate::transport::Transport;

/// `(high << 8) | low`
pub fn combine_bytes(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | (low as u16)
}

/// A transport bound to one device address.
pub(crate) struct Bus<T> {
    transport: T,
    addr: u8,
}

impl<T> Bus<T>
where
    T: Transport,
{
    pub(crate) fn new(transport: T, addr: u8) -> Self {
        Self { transport, addr }
    }

    pub(crate) fn into_transport(self) -> T {
        self.transport
    }

    pub(crate) fn write_u8(&mut self, reg: Registers, val: u8) -> Result<(), T::Error> {
        let buf = [reg.to_u8(), val];
        self.transport.transmit(self.addr, &buf)
    }

    pub(crate) fn read_u8(&mut self, reg: Registers) -> Result<u8, T::Error> {
        let mut buf = [0_u8; 1];
        self.transport.transmit(self.addr, &[reg.to_u8()])?;
        self.transport.receive(self.addr, &mut buf)?;

        Ok(buf[0])
    }

    /// Reads `N` big-endian words starting at `start`. `N` is at most the size
    /// of the accel + temp + gyro block.
    pub(crate) fn read_words<const N: usize>(
        &mut self,
        start: Registers,
    ) -> Result<[u16; N], T::Error> {
        const { assert!(N >= 1 && N <= DATA_BLOCK_WORDS) };

        let mut buf = [0_u8; DATA_BLOCK_WORDS * 2];
        let buf = &mut buf[..N * 2];

        self.transport.transmit(self.addr, &[start.to_u8()])?;
        self.transport.receive(self.addr, buf)?;

        let mut words = [0_u16; N];
        for (word, pair) in words.iter_mut().zip(buf.chunks_exact(2)) {
            *word = combine_bytes(pair[0], pair[1]);
        }

        Ok(words)
    }
}
