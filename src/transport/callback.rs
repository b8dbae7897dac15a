use super::Transport;

pub type TxFn<E> = fn(address: u8, bytes: &[u8]) -> Result<(), E>;
pub type RxFn<E> = fn(address: u8, buffer: &mut [u8]) -> Result<(), E>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CallbackError<E> {
    /// The direction was never supplied.
    Unset,
    Inner(E),
}

/// Transport built from a pair of plain functions, either of which may be absent.
///
/// `Mpu::init` refuses an incomplete pair with `Error::WrongConfiguration`.
pub struct CallbackTransport<E> {
    tx: Option<TxFn<E>>,
    rx: Option<RxFn<E>>,
}

impl<E> CallbackTransport<E> {
    pub fn new(tx: Option<TxFn<E>>, rx: Option<RxFn<E>>) -> Self {
        Self { tx, rx }
    }

    pub fn from_fns(tx: TxFn<E>, rx: RxFn<E>) -> Self {
        Self::new(Some(tx), Some(rx))
    }
}

impl<E> Transport for CallbackTransport<E> {
    type Error = CallbackError<E>;

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        let tx = self.tx.ok_or(CallbackError::Unset)?;
        tx(address, bytes).map_err(CallbackError::Inner)
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let rx = self.rx.ok_or(CallbackError::Unset)?;
        rx(address, buffer).map_err(CallbackError::Inner)
    }

    fn is_complete(&self) -> bool {
        self.tx.is_some() && self.rx.is_some()
    }
}
