//! Recording transport for unit tests.

use std::{cell::RefCell, rc::Rc, vec::Vec};

use super::Transport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    Transmit { address: u8, bytes: Vec<u8> },
    Receive { address: u8, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug, Default)]
struct MockState {
    transfers: Vec<Transfer>,
    read_data: Vec<u8>,
    fail_transmit: bool,
    fail_register: Option<u8>,
    fail_receive: bool,
    panic_on_receive: bool,
}

/// Cloned handles share one transfer log, so a test can keep a handle after
/// giving the other one to the driver.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_read_data(data: &[u8]) -> Self {
        let mock = Self::new();
        mock.set_read_data(data);
        mock
    }

    pub fn set_read_data(&self, data: &[u8]) {
        self.state.borrow_mut().read_data = data.to_vec();
    }

    pub fn fail_transmit(&self, fail: bool) {
        self.state.borrow_mut().fail_transmit = fail;
    }

    /// Fails only transmits whose first byte is `reg`.
    pub fn fail_register(&self, reg: Option<u8>) {
        self.state.borrow_mut().fail_register = reg;
    }

    pub fn fail_receive(&self, fail: bool) {
        self.state.borrow_mut().fail_receive = fail;
    }

    pub fn panic_on_receive(&self, panic: bool) {
        self.state.borrow_mut().panic_on_receive = panic;
    }

    pub fn transfers(&self) -> Vec<Transfer> {
        self.state.borrow().transfers.clone()
    }

    pub fn clear(&self) {
        self.state.borrow_mut().transfers.clear();
    }

    /// Register writes seen so far, as `(register, value)` pairs.
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.transfers()
            .into_iter()
            .filter_map(|t| match t {
                Transfer::Transmit { bytes, .. } if bytes.len() == 2 => Some((bytes[0], bytes[1])),
                _ => None,
            })
            .collect()
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        state.transfers.push(Transfer::Transmit {
            address,
            bytes: bytes.to_vec(),
        });

        let reg_fails = matches!(state.fail_register, Some(r) if bytes.first() == Some(&r));
        if state.fail_transmit || reg_fails {
            Err(MockError)
        } else {
            Ok(())
        }
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        state.transfers.push(Transfer::Receive {
            address,
            len: buffer.len(),
        });

        if state.panic_on_receive {
            drop(state);
            panic!("bus fault");
        }
        if state.fail_receive {
            return Err(MockError);
        }

        buffer.fill(0);
        let n = core::cmp::min(buffer.len(), state.read_data.len());
        buffer[..n].copy_from_slice(&state.read_data[..n]);
        Ok(())
    }
}
