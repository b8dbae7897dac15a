#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A read was attempted before a successful `init`.
    NotInitialized,
    /// The driver is busy or parked in a fault state.
    Operational,
    /// The transport rejected a transfer.
    Communication(E),
    /// Full scale selector out of range, or an incomplete transport.
    WrongConfiguration,
}

impl<E> Error<E> {
    pub fn status(&self) -> Status {
        match self {
            Error::NotInitialized => Status::NotInitialized,
            Error::Operational => Status::OperationalError,
            Error::Communication(_) => Status::CommunicationError,
            Error::WrongConfiguration => Status::WrongConfiguration,
        }
    }
}

/// Flat status code for callers that log or forward results as integers.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Ok = 0,
    NotInitialized = 1,
    OperationalError = 2,
    CommunicationError = 3,
    WrongConfiguration = 4,
}

impl Status {
    pub fn from_result<T, E>(result: &Result<T, Error<E>>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status as u8
    }
}
