/// Consecutive bring-up failures tolerated before the driver gives up for good.
pub const FAULT_CAP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperationalState {
    #[default]
    NotInitialized,
    Idle,
    /// Only held while an operation is talking to the transport.
    Busy,
    /// Permanent: the fault cap was reached.
    Error,
    CommError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaultCounter {
    count: u8,
}

impl FaultCounter {
    /// Counts one more failure, saturating at the cap. Returns true once the cap is hit.
    pub fn record(&mut self) -> bool {
        self.count = self.count.saturating_add(1).min(FAULT_CAP);
        self.is_exhausted()
    }

    pub fn is_exhausted(&self) -> bool {
        self.count >= FAULT_CAP
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
