use embedded_hal::delay::DelayNs;
use fugit::MillisDurationU32;
use log::{debug, error, warn};

use crate::access::Bus;
use crate::error::Error;
use crate::registers::{
    Registers, ALT_ADDR, DATA_BLOCK_WORDS, DEFAULT_ADDR, PWR_DEVICE_RESET, PWR_WAKE,
};
use crate::scale::{self, FullScale};
use crate::state::{FaultCounter, OperationalState};
use crate::transport::Transport;
use crate::vector::{Measurements, Vector3};

/// Datasheet: registers are usable again 100 ms after DEVICE_RESET.
pub const RESET_SETTLE: MillisDurationU32 = MillisDurationU32::millis(100);

/// Driver context for one device.
///
/// All operations take `&mut self`, so a single owner drives the device at a
/// time. `Busy` is only held while a transfer is in flight; it stays visible
/// afterwards only if the transport unwound out of a call.
pub struct Mpu<T> {
    addr: u8,
    bus: Option<Bus<T>>,
    accel_fs: FullScale,
    gyro_fs: FullScale,
    state: OperationalState,
    faults: FaultCounter,
}

impl<T, E> Default for Mpu<T>
where
    T: Transport<Error = E>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Mpu<T>
where
    T: Transport<Error = E>,
{
    pub fn new() -> Self {
        Self::with_alt_address(false)
    }

    /// `alt_addr` selects 0x69, for boards with AD0 pulled high.
    pub fn with_alt_address(alt_addr: bool) -> Self {
        let addr = if alt_addr { ALT_ADDR } else { DEFAULT_ADDR };

        Self {
            addr,
            bus: None,
            accel_fs: FullScale::default(),
            gyro_fs: FullScale::default(),
            state: OperationalState::NotInitialized,
            faults: FaultCounter::default(),
        }
    }

    /// Stores the configuration and brings the device up.
    ///
    /// The configuration is replaced as soon as the arguments validate, even if
    /// the current state then refuses the call. From `CommError` the bring-up is
    /// retried; each failed retry counts toward the fault cap, and reaching it
    /// parks the driver in `Error` for good.
    pub fn init<A, G>(&mut self, accel_fs: A, gyro_fs: G, transport: T) -> Result<(), Error<E>>
    where
        A: TryInto<FullScale>,
        G: TryInto<FullScale>,
    {
        if !transport.is_complete() {
            return Err(Error::WrongConfiguration);
        }
        let (Ok(accel_fs), Ok(gyro_fs)) = (accel_fs.try_into(), gyro_fs.try_into()) else {
            return Err(Error::WrongConfiguration);
        };

        self.accel_fs = accel_fs;
        self.gyro_fs = gyro_fs;
        let bus = self.bus.insert(Bus::new(transport, self.addr));

        match self.state {
            OperationalState::Idle => Ok(()),
            OperationalState::NotInitialized => {
                self.state = OperationalState::Busy;

                match bring_up(bus, accel_fs, gyro_fs) {
                    Ok(()) => {
                        self.faults.reset();
                        self.state = OperationalState::Idle;
                        debug!("mpu: ready, accel {:?} gyro {:?}", accel_fs, gyro_fs);
                        Ok(())
                    }
                    Err(e) => {
                        warn!("mpu: bring-up failed");
                        self.state = OperationalState::CommError;
                        Err(Error::Communication(e))
                    }
                }
            }
            OperationalState::Busy => Err(Error::Operational),
            OperationalState::Error => Err(Error::Operational),
            OperationalState::CommError => match bring_up(bus, accel_fs, gyro_fs) {
                Ok(()) => {
                    self.state = OperationalState::Idle;
                    debug!("mpu: recovered after {} faults", self.faults.count());
                    Ok(())
                }
                Err(e) => {
                    if self.faults.record() {
                        error!("mpu: fault cap reached, giving up");
                        self.state = OperationalState::Error;
                        Err(Error::Operational)
                    } else {
                        warn!("mpu: bring-up retry failed ({})", self.faults.count());
                        Err(Error::Communication(e))
                    }
                }
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state == OperationalState::Idle
    }

    pub fn state(&self) -> OperationalState {
        self.state
    }

    pub fn fault_count(&self) -> u8 {
        self.faults.count()
    }

    pub fn accel_full_scale(&self) -> FullScale {
        self.accel_fs
    }

    pub fn gyro_full_scale(&self) -> FullScale {
        self.gyro_fs
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Hands the transport back, if one was ever stored.
    pub fn release(self) -> Option<T> {
        self.bus.map(Bus::into_transport)
    }

    /// Runs `op` on the bus if the driver is idle, moving through `Busy`.
    fn gated<R, F>(&mut self, op: F) -> Result<R, Error<E>>
    where
        F: FnOnce(&mut Bus<T>) -> Result<R, E>,
    {
        match self.state {
            OperationalState::NotInitialized => Err(Error::NotInitialized),
            OperationalState::Idle => {
                let bus = self.bus.as_mut().ok_or(Error::NotInitialized)?;
                self.state = OperationalState::Busy;

                match op(bus) {
                    Ok(r) => {
                        self.state = OperationalState::Idle;
                        Ok(r)
                    }
                    Err(e) => {
                        warn!("mpu: transfer failed");
                        self.state = OperationalState::CommError;
                        Err(Error::Communication(e))
                    }
                }
            }
            OperationalState::Busy | OperationalState::Error | OperationalState::CommError => {
                Err(Error::Operational)
            }
        }
    }

    pub fn read_accel_raw(&mut self) -> Result<[u16; 3], Error<E>> {
        self.gated(|bus| bus.read_words(Registers::AccelXHi))
    }

    pub fn read_gyro_raw(&mut self) -> Result<[u16; 3], Error<E>> {
        self.gated(|bus| bus.read_words(Registers::GyroXHi))
    }

    pub fn read_temp_raw(&mut self) -> Result<u16, Error<E>> {
        self.gated(|bus| bus.read_words::<1>(Registers::TempHi)).map(|[t]| t)
    }

    /// Accel x/y/z, temperature, gyro x/y/z in one transfer.
    pub fn read_all_raw(&mut self) -> Result<[u16; DATA_BLOCK_WORDS], Error<E>> {
        self.gated(|bus| bus.read_words(Registers::AccelXHi))
    }

    /// Acceleration in g.
    pub fn read_accel(&mut self) -> Result<Vector3, Error<E>> {
        let raw = self.read_accel_raw()?;
        Ok(scale::scale_accel(raw, self.accel_fs))
    }

    pub fn read_gyro(&mut self) -> Result<Vector3, Error<E>> {
        let raw = self.read_gyro_raw()?;
        Ok(scale::scale_gyro(raw, self.gyro_fs))
    }

    /// Die temperature in °C.
    pub fn read_temp(&mut self) -> Result<f32, Error<E>> {
        let raw = self.read_temp_raw()?;
        Ok(scale::scale_temperature(raw))
    }

    pub fn read_all(&mut self) -> Result<Measurements, Error<E>> {
        let raw = self.read_all_raw()?;

        Ok(Measurements {
            accel: scale::scale_accel([raw[0], raw[1], raw[2]], self.accel_fs),
            temperature: scale::scale_temperature(raw[3]),
            gyro: scale::scale_gyro([raw[4], raw[5], raw[6]], self.gyro_fs),
        })
    }

    pub fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        self.gated(|bus| bus.read_u8(Registers::WhoAmI))
    }

    /// Resets every device register to its default. The driver drops back to
    /// `NotInitialized`; call `init` again once the device has settled.
    pub fn device_reset(&mut self) -> Result<(), Error<E>> {
        self.gated(|bus| bus.write_u8(Registers::PowerMgmt1, PWR_DEVICE_RESET))?;
        debug!("mpu: device reset");
        self.state = OperationalState::NotInitialized;
        Ok(())
    }

    /// `device_reset`, then blocks for [`RESET_SETTLE`].
    pub fn device_reset_and_wait<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<E>> {
        self.device_reset()?;
        delay.delay_ms(RESET_SETTLE.to_millis());
        Ok(())
    }
}

/// Wake the device, then program the ranges that differ from the power-on default.
fn bring_up<T: Transport>(
    bus: &mut Bus<T>,
    accel_fs: FullScale,
    gyro_fs: FullScale,
) -> Result<(), T::Error> {
    debug!("mpu: wake");
    bus.write_u8(Registers::PowerMgmt1, PWR_WAKE)?;

    if gyro_fs != FullScale::Sel0 {
        debug!("mpu: gyro range {:?}", gyro_fs);
        bus.write_u8(Registers::GyroConfig, gyro_fs.register_value())?;
    }
    if accel_fs != FullScale::Sel0 {
        debug!("mpu: accel range {:?}", accel_fs);
        bus.write_u8(Registers::AccelConfig, accel_fs.register_value())?;
    }

    Ok(())
}
