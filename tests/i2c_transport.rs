use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

use mpu_rs::registers::WHO_AM_I_VALUE;
use mpu_rs::{Error, FullScale, I2cTransport, Mpu, OperationalState, FAULT_CAP};

const ADDR: u8 = 0x68;

fn wake() -> I2cTransaction {
    I2cTransaction::write(ADDR, vec![0x6B, 0x00])
}

#[test]
fn init_and_read_accel() {
    let expectations = [
        wake(),
        I2cTransaction::write(ADDR, vec![0x3B]),
        I2cTransaction::read(ADDR, vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut mpu = Mpu::new();
    mpu.init(FullScale::Sel0, FullScale::Sel0, I2cTransport::new(i2c.clone())).unwrap();
    assert_eq!(mpu.read_accel_raw(), Ok([0x0102, 0x0304, 0x0506]));

    i2c.done();
}

#[test]
fn alt_address_and_ranges() {
    let alt = 0x69;
    let expectations = [
        I2cTransaction::write(alt, vec![0x6B, 0x00]),
        I2cTransaction::write(alt, vec![0x1B, 0x08]),
        I2cTransaction::write(alt, vec![0x1C, 0x18]),
        I2cTransaction::write(alt, vec![0x41]),
        I2cTransaction::read(alt, vec![0x00, 0x00]),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut mpu = Mpu::with_alt_address(true);
    mpu.init(3u8, 1u8, I2cTransport::new(i2c.clone())).unwrap();
    let t = mpu.read_temp().unwrap();
    assert!((t - 36.53).abs() < 1e-4);

    i2c.done();
}

#[test]
fn bus_error_surfaces_as_communication() {
    let expectations = [
        wake(),
        I2cTransaction::write(ADDR, vec![0x43]),
        I2cTransaction::read(ADDR, vec![0; 6]).with_error(ErrorKind::Other),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut mpu = Mpu::new();
    mpu.init(0u8, 0u8, I2cTransport::new(i2c.clone())).unwrap();
    assert_eq!(
        mpu.read_gyro(),
        Err(Error::Communication(ErrorKind::Other))
    );
    assert_eq!(mpu.state(), OperationalState::CommError);
    // no bus traffic while faulted
    assert_eq!(mpu.read_gyro(), Err(Error::Operational));

    i2c.done();
}

#[test]
fn dead_bus_reaches_permanent_error() {
    // the first init plus FAULT_CAP retries hit the bus, nothing after that
    let expectations: Vec<_> = (0..=FAULT_CAP)
        .map(|_| wake().with_error(ErrorKind::Other))
        .collect();
    let mut i2c = I2cMock::new(&expectations);

    let mut mpu = Mpu::new();
    let init = |mpu: &mut Mpu<_>| {
        mpu.init(FullScale::Sel0, FullScale::Sel0, I2cTransport::new(i2c.clone()))
    };

    assert_eq!(init(&mut mpu), Err(Error::Communication(ErrorKind::Other)));
    for _ in 1..FAULT_CAP {
        assert_eq!(init(&mut mpu), Err(Error::Communication(ErrorKind::Other)));
    }
    assert_eq!(init(&mut mpu), Err(Error::Operational));
    assert_eq!(mpu.state(), OperationalState::Error);

    assert_eq!(init(&mut mpu), Err(Error::Operational));
    assert_eq!(mpu.state(), OperationalState::Error);
    assert!(!mpu.is_ready());

    i2c.done();
}

#[test]
fn reset_then_reinit() {
    let expectations = [
        wake(),
        I2cTransaction::write(ADDR, vec![0x6B, 0x80]),
        wake(),
        I2cTransaction::write(ADDR, vec![0x75]),
        I2cTransaction::read(ADDR, vec![0x68]),
    ];
    let i2c = I2cMock::new(&expectations);

    let mut mpu = Mpu::new();
    mpu.init(0u8, 0u8, I2cTransport::new(i2c.clone())).unwrap();
    mpu.device_reset().unwrap();
    assert!(!mpu.is_ready());

    mpu.init(0u8, 0u8, I2cTransport::new(i2c)).unwrap();
    assert_eq!(mpu.who_am_i(), Ok(WHO_AM_I_VALUE));

    let mut i2c = mpu.release().unwrap().into_inner();
    i2c.done();
}
