#![cfg_attr(not(test), no_std)]

//! Driver for the MPU-6050 family of 6-axis IMUs (accelerometer, gyroscope and
//! die temperature).
//!
//! The bus is abstracted behind [`Transport`]; use [`I2cTransport`] for any
//! embedded-hal 1.0 I2C bus, or [`CallbackTransport`] for a pair of plain
//! functions. Every read is gated on the driver state machine:
//!
//! ```
//! use mpu_rs::{Error, FullScale, Mpu, Transport};
//!
//! struct Bus;
//!
//! impl Transport for Bus {
//!     type Error = ();
//!
//!     fn transmit(&mut self, _address: u8, _bytes: &[u8]) -> Result<(), ()> {
//!         Ok(())
//!     }
//!
//!     fn receive(&mut self, _address: u8, buffer: &mut [u8]) -> Result<(), ()> {
//!         buffer.fill(0);
//!         Ok(())
//!     }
//! }
//!
//! let mut mpu: Mpu<Bus> = Mpu::new();
//! assert_eq!(mpu.read_accel_raw(), Err(Error::NotInitialized));
//!
//! mpu.init(FullScale::Sel1, FullScale::Sel0, Bus).unwrap();
//! assert!(mpu.is_ready());
//! let accel = mpu.read_accel().unwrap();
//! assert_eq!(accel.to_array(), [0.0; 3]);
//! ```

pub mod access;
pub mod error;
pub mod mpu;
pub mod registers;
pub mod scale;
pub mod state;
pub mod transport;
pub mod vector;

pub use access::combine_bytes;
pub use error::{Error, Status};
pub use mpu::Mpu;
pub use scale::FullScale;
pub use state::{OperationalState, FAULT_CAP};
pub use transport::{CallbackError, CallbackTransport, I2cTransport, Transport};
pub use vector::{Measurements, Vector3};
