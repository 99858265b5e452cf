//! INA219 current/power monitor
//!
//! A minimal register-level driver for the INA219 on the same board. The
//! device exposes six 16-bit big-endian registers behind a one-byte pointer:
//! a write sends the pointer followed by the value, a read writes the pointer
//! and then reads two bytes with a repeated start.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1331::ina219::{self, Ina219};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(&mut self, _address: u8, _operations: &mut [Operation<'_>]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut sensor = Ina219::new(MockI2c, ina219::DEFAULT_ADDRESS);
//! let _ = sensor.write_register(ina219::CALIBRATION, 0x1000);
//! let _ = sensor.read_register(ina219::CURRENT);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

/// Default 7-bit address (A0 and A1 tied to GND)
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// Configuration register (0x00)
pub const CONFIG: u8 = 0x00;
/// Shunt voltage register (0x01), signed, 10µV per LSB
pub const SHUNT_VOLTAGE: u8 = 0x01;
/// Bus voltage register (0x02), bits 15:3 in 4mV steps
pub const BUS_VOLTAGE: u8 = 0x02;
/// Power register (0x03), scaled by the calibration value
pub const POWER: u8 = 0x03;
/// Current register (0x04), scaled by the calibration value
pub const CURRENT: u8 = 0x04;
/// Calibration register (0x05)
pub const CALIBRATION: u8 = 0x05;

/// Errors reported by the INA219 driver
#[derive(Debug, PartialEq, Eq)]
pub enum SensorError<E> {
    /// The I2C transaction did not complete
    CommunicationFailed(E),
}

impl<E: Debug> core::fmt::Display for SensorError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CommunicationFailed(e) => write!(f, "INA219 communication failed: {e:?}"),
        }
    }
}

impl<E: Debug> core::error::Error for SensorError<E> {}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for SensorError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::CommunicationFailed(_) => defmt::write!(f, "INA219 communication failed"),
        }
    }
}

/// INA219 driver over a blocking I2C bus
pub struct Ina219<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ina219<I2C>
where
    I2C: I2c,
{
    /// Create a new driver for the device at `address`
    ///
    /// No bus traffic is generated.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit address this driver talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Write a 16-bit register, most significant byte first
    pub fn write_register(
        &mut self,
        register: u8,
        value: u16,
    ) -> Result<(), SensorError<I2C::Error>> {
        let [high, low] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[register, high, low])
            .map_err(SensorError::CommunicationFailed)
    }

    /// Read a 16-bit register
    pub fn read_register(&mut self, register: u8) -> Result<u16, SensorError<I2C::Error>> {
        let mut buf = [0u8; 2];
        match self.i2c.write_read(self.address, &[register], &mut buf) {
            Ok(()) => {
                log::debug!("ina219: register {register:#04x} -> [{:#04x}, {:#04x}]", buf[0], buf[1]);
                Ok(u16::from_be_bytes(buf))
            }
            Err(e) => {
                log::warn!("ina219: read of register {register:#04x} failed");
                Err(SensorError::CommunicationFailed(e))
            }
        }
    }

    /// Shunt voltage in microvolts
    pub fn shunt_voltage_uv(&mut self) -> Result<i32, SensorError<I2C::Error>> {
        let raw = self.read_register(SHUNT_VOLTAGE)? as i16;
        Ok(i32::from(raw) * 10)
    }

    /// Bus voltage in millivolts
    pub fn bus_voltage_mv(&mut self) -> Result<u32, SensorError<I2C::Error>> {
        let raw = self.read_register(BUS_VOLTAGE)?;
        Ok(u32::from(raw >> 3) * 4)
    }

    /// Consume the driver and hand back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    #[derive(Default)]
    struct MockI2c {
        registers: [u16; 6],
        pointer: usize,
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for operation in operations {
                match operation {
                    Operation::Write(bytes) => {
                        self.writes.push((address, bytes.to_vec()));
                        self.pointer = bytes[0] as usize;
                        if let [_, high, low] = bytes[..] {
                            self.registers[self.pointer] = u16::from_be_bytes([high, low]);
                        }
                    }
                    Operation::Read(buf) => {
                        buf.copy_from_slice(&self.registers[self.pointer].to_be_bytes());
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_register_is_big_endian() {
        let mut sensor = Ina219::new(MockI2c::default(), DEFAULT_ADDRESS);
        assert!(sensor.write_register(CALIBRATION, 0x1234).is_ok());

        let i2c = sensor.release();
        assert_eq!(i2c.writes, [(0x40, Vec::from([0x05, 0x12, 0x34]))]);
        assert_eq!(i2c.registers[CALIBRATION as usize], 0x1234);
    }

    #[test]
    fn test_read_register_round_trips_pointer() {
        let mut i2c = MockI2c::default();
        i2c.registers[CURRENT as usize] = 0xBEEF;
        let mut sensor = Ina219::new(i2c, 0x41);

        assert_eq!(sensor.read_register(CURRENT), Ok(0xBEEF));
        assert_eq!(sensor.address(), 0x41);
    }

    #[test]
    fn test_failed_transaction_reports_communication_failure() {
        let i2c = MockI2c {
            fail: true,
            ..MockI2c::default()
        };
        let mut sensor = Ina219::new(i2c, DEFAULT_ADDRESS);

        assert_eq!(
            sensor.read_register(CONFIG),
            Err(SensorError::CommunicationFailed(MockError))
        );
        assert_eq!(
            sensor.write_register(CONFIG, 0x399F),
            Err(SensorError::CommunicationFailed(MockError))
        );
    }

    #[test]
    fn test_voltage_scaling() {
        let mut i2c = MockI2c::default();
        // 5.000V: 1250 steps of 4mV in bits 15:3
        i2c.registers[BUS_VOLTAGE as usize] = 1250 << 3;
        // -3.20mV
        i2c.registers[SHUNT_VOLTAGE as usize] = (-320i16) as u16;
        let mut sensor = Ina219::new(i2c, DEFAULT_ADDRESS);

        assert_eq!(sensor.bus_voltage_mv(), Ok(5000));
        assert_eq!(sensor.shunt_voltage_uv(), Ok(-3200));
    }
}
