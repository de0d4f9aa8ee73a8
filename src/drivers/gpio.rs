//! Push-pull output pin behind the `embedded-hal` [`OutputPin`] trait.
//!
//! On ESP-IDF: writes through `hw_init::gpio_write` (pin configured at boot).
//! On host/test: records the level in memory.

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

/// ESP-IDF status code of a failed pin write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioError(pub i32);

impl embedded_hal::digital::Error for GpioError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct GpioPin {
    gpio: i32,
    high: bool,
}

impl GpioPin {
    /// Wrap an already-configured output.  The pin is assumed low.
    pub fn new(gpio: i32) -> Self {
        Self { gpio, high: false }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Last level successfully written.
    pub fn is_set_high(&self) -> bool {
        self.high
    }

    #[cfg(target_os = "espidf")]
    fn write(&mut self, high: bool) -> Result<(), GpioError> {
        crate::drivers::hw_init::gpio_write(self.gpio, high).map_err(GpioError)?;
        self.high = high;
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn write(&mut self, high: bool) -> Result<(), GpioError> {
        self.high = high;
        Ok(())
    }
}

impl ErrorType for GpioPin {
    type Error = GpioError;
}

impl OutputPin for GpioPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}
