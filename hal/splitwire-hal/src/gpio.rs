//! GPIO pin abstractions
//!
//! One-way digital pins, used by the bit-banging drivers that only ever
//! drive (LED strips) or only ever sense. The bidirectional link signal has
//! its own trait in [`crate::line`].

/// Digital output pin
///
/// Implementations handle the actual register manipulation for the specific
/// chip. Calls are expected to be cheap; the bit-bang drivers issue them
/// inside nanosecond-scale timing loops.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
