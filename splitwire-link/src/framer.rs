//! Byte framer
//!
//! One byte is eight sequential bit cells over the shared line, most
//! significant bit first. There is no start or stop bit; the sync pulse
//! between bytes is what keeps the two halves aligned.

use splitwire_hal::{Delay, SharedLine};

use crate::timing::Timing;

/// Transmit one byte, MSB first.
///
/// Each bit level is held for one pulse period plus the inter-bit fudge.
/// Leaves the line in output mode at the last bit's level; the caller's
/// following sync pulse restores the idle state.
pub fn write_byte<L: SharedLine, D: Delay>(line: &mut L, delay: &mut D, timing: &Timing, byte: u8) {
    line.set_output();
    let mut bit = 8;
    while bit > 0 {
        bit -= 1;
        if byte & (1 << bit) != 0 {
            line.drive_high();
        } else {
            line.drive_low();
        }
        delay.delay_us(timing.pulse_us);
        delay.delay_us(timing.bit_fudge_us);
    }
}

/// Receive one byte, MSB first.
///
/// Samples the line level once per pulse period and shifts it into the
/// accumulator. The caller must already be aligned mid-cell (the settle
/// wait in [`crate::sync::recv`] does that).
pub fn read_byte<L: SharedLine, D: Delay>(line: &mut L, delay: &mut D, timing: &Timing) -> u8 {
    let mut byte = 0u8;
    line.set_input();
    for _ in 0..8 {
        byte = (byte << 1) | (line.read_level() as u8);
        delay.delay_us(timing.pulse_us);
    }
    byte
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::timing::Timing;

    /// Line double that replays a fixed sample sequence and records levels.
    struct ScriptedLine {
        samples: [bool; 8],
        cursor: usize,
        driven: heapless::Vec<bool, 16>,
    }

    impl ScriptedLine {
        fn new(samples: [bool; 8]) -> Self {
            Self {
                samples,
                cursor: 0,
                driven: heapless::Vec::new(),
            }
        }
    }

    impl SharedLine for ScriptedLine {
        fn set_output(&mut self) {}
        fn set_input(&mut self) {}
        fn drive_high(&mut self) {
            let _ = self.driven.push(true);
        }
        fn drive_low(&mut self) {
            let _ = self.driven.push(false);
        }
        fn read_level(&mut self) -> bool {
            let level = self.samples[self.cursor];
            self.cursor += 1;
            level
        }
    }

    struct NoopDelay;

    impl Delay for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_write_is_msb_first() {
        let mut line = ScriptedLine::new([false; 8]);
        write_byte(&mut line, &mut NoopDelay, &Timing::default(), 0b1010_0011);
        assert_eq!(
            line.driven.as_slice(),
            &[true, false, true, false, false, false, true, true]
        );
    }

    #[test]
    fn test_read_is_msb_first() {
        let mut line = ScriptedLine::new([true, false, true, false, false, false, true, true]);
        let byte = read_byte(&mut line, &mut NoopDelay, &Timing::default());
        assert_eq!(byte, 0b1010_0011);
    }

    #[test]
    fn test_read_all_ones() {
        let mut line = ScriptedLine::new([true; 8]);
        assert_eq!(read_byte(&mut line, &mut NoopDelay, &Timing::default()), 0xFF);
    }
}
