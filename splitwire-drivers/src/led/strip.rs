//! One-wire addressable LED strip driver
//!
//! Drives WS2812-class strips by bit-banging the single data line: each bit
//! is a high-then-low pulse whose two durations select a one or a zero, and
//! a long low gap latches the frame. One-way and fire-and-forget - there is
//! no handshake and no error detection, which is why this lives apart from
//! the link protocol.
//!
//! Timing is conservative rather than throughput-optimal. The whole frame
//! is pushed inside a critical section; a preempted bit stretches past the
//! strip's tolerance and corrupts the rest of the frame.

use splitwire_hal::{Delay, OutputPin};

/// Width of a 1 bit: high phase, in nanoseconds
pub const T1H_NS: u32 = 900;
/// Width of a 1 bit: low phase, in nanoseconds
pub const T1L_NS: u32 = 600;
/// Width of a 0 bit: high phase, in nanoseconds
pub const T0H_NS: u32 = 400;
/// Width of a 0 bit: low phase, in nanoseconds
pub const T0L_NS: u32 = 900;
/// Low gap that latches a frame, in nanoseconds.
///
/// Some strips need this raised as far as 600_000 ns; too small and the
/// pixels show nothing most of the time.
pub const RESET_NS: u32 = 7_000;

/// Bit-cell duration profile for one strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitTiming {
    /// One bit: high / low phase widths, in nanoseconds
    pub one_ns: (u32, u32),
    /// Zero bit: high / low phase widths, in nanoseconds
    pub zero_ns: (u32, u32),
    /// Inter-frame reset gap, in nanoseconds
    pub reset_ns: u32,
}

impl Default for BitTiming {
    fn default() -> Self {
        Self {
            one_ns: (T1H_NS, T1L_NS),
            zero_ns: (T0H_NS, T0L_NS),
            reset_ns: RESET_NS,
        }
    }
}

/// One pixel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Bit-banged driver for a strip of addressable LEDs.
pub struct LedStrip<P, D> {
    pin: P,
    delay: D,
    timing: BitTiming,
}

impl<P: OutputPin, D: Delay> LedStrip<P, D> {
    /// Claim the data pin with the conservative default timing.
    pub fn new(pin: P, delay: D) -> Self {
        Self::with_timing(pin, delay, BitTiming::default())
    }

    /// Claim the data pin with a strip-specific timing profile.
    pub fn with_timing(mut pin: P, delay: D, timing: BitTiming) -> Self {
        pin.set_low();
        Self { pin, delay, timing }
    }

    /// Push one full frame, one color per LED, then latch it.
    ///
    /// Blocks with interrupts masked for the whole frame.
    pub fn write(&mut self, pixels: &[Rgb]) {
        critical_section::with(|_| {
            for px in pixels {
                // Wire order is green, red, blue.
                self.send_byte(px.g);
                self.send_byte(px.r);
                self.send_byte(px.b);
            }
            self.delay.delay_ns(self.timing.reset_ns);
        });
    }

    /// Release the driver and hand back the pin and delay provider.
    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn send_byte(&mut self, mut byte: u8) {
        for _ in 0..8 {
            let (high_ns, low_ns) = if byte & 0x80 != 0 {
                self.timing.one_ns
            } else {
                self.timing.zero_ns
            };
            self.pin.set_high();
            self.delay.delay_ns(high_ns);
            self.pin.set_low();
            self.delay.delay_ns(low_ns);
            byte <<= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::cell::RefCell;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Level(bool),
        Wait(u32),
    }

    /// Shared log of pin edges and waits, in issue order.
    #[derive(Default)]
    struct Tape(RefCell<Vec<Event, 512>>);

    impl Tape {
        fn push(&self, e: Event) {
            self.0.borrow_mut().push(e).unwrap();
        }
    }

    struct TapePin<'a>(&'a Tape);

    impl OutputPin for TapePin<'_> {
        fn set_high(&mut self) {
            self.0.push(Event::Level(true));
        }

        fn set_low(&mut self) {
            self.0.push(Event::Level(false));
        }
    }

    struct TapeDelay<'a>(&'a Tape);

    impl Delay for TapeDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.0.push(Event::Wait(ns));
        }
    }

    /// Decode (high_ns, low_ns) pairs and the trailing reset gap.
    fn decode_frame(events: &[Event]) -> (Vec<(u32, u32), 64>, u32) {
        // The constructor's initial set_low precedes the frame.
        assert_eq!(events[0], Event::Level(false));
        let mut cells = Vec::new();
        let mut i = 1;
        while i + 3 < events.len() {
            match events[i..i + 4] {
                [Event::Level(true), Event::Wait(h), Event::Level(false), Event::Wait(l)] => {
                    cells.push((h, l)).unwrap();
                    i += 4;
                }
                _ => break,
            }
        }
        assert_eq!(i, events.len() - 1, "stray events inside the frame");
        let Event::Wait(reset) = events[i] else {
            panic!("frame does not end in a reset gap");
        };
        (cells, reset)
    }

    #[test]
    fn test_frame_is_grb_msb_first() {
        let tape = Tape::default();
        let mut strip = LedStrip::new(TapePin(&tape), TapeDelay(&tape));
        strip.write(&[Rgb::new(0xFF, 0x00, 0x0F)]);

        let events = tape.0.borrow();
        let (cells, reset) = decode_frame(&events);
        assert_eq!(cells.len(), 24);
        assert_eq!(reset, RESET_NS);

        // Green 0x00: eight zero cells.
        assert!(cells[0..8].iter().all(|&c| c == (T0H_NS, T0L_NS)));
        // Red 0xFF: eight one cells.
        assert!(cells[8..16].iter().all(|&c| c == (T1H_NS, T1L_NS)));
        // Blue 0x0F: MSB first, four zeros then four ones.
        assert!(cells[16..20].iter().all(|&c| c == (T0H_NS, T0L_NS)));
        assert!(cells[20..24].iter().all(|&c| c == (T1H_NS, T1L_NS)));
    }

    #[test]
    fn test_frames_are_independent() {
        let tape = Tape::default();
        let mut strip = LedStrip::new(TapePin(&tape), TapeDelay(&tape));
        strip.write(&[Rgb::new(1, 2, 3)]);
        let first_len = tape.0.borrow().len();

        strip.write(&[Rgb::new(1, 2, 3)]);
        let events = tape.0.borrow();

        // Second frame is byte-for-byte the same waveform.
        assert_eq!(events.len(), 2 * first_len - 1);
        assert_eq!(events[1..first_len], events[first_len..]);
    }

    #[test]
    fn test_custom_timing_profile() {
        let tape = Tape::default();
        let timing = BitTiming {
            one_ns: (800, 450),
            zero_ns: (300, 800),
            reset_ns: 600_000,
        };
        let mut strip = LedStrip::with_timing(TapePin(&tape), TapeDelay(&tape), timing);
        strip.write(&[Rgb::new(0, 0, 0x80)]);

        let events = tape.0.borrow();
        let (cells, reset) = decode_frame(&events);
        assert_eq!(reset, 600_000);
        // Only the blue MSB is a one.
        assert_eq!(cells[16], (800, 450));
        assert_eq!(cells[17], (300, 800));
    }
}
