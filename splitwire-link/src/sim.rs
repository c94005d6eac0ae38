//! Simulated line and virtual clock
//!
//! Deterministic host-side doubles for the [`splitwire_hal`] traits, so the
//! full handshake can be exercised without hardware and without real time.
//!
//! The two engines cannot run concurrently on one host thread, but after
//! the presence probe the transfer is entirely target-driven, so a
//! transaction splits cleanly into two phases:
//!
//! 1. **Record**: run the real target engine against a [`RecordingLine`],
//!    capturing the waveform it drives as timestamped level transitions.
//! 2. **Playback**: run the real initiator engine against a
//!    [`PlaybackLine`] holding that waveform. The initiator's request pulse
//!    arms the waveform at `now + interrupt latency`, exactly where the
//!    target's edge interrupt would have started it.
//!
//! Every [`SharedLine::read_level`] advances the virtual clock by a small
//! propagation tick, so the protocol's unbounded busy-polls terminate in
//! simulation while staying unbounded in the engine code itself. Recorded
//! drive operations consume a larger tick, so two back-to-back transitions
//! (a sync release followed by a low first bit) keep a nonzero width that
//! a polling reader cannot step over.

use core::cell::Cell;

use heapless::Vec;
use splitwire_hal::{Delay, SharedLine};

use crate::timing::Timing;

/// Virtual time advanced per line sample, in nanoseconds
pub const PROP_TICK_NS: u64 = 25;

/// Virtual time consumed by each recorded drive or release, in nanoseconds.
/// Must exceed [`PROP_TICK_NS`] so a polling reader samples every recorded
/// level at least once.
pub const DRIVE_TICK_NS: u64 = 250;

/// Default simulated latency between the request edge and the first
/// instruction of the target's handler, in nanoseconds
pub const DEFAULT_LATENCY_NS: u64 = 3_000;

/// Maximum recorded transitions per waveform
pub const TAPE_CAP: usize = 2048;

/// Monotonic virtual clock shared by every simulated part of one link.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ns: Cell<u64>,
}

impl VirtualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in nanoseconds.
    pub fn now_ns(&self) -> u64 {
        self.now_ns.get()
    }

    /// Advance virtual time.
    pub fn advance(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get() + ns);
    }
}

/// Delay provider that advances the virtual clock instead of spinning.
pub struct SimDelay<'c> {
    clock: &'c VirtualClock,
}

impl<'c> SimDelay<'c> {
    pub fn new(clock: &'c VirtualClock) -> Self {
        Self { clock }
    }
}

impl Delay for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(ns as u64);
    }
}

/// One recorded level change on the simulated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Time of the change, in nanoseconds relative to the waveform start
    pub at_ns: u64,
    /// Level the line changed to: `true` = high
    pub level: bool,
}

/// Line double that records the waveform a driving engine produces.
///
/// The undriven line floats high, so releasing it to input mode records a
/// transition back to high. Identical consecutive levels are collapsed.
pub struct RecordingLine<'c> {
    clock: &'c VirtualClock,
    tape: Vec<Transition, TAPE_CAP>,
    level: bool,
    output: bool,
}

impl<'c> RecordingLine<'c> {
    pub fn new(clock: &'c VirtualClock) -> Self {
        Self {
            clock,
            tape: Vec::new(),
            level: true,
            output: false,
        }
    }

    /// Check if the driving engine currently holds the line as an output.
    pub fn is_output(&self) -> bool {
        self.output
    }

    /// Finish recording and return the waveform, re-based so the first
    /// transition sits at time zero (the moment the driver started).
    pub fn into_tape(self) -> Vec<Transition, TAPE_CAP> {
        let mut tape = self.tape;
        if let Some(first) = tape.first().copied() {
            for t in tape.iter_mut() {
                t.at_ns -= first.at_ns;
            }
        }
        tape
    }

    fn record(&mut self, level: bool) {
        if level == self.level {
            return;
        }
        self.level = level;
        // A full tape drops further transitions; TAPE_CAP covers transfers
        // of ~100 bytes, far beyond what the tests exchange.
        let _ = self.tape.push(Transition {
            at_ns: self.clock.now_ns(),
            level,
        });
    }
}

impl SharedLine for RecordingLine<'_> {
    fn set_output(&mut self) {
        self.output = true;
    }

    fn set_input(&mut self) {
        self.output = false;
        // Released: the pull-up floats the line high.
        self.record(true);
        self.clock.advance(DRIVE_TICK_NS);
    }

    fn drive_high(&mut self) {
        self.record(true);
        self.clock.advance(DRIVE_TICK_NS);
    }

    fn drive_low(&mut self) {
        self.record(false);
        self.clock.advance(DRIVE_TICK_NS);
    }

    fn read_level(&mut self) -> bool {
        self.clock.advance(PROP_TICK_NS);
        self.level
    }
}

/// Line double that plays a recorded target waveform back to an initiator.
///
/// Until the initiator drives the request pulse the line floats high (or
/// carries whatever the initiator itself drives). The first falling drive
/// arms the waveform origin at `now + latency`; afterwards, input-mode
/// reads return the waveform level at `now - origin`, optionally inverted
/// inside a fault window for corruption tests.
pub struct PlaybackLine<'c, 'w> {
    clock: &'c VirtualClock,
    waveform: &'w [Transition],
    latency_ns: u64,
    origin: Option<u64>,
    fault: Option<(u64, u64)>,
    output: bool,
    driven: bool,
}

impl<'c, 'w> PlaybackLine<'c, 'w> {
    /// Line with a responsive target playing back `waveform`.
    pub fn attached(clock: &'c VirtualClock, waveform: &'w [Transition]) -> Self {
        Self {
            clock,
            waveform,
            latency_ns: DEFAULT_LATENCY_NS,
            origin: None,
            fault: None,
            output: false,
            driven: true,
        }
    }

    /// Line with no target on the other end; it only ever floats high.
    pub fn unattached(clock: &'c VirtualClock) -> Self {
        Self::attached(clock, &[])
    }

    /// Override the simulated interrupt latency.
    ///
    /// Must stay within one pulse period of the nominal value or the
    /// presence probe will sample outside the target's acknowledge pulse,
    /// which is the same constraint real hardware has.
    pub fn with_latency_ns(mut self, latency_ns: u64) -> Self {
        self.latency_ns = latency_ns;
        self
    }

    /// Invert input-mode reads between two waveform-relative timestamps.
    pub fn with_fault_window(mut self, from_ns: u64, to_ns: u64) -> Self {
        self.fault = Some((from_ns, to_ns));
        self
    }

    /// Check if the initiator currently holds the line as a driven output.
    pub fn is_output(&self) -> bool {
        self.output
    }

    /// Level the initiator last drove.
    pub fn driven_level(&self) -> bool {
        self.driven
    }

    fn waveform_level_at(&self, rel_ns: u64) -> bool {
        let idx = self.waveform.partition_point(|t| t.at_ns <= rel_ns);
        match idx {
            0 => true, // before the target started driving
            n => self.waveform[n - 1].level,
        }
    }
}

impl SharedLine for PlaybackLine<'_, '_> {
    fn set_output(&mut self) {
        self.output = true;
    }

    fn set_input(&mut self) {
        self.output = false;
    }

    fn drive_high(&mut self) {
        self.driven = true;
    }

    fn drive_low(&mut self) {
        self.driven = false;
        if self.output && !self.waveform.is_empty() {
            // The falling edge is what fires the target's interrupt.
            self.origin = Some(self.clock.now_ns() + self.latency_ns);
        }
    }

    fn read_level(&mut self) -> bool {
        self.clock.advance(PROP_TICK_NS);
        if self.output {
            return self.driven;
        }
        let Some(origin) = self.origin else {
            return true;
        };
        let now = self.clock.now_ns();
        if now < origin {
            return true;
        }
        let rel = now - origin;
        let mut level = self.waveform_level_at(rel);
        if let Some((from, to)) = self.fault {
            if rel >= from && rel < to {
                level = !level;
            }
        }
        level
    }
}

/// Waveform-relative window occupied by one data bit cell.
///
/// `byte_idx` counts data bytes from zero; the checksum byte is
/// `buffer_len`. Bit 0 is the MSB, matching the order on the wire.
/// Each recorded drive consumes [`DRIVE_TICK_NS`], so a bit cell is a
/// drive tick plus the cell period, and each sync pulse carries two
/// drive ticks (its falling and rising edges).
pub fn data_bit_window(timing: &Timing, byte_idx: usize, bit_idx: usize) -> (u64, u64) {
    let pulse = timing.pulse_us as u64 * 1_000;
    let cell = DRIVE_TICK_NS + timing.bit_cell_us() as u64 * 1_000;
    let sync = 2 * DRIVE_TICK_NS + pulse;
    let byte_block = 8 * cell + sync;
    let start = sync + byte_idx as u64 * byte_block + bit_idx as u64 * cell;
    (start, start + cell)
}
