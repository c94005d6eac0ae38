//! Synchronization primitive
//!
//! A one-bit handshake exchanged between the halves to re-align timing at
//! every byte boundary. The sender pulls the line low for one pulse period
//! and releases it high; the receiver polls for the release and then waits
//! half a period to land mid-cell for the next bit.

use splitwire_hal::{Delay, SharedLine};

use crate::timing::Timing;

/// Drive one sync pulse: low for a full pulse period, then back high.
///
/// Used by whichever party must signal "ready for the next byte" - in the
/// current protocol that is always the target.
pub fn send<L: SharedLine, D: Delay>(line: &mut L, delay: &mut D, timing: &Timing) {
    line.set_output();
    line.drive_low();
    delay.delay_us(timing.pulse_us);
    line.drive_high();
}

/// Wait for the partner's sync pulse to complete, then settle mid-cell.
///
/// Busy-polls with no deadline. This does not hang on a disconnected
/// partner because the undriven line floats high; it does hang if the
/// partner stalls while actively holding the line low.
pub fn recv<L: SharedLine, D: Delay>(line: &mut L, delay: &mut D, timing: &Timing) {
    line.set_input();
    while !line.read_level() {}

    delay.delay_us(timing.half_pulse_us);
}
