//! Initiator engine
//!
//! The half that originates transactions. One blocking call drives the full
//! state machine:
//!
//! ```text
//! Idle → RequestAsserted → PresenceCheck → Synchronized
//!      → Receiving[i] → ChecksumCompare → {Completed | NoResponse | DataError}
//! ```
//!
//! The whole transaction runs inside a critical section; a delay of even a
//! few instructions shifts bit sampling outside tolerance.

use splitwire_hal::{Delay, SharedLine};

use crate::checksum;
use crate::descriptor::TransactionDescriptor;
use crate::framer;
use crate::outcome::Outcome;
use crate::sync;
use crate::timing::Timing;

/// Transaction-originating half of the link.
///
/// Owns the line, the delay provider and the borrowed transaction table.
/// At most one transaction is in flight at a time, which `&mut self` on
/// [`transaction`] already guarantees.
///
/// [`transaction`]: Initiator::transaction
pub struct Initiator<'t, 'b, L, D> {
    line: L,
    delay: D,
    timing: Timing,
    table: &'t mut [TransactionDescriptor<'b>],
}

impl<'t, 'b, L: SharedLine, D: Delay> Initiator<'t, 'b, L, D> {
    /// Register the transaction table and claim the line, idle-high.
    ///
    /// The table must hold at least one descriptor; transactions run
    /// against the first slot.
    pub fn new(line: L, delay: D, table: &'t mut [TransactionDescriptor<'b>]) -> Self {
        Self::with_timing(line, delay, table, Timing::default())
    }

    /// Like [`new`], with a non-default timing profile.
    ///
    /// [`new`]: Initiator::new
    pub fn with_timing(
        mut line: L,
        delay: D,
        table: &'t mut [TransactionDescriptor<'b>],
        timing: Timing,
    ) -> Self {
        debug_assert!(!table.is_empty(), "transaction table must not be empty");
        line.set_output();
        line.drive_high();
        Self {
            line,
            delay,
            timing,
            table,
        }
    }

    /// Run one transaction against the first descriptor slot.
    ///
    /// Blocks until the exchange finishes or the presence probe goes
    /// unanswered. Interrupts are masked for the full duration. On every
    /// exit path the line ends idle-high: driven output after a data
    /// exchange, input-sensed (pulled high) when the probe goes
    /// unanswered.
    ///
    /// A target that acknowledges presence and then stalls while holding
    /// the line low hangs this call; there is no mid-transfer deadline.
    pub fn transaction(&mut self) -> Outcome {
        critical_section::with(|_| self.run_transaction())
    }

    /// Release the engine and hand back the line and delay provider.
    pub fn free(self) -> (L, D) {
        (self.line, self.delay)
    }

    fn run_transaction(&mut self) -> Outcome {
        let timing = self.timing;

        // Request pulse: signal the target that we want a transaction.
        self.line.set_output();
        self.line.drive_low();
        self.delay.delay_us(timing.probe_us);

        // Release the line (pulled high) and give the target one pulse
        // period to answer.
        self.line.set_input();
        self.delay.delay_us(timing.pulse_us);

        if self.line.read_level() {
            // The target failed to pull the line low, assume not present.
            // The line stays input-sensed, floating high on the pull-up.
            return Outcome::NoResponse;
        }

        // The target is present, synchronize with it.
        sync::recv(&mut self.line, &mut self.delay, &timing);

        let mut sum: u8 = 0;
        let slot = &mut self.table[0];
        for byte in slot.target_to_initiator.iter_mut() {
            *byte = framer::read_byte(&mut self.line, &mut self.delay, &timing);
            sync::recv(&mut self.line, &mut self.delay, &timing);
            sum = sum.wrapping_add(*byte);
        }

        let received = framer::read_byte(&mut self.line, &mut self.delay, &timing);
        sync::recv(&mut self.line, &mut self.delay, &timing);

        // Always release the line when not in use.
        self.release_line();

        if checksum::fold(sum) != received {
            return Outcome::DataError;
        }
        Outcome::Completed
    }

    /// Return the line to the driven-output idle-high state.
    fn release_line(&mut self) {
        self.line.set_output();
        self.line.drive_high();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sim::{PlaybackLine, SimDelay, VirtualClock};

    fn single_slot<'b>(
        up: &'b mut [u8],
        down: &'b mut [u8],
    ) -> [TransactionDescriptor<'b>; 1] {
        [TransactionDescriptor::new(up, down)]
    }

    #[test]
    fn test_silent_target_is_no_response() {
        let clock = VirtualClock::new();
        let mut up: [u8; 0] = [];
        let mut down = [0u8; 3];
        let mut table = single_slot(&mut up, &mut down);

        // No waveform attached: the undriven line floats high.
        let line = PlaybackLine::unattached(&clock);
        let mut initiator = Initiator::new(line, SimDelay::new(&clock), &mut table);

        assert_eq!(initiator.transaction(), Outcome::NoResponse);

        // Line must be left input-sensed and floating high on the pull-up,
        // not re-driven.
        let (mut line, _) = initiator.free();
        assert!(!line.is_output());
        assert!(line.read_level());
    }

    #[test]
    #[should_panic]
    fn test_empty_table_is_rejected() {
        let clock = VirtualClock::new();
        let mut table: [TransactionDescriptor<'_>; 0] = [];

        let line = PlaybackLine::unattached(&clock);
        let _ = Initiator::new(line, SimDelay::new(&clock), &mut table);
    }

    #[test]
    fn test_no_response_leaves_buffer_untouched() {
        let clock = VirtualClock::new();
        let mut up: [u8; 0] = [];
        let mut down = [0xAA, 0xBB];
        let mut table = single_slot(&mut up, &mut down);

        let line = PlaybackLine::unattached(&clock);
        let mut initiator = Initiator::new(line, SimDelay::new(&clock), &mut table);
        assert_eq!(initiator.transaction(), Outcome::NoResponse);
        drop(initiator);

        assert_eq!(down, [0xAA, 0xBB]);
    }
}
