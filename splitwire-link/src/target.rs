//! Target engine
//!
//! The responding half. It never polls: it arms falling-edge detection at
//! init and runs the entire protocol inside the resulting interrupt, with
//! no scheduler to fall back on. The only blocking inside the handler is
//! the protocol's own busy-waits.

use splitwire_hal::{Delay, EdgeControl, EdgeResponder, SharedLine};

use crate::checksum;
use crate::descriptor::TransactionDescriptor;
use crate::framer;
use crate::sync;
use crate::timing::Timing;

/// Transaction-responding half of the link.
///
/// Platform glue registers this with its interrupt controller and calls
/// [`EdgeResponder::on_falling_edge`] when the initiator pulls the line
/// low. The engine disarms its own edge detection for the duration of the
/// transfer so a second edge cannot re-enter it.
pub struct Target<'t, 'b, L, D, E> {
    line: L,
    delay: D,
    edge: E,
    timing: Timing,
    table: &'t mut [TransactionDescriptor<'b>],
}

impl<'t, 'b, L, D, E> Target<'t, 'b, L, D, E>
where
    L: SharedLine,
    D: Delay,
    E: EdgeControl,
{
    /// Register the transaction table, set the line to idle listening and
    /// arm falling-edge detection.
    ///
    /// The table must hold at least one descriptor; transfers serve the
    /// first slot.
    pub fn new(line: L, delay: D, edge: E, table: &'t mut [TransactionDescriptor<'b>]) -> Self {
        Self::with_timing(line, delay, edge, table, Timing::default())
    }

    /// Like [`new`], with a non-default timing profile.
    ///
    /// [`new`]: Target::new
    pub fn with_timing(
        mut line: L,
        delay: D,
        mut edge: E,
        table: &'t mut [TransactionDescriptor<'b>],
        timing: Timing,
    ) -> Self {
        debug_assert!(!table.is_empty(), "transaction table must not be empty");
        line.set_input();
        edge.arm();
        Self {
            line,
            delay,
            edge,
            timing,
            table,
        }
    }

    /// Release the engine and hand back its hardware resources.
    pub fn free(self) -> (L, D, E) {
        (self.line, self.delay, self.edge)
    }

    fn respond(&mut self) {
        let timing = self.timing;

        // No re-entry while a transfer is in progress.
        self.edge.disarm();

        // Acknowledge presence and align the initiator.
        sync::send(&mut self.line, &mut self.delay, &timing);

        let mut sum: u8 = 0;
        let slot = &self.table[0];
        for i in 0..slot.target_to_initiator.len() {
            let byte = slot.target_to_initiator[i];
            framer::write_byte(&mut self.line, &mut self.delay, &timing, byte);
            sync::send(&mut self.line, &mut self.delay, &timing);
            sum = sum.wrapping_add(byte);
        }

        framer::write_byte(&mut self.line, &mut self.delay, &timing, checksum::fold(sum));
        sync::send(&mut self.line, &mut self.delay, &timing);

        // Let the final sync finish propagating before releasing the line.
        self.delay.delay_us(timing.pulse_us);
        self.line.set_input();

        self.edge.arm();
    }
}

impl<'t, 'b, L, D, E> EdgeResponder for Target<'t, 'b, L, D, E>
where
    L: SharedLine,
    D: Delay,
    E: EdgeControl,
{
    fn on_falling_edge(&mut self) {
        // Runs in interrupt context; mask everything for the duration.
        critical_section::with(|_| self.respond());
    }
}
