//! Wire-level timing parameters
//!
//! The link is paced entirely by calibrated busy-waits, so these values are
//! part of the wire protocol: both halves must agree on them or bits get
//! misread. The pulse period doubles as the bit-cell period and the sync
//! handshake width. Lowering it is probably a bad idea.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sync pulse period and bit-cell period, in microseconds
pub const PULSE_US: u32 = 48;

/// Settle wait after observing the partner's sync release, in microseconds
pub const HALF_PULSE_US: u32 = PULSE_US / 2;

/// Width of the initial presence-probe pulse, in microseconds
pub const PROBE_US: u32 = 1;

/// Extra guard delay after each transmitted bit, in microseconds
pub const BIT_FUDGE_US: u32 = 2;

/// Timing profile for one link.
///
/// Defaults to the nominal protocol values. Both halves of a link must be
/// constructed with the same profile; the jitter tolerance between them is
/// roughly the per-byte slack the sync pulse restores (a few microseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// Sync pulse width and bit-cell hold time, in microseconds
    pub pulse_us: u32,
    /// Mid-cell settle wait after a sync release, in microseconds
    pub half_pulse_us: u32,
    /// Presence-probe pulse width, in microseconds
    pub probe_us: u32,
    /// Guard delay appended to each transmitted bit, in microseconds
    pub bit_fudge_us: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            pulse_us: PULSE_US,
            half_pulse_us: HALF_PULSE_US,
            probe_us: PROBE_US,
            bit_fudge_us: BIT_FUDGE_US,
        }
    }
}

impl Timing {
    /// Total hold time of one transmitted bit cell, in microseconds.
    pub fn bit_cell_us(&self) -> u32 {
        self.pulse_us + self.bit_fudge_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_profile() {
        let t = Timing::default();
        assert_eq!(t.pulse_us, 48);
        assert_eq!(t.half_pulse_us, 24);
        assert_eq!(t.probe_us, 1);
        assert_eq!(t.bit_fudge_us, 2);
        assert_eq!(t.bit_cell_us(), 50);
    }
}
