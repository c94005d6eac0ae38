//! Busy-wait timing
//!
//! The link has no hardware UART and no clock wire; every bit cell is paced
//! by calibrated busy-waits. Chip HALs implement this against a cycle
//! counter or polled timer (never a scheduler sleep - the target engine
//! runs inside an interrupt). Test implementations advance a virtual clock
//! instead, which is what makes the whole handshake simulable on a host.

/// Calibrated busy-wait delay provider.
pub trait Delay {
    /// Busy-wait for at least `ns` nanoseconds.
    fn delay_ns(&mut self, ns: u32);

    /// Busy-wait for at least `us` microseconds.
    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us.saturating_mul(1_000));
    }
}
