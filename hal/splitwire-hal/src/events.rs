//! Falling-edge detection for the target half
//!
//! The target never polls: it arms falling-edge detection on the shared
//! line and the platform's interrupt controller calls back into a responder
//! object when the initiator pulls the line low. Registration with the
//! actual vector table is the platform integration's job; these traits are
//! the seam the protocol engine is written against.

/// Arm/disarm control over falling-edge detection on one line.
///
/// The target engine disarms itself on entry so a second edge cannot
/// re-enter a transfer already in progress, and re-arms on the way out.
pub trait EdgeControl {
    /// Enable falling-edge detection.
    fn arm(&mut self);

    /// Disable falling-edge detection.
    fn disarm(&mut self);
}

/// Handler object invoked on a detected falling edge.
///
/// Platform glue registers the responder with its interrupt controller and
/// calls [`on_falling_edge`] from the ISR, with interrupts masked. The call
/// must not suspend; the only blocking permitted inside is the protocol's
/// own busy-waits.
///
/// [`on_falling_edge`]: EdgeResponder::on_falling_edge
pub trait EdgeResponder {
    /// React to a falling edge on the watched line.
    fn on_falling_edge(&mut self);
}
