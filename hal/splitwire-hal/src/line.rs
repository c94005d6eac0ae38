//! The shared link signal
//!
//! Both halves of the device sit on one wire. Exactly one party drives it at
//! any moment; the other senses it. The protocol alternates direction by
//! phase, so the trait exposes the direction switch explicitly instead of
//! splitting input and output into separate pin types.

/// Bidirectional single-wire signal.
///
/// Implementations map to an open-drain or push-pull GPIO with a pull-up:
/// in input mode the undriven line must float high, which is what the
/// protocol relies on to detect a disconnected partner.
pub trait SharedLine {
    /// Configure the line as a driven output.
    ///
    /// The driven level is whatever was last set with [`drive_high`] or
    /// [`drive_low`]; callers set the level explicitly after switching.
    ///
    /// [`drive_high`]: SharedLine::drive_high
    /// [`drive_low`]: SharedLine::drive_low
    fn set_output(&mut self);

    /// Configure the line as a sensed input with the pull-up active.
    fn set_input(&mut self);

    /// Drive the line high (idle level). Only meaningful in output mode.
    fn drive_high(&mut self);

    /// Drive the line low (active level). Only meaningful in output mode.
    fn drive_low(&mut self);

    /// Sample the current line level: `true` = high/idle, `false` = low.
    fn read_level(&mut self) -> bool;
}
