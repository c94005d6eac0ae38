//! Half-duplex single-wire transaction protocol
//!
//! This crate implements the link between the two halves of a split device
//! that share one bidirectional signal line and no clock line. There is no
//! hardware UART underneath: bit timing, edge-triggered synchronization and
//! error detection are all done in software against the [`splitwire_hal`]
//! traits, which is what lets the whole handshake run on real pins or on
//! the simulated line in [`sim`].
//!
//! # Transaction shape
//!
//! ```text
//! initiator: ──probe──┐            ┌─poll─┐        ┌─poll─┐
//!                     ▼            │      ▼        │      ▼
//! line:      ▔▔▔╲____╱▔╲__________╱▔▔╳╳╳╳╳╳╳╳╲____╱▔▔ ... ╲____╱▔▔▔
//!                      ▲   sync    ▲  byte 0  sync   bytes+checksum
//! target:        edge──┘ (ack+align)
//! ```
//!
//! The initiator pulls the line low to request a transaction; the falling
//! edge fires the target's responder inside an interrupt. The target then
//! drives every data byte and a folded checksum onto the line, re-aligning
//! the initiator with a sync pulse after each byte. The initiator validates
//! the checksum and reports one of three [`Outcome`]s.
//!
//! Retry policy belongs to the caller; the engines never retry on their own.

#![no_std]
#![deny(unsafe_code)]

// The proptest macros in the test suites format failure messages.
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod checksum;
pub mod descriptor;
pub mod framer;
pub mod initiator;
pub mod outcome;
pub mod sync;
pub mod target;
pub mod timing;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use descriptor::TransactionDescriptor;
pub use initiator::Initiator;
pub use outcome::Outcome;
pub use target::Target;
pub use timing::Timing;
