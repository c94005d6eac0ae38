//! Bit-banged peripheral drivers
//!
//! Drivers for peripherals that hang off a splitwire device and share its
//! software-timed I/O style, written against the `splitwire-hal` traits:
//!
//! - Addressable LED strips (one-way, fire-and-forget; no handshake and
//!   no error detection, unlike the link protocol)

#![no_std]
#![deny(unsafe_code)]

pub mod led;
