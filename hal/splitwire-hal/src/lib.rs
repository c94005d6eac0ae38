//! Splitwire Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the splitwire protocol crates are
//! written against, so the same engine code runs on any board that can
//! toggle a pin, busy-wait, and detect a falling edge.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Protocol / drivers (splitwire-link,     │
//! │  splitwire-drivers)                      │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  splitwire-hal (this crate - traits)     │
//! └──────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  chip HAL     │       │  simulated    │
//! │  (real pins)  │       │  line (tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - One-way digital I/O
//! - [`line::SharedLine`] - The bidirectional single-wire link signal
//! - [`delay::Delay`] - Calibrated busy-wait timing
//! - [`events::EdgeControl`], [`events::EdgeResponder`] - Falling-edge
//!   interrupt plumbing for the target half

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod events;
pub mod gpio;
pub mod line;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use events::{EdgeControl, EdgeResponder};
pub use gpio::{InputPin, OutputPin};
pub use line::SharedLine;
