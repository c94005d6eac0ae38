//! Addressable LED strip drivers

mod strip;

pub use strip::{BitTiming, LedStrip, Rgb};
