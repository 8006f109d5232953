//! Mathematical helpers
//!
//! - `conversions` - scalar dB/linear and dBm/watt conversions

pub mod conversions;
