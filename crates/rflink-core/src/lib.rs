//! rflink-core: RF/telecom engineering calculator library
//!
//! Deterministic calculation routines for radio system design. Each
//! calculator is a pure function from named input parameters to named
//! numeric results; the only process-lifetime state is a pair of
//! compiled-in reference tables.
//!
//! ## Modules
//!
//! - `params` - String-keyed parameter maps and typed extraction
//! - `math` - Scalar dB/linear and dBm/watt conversions
//! - `tables` - Eb/N0-vs-BER curves and Erlang-B channel tables
//! - `pipeline` - Data rate through a digital transmission chain
//! - `ofdm` - OFDM channel capacity and spectral efficiency
//! - `link_budget` - Received power and link margin
//! - `cellular` - Cell radius, cluster size, and carrier dimensioning
//! - `scenario` - Dispatch by scenario name

pub mod cellular;
pub mod constants;
pub mod error;
pub mod link_budget;
pub mod math;
pub mod ofdm;
pub mod params;
pub mod pipeline;
pub mod scenario;
pub mod tables;

pub use error::CalcError;
pub use params::{Params, ResultMap};
pub use scenario::Scenario;
