//! Compiled-in reference tables
//!
//! - `ebn0` - required Eb/N0 vs. BER curves per modulation scheme
//! - `erlang` - Erlang-B offered-traffic to channel-count tables

pub mod ebn0;
pub mod erlang;

pub use ebn0::Modulation;
pub use erlang::GradeOfService;
