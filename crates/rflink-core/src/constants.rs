//! Physical constants and fixed engineering domains
//!
//! Values shared by the calculators. All are compiled in; nothing is
//! read from configuration at runtime.

/// Boltzmann constant in J/K, as used in thermal noise power k*T*B.
pub const BOLTZMANN: f64 = 1.38e-23;

/// Reference noise temperature in Kelvin.
pub const T0_KELVIN: f64 = 290.0;

/// Reference distance in meters for the log-distance path loss model.
pub const REF_DISTANCE_M: f64 = 10.0;

/// Cluster sizes permitted by hexagonal frequency-reuse geometry,
/// K = i^2 + i*j + j^2 for non-negative integers i, j. Ascending.
pub const VALID_CLUSTER_SIZES: [u32; 8] = [1, 3, 4, 7, 9, 12, 13, 19];

/// Fallback cluster size when no valid K satisfies the SIR constraint
/// (the valid set tops out at 19).
pub const FALLBACK_CLUSTER_SIZE: u32 = 7;
