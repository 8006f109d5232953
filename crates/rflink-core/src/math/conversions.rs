//! Unit conversion functions
//!
//! Scalar conversions between decibel and linear power quantities.

/// Convert a power ratio in dB to linear (10^(dB/10)).
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Convert a linear power ratio to dB (10*log10(x)).
pub fn linear_to_db(x: f64) -> f64 {
    10.0 * x.log10()
}

/// Convert power in dBm to watts.
pub fn dbm_to_watts(dbm: f64) -> f64 {
    10.0_f64.powf((dbm - 30.0) / 10.0)
}

/// Convert power in watts to dBm.
pub fn watts_to_dbm(watts: f64) -> f64 {
    10.0 * watts.log10() + 30.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_db_to_linear() {
        assert_relative_eq!(db_to_linear(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(db_to_linear(10.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(db_to_linear(3.0), 1.9952623149688795, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_to_db() {
        assert_relative_eq!(linear_to_db(100.0), 20.0, epsilon = 1e-12);
        assert_relative_eq!(linear_to_db(1.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dbm_to_watts() {
        // 0 dBm = 1 mW, 30 dBm = 1 W
        assert_relative_eq!(dbm_to_watts(0.0), 1e-3, epsilon = 1e-15);
        assert_relative_eq!(dbm_to_watts(30.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_watts_to_dbm() {
        assert_relative_eq!(watts_to_dbm(1.0), 30.0, epsilon = 1e-12);
        assert_relative_eq!(watts_to_dbm(7e-6), -21.549019599857432, epsilon = 1e-12);
    }

    #[test]
    fn test_dbm_watts_round_trip() {
        for dbm in [-120.0, -70.0, -21.5, 0.0, 43.0] {
            assert_relative_eq!(watts_to_dbm(dbm_to_watts(dbm)), dbm, epsilon = 1e-12);
        }
    }
}
