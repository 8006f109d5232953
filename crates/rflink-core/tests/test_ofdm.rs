//! OFDM capacity tests
//!
//! Checks the LTE 10 MHz baseline numerology and the calculator's
//! map-level defaults and domain errors.

use approx::assert_relative_eq;
use rflink_core::ofdm;
use rflink_core::params::Params;

fn lte_10mhz() -> Params {
    Params::from([
        ("subcarrier_spacing", "15"),
        ("resource_blocks", "50"),
        ("bandwidth", "10"),
        ("modulation_order", "4"),
        ("code_rate", "1"),
    ])
}

#[test]
fn test_lte_baseline_capacity() {
    let results = ofdm::calculate(&lte_10mhz()).unwrap();

    // mu = 0 at 15 kHz spacing; QPSK at rate 1 is 2 bits per RE.
    assert_relative_eq!(results["resource_element"], 2.0, epsilon = 1e-12);
    assert_relative_eq!(results["ofdm_symbol"], 1200.0, epsilon = 1e-12);
    assert_relative_eq!(results["resource_block"], 336.0, epsilon = 1e-12);
    assert_relative_eq!(results["capacity"], 16.8, epsilon = 1e-12);
    assert_relative_eq!(results["spectral_efficiency"], 1.68, epsilon = 1e-12);
}

#[test]
fn test_grid_defaults_apply() {
    // subcarriers_per_rb and symbols_per_slot default to 12 and 14.
    let params = Params::from([
        ("subcarrier_spacing", "30"),
        ("resource_blocks", "100"),
        ("bandwidth", "40"),
    ]);
    let results = ofdm::calculate(&params).unwrap();

    // Default modulation order 4 at rate 1 is 2 bits per RE.
    assert_relative_eq!(results["resource_element"], 2.0, epsilon = 1e-12);
    // 100 RB * 12 SC * 14 sym * 2 bits / 0.5 ms
    assert_relative_eq!(results["capacity"], 67.2, epsilon = 1e-12);
}

#[test]
fn test_domain_violations() {
    let cases: &[(&str, &str)] = &[
        ("subcarrier_spacing", "0"),
        ("modulation_order", "1"),
        ("resource_blocks", "0"),
        ("bandwidth", "-10"),
        ("code_rate", "2"),
    ];
    for &(key, bad) in cases {
        let mut params = lte_10mhz();
        params.insert(key, bad);
        assert!(ofdm::calculate(&params).is_err(), "{key}={bad}");
    }
}

#[test]
fn test_idempotent() {
    let a = ofdm::calculate(&lte_10mhz()).unwrap();
    let b = ofdm::calculate(&lte_10mhz()).unwrap();
    assert_eq!(a, b);
}
