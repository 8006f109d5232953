//! OFDM channel capacity
//!
//! Theoretical capacity and spectral efficiency of an OFDM downlink
//! (LTE/5G NR style numerology) from subcarrier spacing, resource block
//! allocation, modulation order, and code rate.

use crate::error::CalcError;
use crate::params::{Params, ResultMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// OFDM numerology and allocation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OfdmParams {
    /// Subcarrier spacing in kHz. Must be > 0.
    pub subcarrier_spacing_khz: f64,
    /// Subcarriers per resource block.
    pub subcarriers_per_rb: u32,
    /// OFDM symbols per slot.
    pub symbols_per_slot: u32,
    /// Modulation order M (bits per symbol = log2(M)). Must be >= 2.
    pub modulation_order: u32,
    /// Allocated resource blocks. Must be > 0.
    pub resource_blocks: u32,
    /// Channel bandwidth in MHz. Must be > 0.
    pub bandwidth_mhz: f64,
    /// Channel code rate, in (0, 1].
    pub code_rate: f64,
}

impl Default for OfdmParams {
    fn default() -> Self {
        Self {
            subcarrier_spacing_khz: 0.0,
            subcarriers_per_rb: 12,
            symbols_per_slot: 14,
            modulation_order: 4,
            resource_blocks: 0,
            bandwidth_mhz: 0.0,
            code_rate: 1.0,
        }
    }
}

/// Capacity results at the resource-element, symbol, block, and
/// aggregate level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OfdmCapacity {
    /// Numerology index mu (0 at 15 kHz spacing).
    pub numerology: i32,
    /// Information bits per resource element.
    pub bits_per_re: f64,
    /// Bits per OFDM symbol across all allocated resource blocks.
    pub bits_per_symbol: f64,
    /// Bits per resource block per slot.
    pub bits_per_rb: f64,
    /// Aggregate capacity in Mbps.
    pub capacity_mbps: f64,
    /// Spectral efficiency in bps/Hz.
    pub spectral_efficiency: f64,
}

impl OfdmParams {
    /// Extract and parse OFDM parameters from a named-parameter map.
    pub fn from_map(params: &Params) -> Result<Self, CalcError> {
        let defaults = Self::default();
        Ok(Self {
            subcarrier_spacing_khz: params
                .get_f64("subcarrier_spacing", defaults.subcarrier_spacing_khz)?,
            subcarriers_per_rb: params.get_u32("subcarriers_per_rb", defaults.subcarriers_per_rb)?,
            symbols_per_slot: params.get_u32("symbols_per_slot", defaults.symbols_per_slot)?,
            modulation_order: params.get_u32("modulation_order", defaults.modulation_order)?,
            resource_blocks: params.get_u32("resource_blocks", defaults.resource_blocks)?,
            bandwidth_mhz: params.get_f64("bandwidth", defaults.bandwidth_mhz)?,
            code_rate: params.get_f64("code_rate", defaults.code_rate)?,
        })
    }

    fn validate(&self) -> Result<(), CalcError> {
        if self.subcarrier_spacing_khz <= 0.0 {
            return Err(CalcError::domain("subcarrier_spacing must be > 0"));
        }
        if self.modulation_order < 2 {
            return Err(CalcError::domain("modulation_order must be >= 2"));
        }
        if self.resource_blocks == 0 {
            return Err(CalcError::domain("resource_blocks must be > 0"));
        }
        if self.bandwidth_mhz <= 0.0 {
            return Err(CalcError::domain("bandwidth must be > 0"));
        }
        if !(self.code_rate > 0.0 && self.code_rate <= 1.0) {
            return Err(CalcError::domain("code_rate must be in (0, 1]"));
        }
        Ok(())
    }

    /// Compute capacity figures for this numerology.
    pub fn compute(&self) -> Result<OfdmCapacity, CalcError> {
        self.validate()?;

        let delta_f_hz = self.subcarrier_spacing_khz * 1e3;
        let n_sc = self.subcarriers_per_rb as f64;
        let n_sym = self.symbols_per_slot as f64;
        let n_rb = self.resource_blocks as f64;

        // mu = log2(spacing / 15 kHz); negative for sub-15 kHz spacings.
        let numerology = (delta_f_hz / 15e3).log2().round() as i32;
        let slot_duration_s = 1e-3 / 2f64.powi(numerology);

        let bits_per_re = (self.modulation_order as f64).log2() * self.code_rate;
        let total_re_per_slot = n_rb * n_sc * n_sym;
        let capacity_bps = total_re_per_slot * bits_per_re / slot_duration_s;

        Ok(OfdmCapacity {
            numerology,
            bits_per_re,
            bits_per_symbol: n_rb * n_sc * bits_per_re,
            bits_per_rb: n_sc * n_sym * bits_per_re,
            capacity_mbps: capacity_bps / 1e6,
            spectral_efficiency: capacity_bps / (self.bandwidth_mhz * 1e6),
        })
    }
}

impl OfdmCapacity {
    /// Flatten into the named-result map the request layer serializes.
    pub fn to_map(&self) -> ResultMap {
        let mut map = ResultMap::new();
        map.insert("resource_element".into(), self.bits_per_re);
        map.insert("ofdm_symbol".into(), self.bits_per_symbol);
        map.insert("resource_block".into(), self.bits_per_rb);
        map.insert("capacity".into(), self.capacity_mbps);
        map.insert("spectral_efficiency".into(), self.spectral_efficiency);
        map
    }
}

/// Map-in, map-out calling convention for the OFDM calculator.
pub fn calculate(params: &Params) -> Result<ResultMap, CalcError> {
    Ok(OfdmParams::from_map(params)?.compute()?.to_map())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lte_10mhz() -> OfdmParams {
        OfdmParams {
            subcarrier_spacing_khz: 15.0,
            resource_blocks: 50,
            bandwidth_mhz: 10.0,
            modulation_order: 4,
            code_rate: 1.0,
            ..OfdmParams::default()
        }
    }

    #[test]
    fn test_lte_baseline() {
        let cap = lte_10mhz().compute().unwrap();
        assert_eq!(cap.numerology, 0);
        assert_relative_eq!(cap.bits_per_re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(cap.bits_per_symbol, 1200.0, epsilon = 1e-12);
        assert_relative_eq!(cap.bits_per_rb, 336.0, epsilon = 1e-12);
        assert_relative_eq!(cap.capacity_mbps, 16.8, epsilon = 1e-12);
        assert_relative_eq!(cap.spectral_efficiency, 1.68, epsilon = 1e-12);
    }

    #[test]
    fn test_numerology_scales_capacity() {
        // 30 kHz spacing halves the slot, doubling capacity for the same
        // allocation.
        let mut p = lte_10mhz();
        p.subcarrier_spacing_khz = 30.0;
        let cap = p.compute().unwrap();
        assert_eq!(cap.numerology, 1);
        assert_relative_eq!(cap.capacity_mbps, 33.6, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_numerology() {
        let mut p = lte_10mhz();
        p.subcarrier_spacing_khz = 7.5;
        let cap = p.compute().unwrap();
        assert_eq!(cap.numerology, -1);
        assert_relative_eq!(cap.capacity_mbps, 8.4, epsilon = 1e-12);
    }

    #[test]
    fn test_code_rate_scales_bits_per_re() {
        let mut p = lte_10mhz();
        p.modulation_order = 64;
        p.code_rate = 0.5;
        let cap = p.compute().unwrap();
        assert_relative_eq!(cap.bits_per_re, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_domain_errors() {
        let mut p = lte_10mhz();
        p.subcarrier_spacing_khz = 0.0;
        assert!(p.compute().is_err());

        let mut p = lte_10mhz();
        p.modulation_order = 1;
        assert!(p.compute().is_err());

        let mut p = lte_10mhz();
        p.resource_blocks = 0;
        assert!(p.compute().is_err());

        let mut p = lte_10mhz();
        p.bandwidth_mhz = 0.0;
        assert!(p.compute().is_err());

        let mut p = lte_10mhz();
        p.code_rate = 0.0;
        assert!(p.compute().is_err());
    }
}
