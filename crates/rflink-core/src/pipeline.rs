//! Digital transmission pipeline data rates
//!
//! Models the bit rate through a six-stage transmission chain: sampler,
//! quantizer, source encoder, channel encoder, interleaver, and burst
//! formatter. Compression shrinks the rate, channel coding and framing
//! overhead expand it; the interleaver reorders bits without changing
//! the rate.

use crate::error::CalcError;
use crate::params::{Params, ResultMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pipeline input parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineParams {
    /// Sampling rate in MHz. Must be > 0.
    pub sampling_rate_mhz: f64,
    /// Bits per sample. Must be > 0.
    pub bits_per_sample: f64,
    /// Source compression ratio. Must be > 0.
    pub compression_ratio: f64,
    /// Channel code rate, in (0, 1].
    pub code_rate: f64,
    /// Burst framing overhead in percent.
    pub overhead_pct: f64,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            sampling_rate_mhz: 0.0,
            bits_per_sample: 0.0,
            compression_ratio: 1.0,
            code_rate: 1.0,
            overhead_pct: 0.0,
        }
    }
}

/// Bit rate after each pipeline stage, in Mbps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineRates {
    pub sampler: f64,
    pub quantizer: f64,
    pub source_encoder: f64,
    pub channel_encoder: f64,
    pub interleaver: f64,
    pub burst_formatter: f64,
}

impl PipelineParams {
    /// Extract and parse pipeline parameters from a named-parameter map.
    pub fn from_map(params: &Params) -> Result<Self, CalcError> {
        let defaults = Self::default();
        Ok(Self {
            sampling_rate_mhz: params.get_f64("sampling_rate", defaults.sampling_rate_mhz)?,
            bits_per_sample: params.get_f64("bits_per_sample", defaults.bits_per_sample)?,
            compression_ratio: params.get_f64("compression_ratio", defaults.compression_ratio)?,
            code_rate: params.get_f64("code_rate", defaults.code_rate)?,
            overhead_pct: params.get_f64("overhead", defaults.overhead_pct)?,
        })
    }

    fn validate(&self) -> Result<(), CalcError> {
        if self.sampling_rate_mhz <= 0.0 || self.bits_per_sample <= 0.0 {
            return Err(CalcError::domain(
                "sampling_rate and bits_per_sample must be > 0",
            ));
        }
        if self.compression_ratio <= 0.0 {
            return Err(CalcError::domain("compression_ratio must be > 0"));
        }
        if !(self.code_rate > 0.0 && self.code_rate <= 1.0) {
            return Err(CalcError::domain("code_rate must be in (0, 1]"));
        }
        Ok(())
    }

    /// Derive the six stage rates.
    pub fn compute(&self) -> Result<PipelineRates, CalcError> {
        self.validate()?;

        let fs_hz = self.sampling_rate_mhz * 1e6;
        let overhead = self.overhead_pct / 100.0;

        // Sampler and quantizer carry the raw digitized bit rate.
        let quantizer_bps = fs_hz * self.bits_per_sample;
        let source_encoded_bps = quantizer_bps / self.compression_ratio;
        let channel_encoded_bps = source_encoded_bps / self.code_rate;
        let burst_formatted_bps = channel_encoded_bps * (1.0 + overhead);

        let channel_encoder = channel_encoded_bps / 1e6;
        Ok(PipelineRates {
            sampler: fs_hz * self.bits_per_sample / 1e6,
            quantizer: quantizer_bps / 1e6,
            source_encoder: source_encoded_bps / 1e6,
            channel_encoder,
            // Interleaving reorders bits without changing the rate.
            interleaver: channel_encoder,
            burst_formatter: burst_formatted_bps / 1e6,
        })
    }
}

impl PipelineRates {
    /// Flatten into the named-result map the request layer serializes.
    pub fn to_map(&self) -> ResultMap {
        let mut map = ResultMap::new();
        map.insert("sampler".into(), self.sampler);
        map.insert("quantizer".into(), self.quantizer);
        map.insert("source_encoder".into(), self.source_encoder);
        map.insert("channel_encoder".into(), self.channel_encoder);
        map.insert("interleaver".into(), self.interleaver);
        map.insert("burst_formatter".into(), self.burst_formatter);
        map
    }
}

/// Map-in, map-out calling convention for the pipeline calculator.
pub fn calculate(params: &Params) -> Result<ResultMap, CalcError> {
    Ok(PipelineParams::from_map(params)?.compute()?.to_map())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> PipelineParams {
        PipelineParams {
            sampling_rate_mhz: 8.0,
            bits_per_sample: 8.0,
            compression_ratio: 2.0,
            code_rate: 0.5,
            overhead_pct: 20.0,
        }
    }

    #[test]
    fn test_stage_rates() {
        let rates = base().compute().unwrap();
        assert_relative_eq!(rates.sampler, 64.0, epsilon = 1e-12);
        assert_relative_eq!(rates.quantizer, 64.0, epsilon = 1e-12);
        assert_relative_eq!(rates.source_encoder, 32.0, epsilon = 1e-12);
        assert_relative_eq!(rates.channel_encoder, 64.0, epsilon = 1e-12);
        assert_relative_eq!(rates.burst_formatter, 76.8, epsilon = 1e-12);
    }

    #[test]
    fn test_interleaver_is_pass_through() {
        let rates = base().compute().unwrap();
        assert_eq!(rates.interleaver, rates.channel_encoder);
    }

    #[test]
    fn test_overhead_never_shrinks_rate() {
        for overhead in [0.0, 5.0, 20.0, 150.0] {
            let mut p = base();
            p.overhead_pct = overhead;
            let rates = p.compute().unwrap();
            assert!(rates.burst_formatter >= rates.channel_encoder);
        }
    }

    #[test]
    fn test_domain_errors() {
        let mut p = base();
        p.sampling_rate_mhz = 0.0;
        assert!(matches!(p.compute(), Err(CalcError::Domain(_))));

        let mut p = base();
        p.bits_per_sample = -1.0;
        assert!(p.compute().is_err());

        let mut p = base();
        p.code_rate = 1.5;
        assert!(p.compute().is_err());

        let mut p = base();
        p.compression_ratio = 0.0;
        assert!(p.compute().is_err());
    }

    #[test]
    fn test_defaults_from_empty_map_fail_validation() {
        // Defaults leave sampling_rate at 0, which is out of domain.
        let p = PipelineParams::from_map(&Params::new()).unwrap();
        assert!(p.compute().is_err());
    }
}
