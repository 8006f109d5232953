//! Scenario dispatch
//!
//! The request layer routes each submission by scenario name; this is
//! the single entry point covering all four calculators.

use crate::error::CalcError;
use crate::params::{Params, ResultMap};
use crate::{cellular, link_budget, ofdm, pipeline};

/// The four calculation scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Transmission pipeline data rates.
    Wireless,
    /// OFDM capacity and spectral efficiency.
    Ofdm,
    /// Link budget and margin.
    LinkBudget,
    /// Cellular network dimensioning.
    Cellular,
}

impl Scenario {
    /// Parse a route-style scenario name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "wireless" => Some(Scenario::Wireless),
            "ofdm" => Some(Scenario::Ofdm),
            "link_budget" => Some(Scenario::LinkBudget),
            "cellular" => Some(Scenario::Cellular),
            _ => None,
        }
    }

    /// Route-style name of this scenario.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Wireless => "wireless",
            Scenario::Ofdm => "ofdm",
            Scenario::LinkBudget => "link_budget",
            Scenario::Cellular => "cellular",
        }
    }

    /// Run the scenario's calculator on a named-parameter map.
    pub fn compute(&self, params: &Params) -> Result<ResultMap, CalcError> {
        match self {
            Scenario::Wireless => pipeline::calculate(params),
            Scenario::Ofdm => ofdm::calculate(params),
            Scenario::LinkBudget => link_budget::calculate(params),
            Scenario::Cellular => cellular::calculate(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        for s in [
            Scenario::Wireless,
            Scenario::Ofdm,
            Scenario::LinkBudget,
            Scenario::Cellular,
        ] {
            assert_eq!(Scenario::from_name(s.name()), Some(s));
        }
        assert_eq!(Scenario::from_name("beamforming"), None);
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let params = Params::from([
            ("sampling_rate", "8"),
            ("bits_per_sample", "8"),
            ("compression_ratio", "2"),
            ("code_rate", "0.5"),
            ("overhead", "20"),
        ]);
        let via_scenario = Scenario::Wireless.compute(&params).unwrap();
        let direct = crate::pipeline::calculate(&params).unwrap();
        assert_eq!(via_scenario, direct);
    }
}
