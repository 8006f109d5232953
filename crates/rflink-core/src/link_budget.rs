//! Link budget and margin
//!
//! Received power from the dB power budget, required Eb/N0 from the
//! modulation's BER curve, and the resulting link margin against thermal
//! noise at the reference temperature.

use crate::constants::{BOLTZMANN, T0_KELVIN};
use crate::error::CalcError;
use crate::math::conversions::{db_to_linear, dbm_to_watts, linear_to_db};
use crate::params::{Params, ResultMap};
use crate::tables::Modulation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Link budget input parameters. All terms default to 0 except the
/// modulation scheme and target BER.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkBudgetParams {
    /// Transmit power in dBm.
    pub tx_power_dbm: f64,
    /// Transmit antenna gain in dBi.
    pub tx_gain_dbi: f64,
    /// Receive antenna gain in dBi.
    pub rx_gain_dbi: f64,
    /// Path loss in dB.
    pub path_loss_db: f64,
    /// Other losses (cables, implementation) in dB.
    pub other_losses_db: f64,
    /// Modulation scheme selecting the Eb/N0 curve.
    pub modulation: Modulation,
    /// Target bit-error-rate.
    pub ber: f64,
    /// Receiver noise figure in dB.
    pub noise_figure_db: f64,
    /// Data rate in kbps.
    pub data_rate_kbps: f64,
}

impl Default for LinkBudgetParams {
    fn default() -> Self {
        Self {
            tx_power_dbm: 0.0,
            tx_gain_dbi: 0.0,
            rx_gain_dbi: 0.0,
            path_loss_db: 0.0,
            other_losses_db: 0.0,
            modulation: Modulation::BpskQpsk,
            ber: 1e-3,
            noise_figure_db: 0.0,
            data_rate_kbps: 0.0,
        }
    }
}

/// Link budget results.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkBudget {
    /// Received power in dBm.
    pub received_power_dbm: f64,
    /// Required Eb/N0 in dB at the target BER.
    pub eb_n0_required_db: f64,
    /// Link margin in dB; `NEG_INFINITY` when no positive margin exists.
    pub link_margin_db: f64,
}

impl LinkBudgetParams {
    /// Extract and parse link budget parameters from a named-parameter
    /// map. An unrecognized modulation name silently falls back to the
    /// BPSK/QPSK curve.
    pub fn from_map(params: &Params) -> Result<Self, CalcError> {
        let defaults = Self::default();
        let modulation = Modulation::from_name(params.get_str("modulation", "BPSK/QPSK"))
            .unwrap_or_default();
        Ok(Self {
            tx_power_dbm: params.get_f64("tx_power", defaults.tx_power_dbm)?,
            tx_gain_dbi: params.get_f64("tx_gain", defaults.tx_gain_dbi)?,
            rx_gain_dbi: params.get_f64("rx_gain", defaults.rx_gain_dbi)?,
            path_loss_db: params.get_f64("path_loss", defaults.path_loss_db)?,
            other_losses_db: params.get_f64("other_losses", defaults.other_losses_db)?,
            modulation,
            ber: params.get_f64("ber", defaults.ber)?,
            noise_figure_db: params.get_f64("noise_figure", defaults.noise_figure_db)?,
            data_rate_kbps: params.get_f64("data_rate", defaults.data_rate_kbps)?,
        })
    }

    /// Compute received power and link margin.
    ///
    /// There are no domain checks here: a zero data rate (or any other
    /// non-positive noise denominator) is a degenerate but expressible
    /// budget and yields the negative-infinity margin sentinel rather
    /// than an error.
    pub fn compute(&self) -> LinkBudget {
        let received_power_dbm = self.tx_power_dbm + self.tx_gain_dbi + self.rx_gain_dbi
            - self.path_loss_db
            - self.other_losses_db;

        let eb_n0_required_db = self.modulation.required_ebn0_db(self.ber);

        let noise_factor = db_to_linear(self.noise_figure_db);
        let eb_n0_linear = db_to_linear(eb_n0_required_db);
        let data_rate_bps = self.data_rate_kbps * 1e3;
        let received_watts = dbm_to_watts(received_power_dbm);

        let denominator =
            BOLTZMANN * T0_KELVIN * noise_factor * data_rate_bps * eb_n0_linear;
        let margin_linear = if denominator > 0.0 {
            received_watts / denominator
        } else {
            0.0
        };
        let link_margin_db = if margin_linear > 0.0 {
            linear_to_db(margin_linear)
        } else {
            f64::NEG_INFINITY
        };

        LinkBudget {
            received_power_dbm,
            eb_n0_required_db,
            link_margin_db,
        }
    }
}

impl LinkBudget {
    /// Flatten into the named-result map the request layer serializes.
    pub fn to_map(&self) -> ResultMap {
        let mut map = ResultMap::new();
        map.insert("received_power_dBm".into(), self.received_power_dbm);
        map.insert("eb_n0_required_dB".into(), self.eb_n0_required_db);
        map.insert("link_margin_dB".into(), self.link_margin_db);
        map
    }
}

/// Map-in, map-out calling convention for the link budget calculator.
pub fn calculate(params: &Params) -> Result<ResultMap, CalcError> {
    Ok(LinkBudgetParams::from_map(params)?.compute().to_map())
}
