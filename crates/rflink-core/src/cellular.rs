//! Cellular network dimensioning
//!
//! From a log-distance propagation model, an SIR constraint, and offered
//! subscriber traffic: maximum cell radius, hexagonal cell count over the
//! service area, frequency-reuse cluster size, and the carriers needed to
//! meet the requested grade of service.

use crate::constants::{FALLBACK_CLUSTER_SIZE, REF_DISTANCE_M, VALID_CLUSTER_SIZES};
use crate::error::CalcError;
use crate::math::conversions::{db_to_linear, watts_to_dbm};
use crate::params::{Params, ResultMap};
use crate::tables::GradeOfService;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cellular design input parameters, defaulting to a worked GSM-style
/// planning scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellularParams {
    /// Received power at the 10 m reference distance, in dBm.
    pub p_ref_dbm: f64,
    /// Path loss exponent of the log-distance model. Must be > 0.
    pub path_loss_exponent: f64,
    /// Receiver sensitivity in watts. Must be > 0.
    pub receiver_sensitivity_w: f64,
    /// Minimum co-channel signal-to-interference ratio in dB.
    pub sir_db: f64,
    /// Service area in square meters. Must be > 0.
    pub city_area_m2: f64,
    /// Subscriber count.
    pub subscribers: u32,
    /// Average calls per subscriber per day.
    pub calls_per_day: f64,
    /// Average call duration in minutes.
    pub call_duration_min: f64,
    /// Requested grade of service (blocking probability).
    pub gos: GradeOfService,
    /// Traffic channels per carrier. Must be >= 1.
    pub timeslots_per_carrier: u32,
}

impl Default for CellularParams {
    fn default() -> Self {
        Self {
            p_ref_dbm: -22.0,
            path_loss_exponent: 3.0,
            receiver_sensitivity_w: 7e-6,
            sir_db: 13.0,
            city_area_m2: 4e6,
            subscribers: 80_000,
            calls_per_day: 8.0,
            call_duration_min: 3.0,
            gos: GradeOfService::P02,
            timeslots_per_carrier: 8,
        }
    }
}

/// Cellular design results.
///
/// `total_carriers` is dimensioned at the requested grade of service;
/// `total_carriers_p05` is always recomputed at 5% blocking as a
/// comparison figure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellularDesign {
    /// Maximum cell radius in meters.
    pub max_distance_m: f64,
    /// Hexagonal cell area in square meters.
    pub cell_area_m2: f64,
    /// Cells covering the service area.
    pub num_cells: u64,
    /// Total offered traffic in Erlangs.
    pub total_traffic_erlangs: f64,
    /// Offered traffic per cell in Erlangs.
    pub traffic_per_cell_erlangs: f64,
    /// Frequency-reuse cluster size, from the valid hexagonal set.
    pub cluster_size: u32,
    /// Total carriers at the requested grade of service.
    pub total_carriers: u64,
    /// Total carriers at 5% blocking, for comparison.
    pub total_carriers_p05: u64,
}

impl CellularParams {
    /// Extract and parse cellular parameters from a named-parameter map.
    ///
    /// The grade of service must match one of the tabulated blocking
    /// probabilities exactly.
    pub fn from_map(params: &Params) -> Result<Self, CalcError> {
        let defaults = Self::default();
        let gos_p = params.get_f64("GoS", defaults.gos.probability())?;
        let gos = GradeOfService::from_probability(gos_p)
            .ok_or(CalcError::UnsupportedGos(gos_p))?;
        Ok(Self {
            p_ref_dbm: params.get_f64("P_ref", defaults.p_ref_dbm)?,
            path_loss_exponent: params
                .get_f64("path_loss_exponent", defaults.path_loss_exponent)?,
            receiver_sensitivity_w: params
                .get_f64("receiver_sensitivity", defaults.receiver_sensitivity_w)?,
            sir_db: params.get_f64("SIR_dB", defaults.sir_db)?,
            city_area_m2: params.get_f64("city_area", defaults.city_area_m2)?,
            subscribers: params.get_u32("subscribers", defaults.subscribers)?,
            calls_per_day: params.get_f64("calls_per_day", defaults.calls_per_day)?,
            call_duration_min: params.get_f64("call_duration", defaults.call_duration_min)?,
            gos,
            timeslots_per_carrier: params
                .get_u32("timeslots_per_carrier", defaults.timeslots_per_carrier)?,
        })
    }

    fn validate(&self) -> Result<(), CalcError> {
        if self.receiver_sensitivity_w <= 0.0 {
            return Err(CalcError::domain("receiver_sensitivity must be > 0"));
        }
        if self.path_loss_exponent <= 0.0 {
            return Err(CalcError::domain("path_loss_exponent must be > 0"));
        }
        if self.city_area_m2 <= 0.0 {
            return Err(CalcError::domain("city_area must be > 0"));
        }
        if self.timeslots_per_carrier == 0 {
            return Err(CalcError::domain("timeslots_per_carrier must be >= 1"));
        }
        Ok(())
    }

    /// Run the dimensioning chain: coverage, traffic, reuse, carriers.
    pub fn compute(&self) -> Result<CellularDesign, CalcError> {
        self.validate()?;

        // Coverage: the cell edge is where the log-distance model hits
        // receiver sensitivity.
        let sensitivity_dbm = watts_to_dbm(self.receiver_sensitivity_w);
        let path_loss_budget_db = self.p_ref_dbm - sensitivity_dbm;
        let max_distance_m = REF_DISTANCE_M
            * 10f64.powf(path_loss_budget_db / (10.0 * self.path_loss_exponent));

        let cell_area_m2 = 1.5 * 3f64.sqrt() * max_distance_m.powi(2);
        let num_cells = (self.city_area_m2 / cell_area_m2).ceil() as u64;

        // Offered traffic.
        let traffic_per_subscriber =
            (self.calls_per_day / 24.0) * (self.call_duration_min / 60.0);
        let total_traffic_erlangs = self.subscribers as f64 * traffic_per_subscriber;
        let traffic_per_cell_erlangs = total_traffic_erlangs / num_cells as f64;

        let cluster_size = required_cluster_size(self.sir_db, self.path_loss_exponent);

        let total_carriers = self.total_carriers_at(self.gos, traffic_per_cell_erlangs, num_cells);
        let total_carriers_p05 =
            self.total_carriers_at(GradeOfService::P05, traffic_per_cell_erlangs, num_cells);

        Ok(CellularDesign {
            max_distance_m,
            cell_area_m2,
            num_cells,
            total_traffic_erlangs,
            traffic_per_cell_erlangs,
            cluster_size,
            total_carriers,
            total_carriers_p05,
        })
    }

    fn total_carriers_at(&self, gos: GradeOfService, traffic_per_cell: f64, num_cells: u64) -> u64 {
        let channels = gos.channels_for(traffic_per_cell);
        let carriers_per_cell = channels.div_ceil(self.timeslots_per_carrier);
        carriers_per_cell as u64 * num_cells
    }
}

/// Smallest geometrically valid cluster size meeting the SIR constraint.
///
/// With six equidistant first-tier interferers, SIR = (D/R)^n / 6, so the
/// reuse ratio is D/R = (6*SIR)^(1/n) and the raw cluster size is
/// (D/R)^2 / 3, rounded up. When even K = 19 cannot meet the constraint
/// the established rule falls back to a 7-cell cluster.
fn required_cluster_size(sir_db: f64, path_loss_exponent: f64) -> u32 {
    let sir_linear = db_to_linear(sir_db);
    let d_over_r = (sir_linear * 6.0).powf(1.0 / path_loss_exponent);
    let k_min = (d_over_r.powi(2) / 3.0).ceil();

    VALID_CLUSTER_SIZES
        .iter()
        .copied()
        .find(|&k| k as f64 >= k_min)
        .unwrap_or(FALLBACK_CLUSTER_SIZE)
}

impl CellularDesign {
    /// Flatten into the named-result map the request layer serializes.
    ///
    /// Key names are fixed by the external contract; the first carriers
    /// key is labeled for 2% blocking even though it reflects the
    /// requested grade.
    pub fn to_map(&self) -> ResultMap {
        let mut map = ResultMap::new();
        map.insert("max_distance_m".into(), self.max_distance_m);
        map.insert("cell_area_m2".into(), self.cell_area_m2);
        map.insert("num_cells".into(), self.num_cells as f64);
        map.insert("total_traffic_erlangs".into(), self.total_traffic_erlangs);
        map.insert(
            "traffic_per_cell_erlangs".into(),
            self.traffic_per_cell_erlangs,
        );
        map.insert("cluster_size".into(), self.cluster_size as f64);
        map.insert("total_carriers_GoS_0.02".into(), self.total_carriers as f64);
        map.insert(
            "total_carriers_GoS_0.05".into(),
            self.total_carriers_p05 as f64,
        );
        map
    }
}

/// Map-in, map-out calling convention for the cellular calculator.
pub fn calculate(params: &Params) -> Result<ResultMap, CalcError> {
    Ok(CellularParams::from_map(params)?.compute()?.to_map())
}
