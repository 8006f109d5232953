//! Erlang-B traffic dimensioning tables
//!
//! For each supported grade of service, the minimum number of traffic
//! channels carrying a given offered load at that blocking probability.
//! Thresholds are stored in ascending order of offered traffic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Target blocking probability for traffic dimensioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GradeOfService {
    /// 2% blocking probability.
    #[default]
    P02,
    /// 5% blocking probability.
    P05,
}

/// One table: (offered traffic threshold in Erlangs, channel count).
type Table = [(f64, u32); 10];

const GOS_02: Table = [
    (2.3, 6),
    (3.6, 8),
    (4.3, 9),
    (5.1, 10),
    (5.8, 11),
    (6.6, 12),
    (7.4, 13),
    (8.1, 14),
    (8.9, 15),
    (9.7, 16),
];

const GOS_05: Table = [
    (3.0, 6),
    (4.5, 8),
    (5.4, 9),
    (6.2, 10),
    (7.1, 11),
    (8.0, 12),
    (9.0, 13),
    (9.8, 14),
    (10.6, 15),
    (11.5, 16),
];

impl GradeOfService {
    /// Match a requested blocking probability to a tabulated grade.
    pub fn from_probability(p: f64) -> Option<Self> {
        if p == 0.02 {
            Some(GradeOfService::P02)
        } else if p == 0.05 {
            Some(GradeOfService::P05)
        } else {
            None
        }
    }

    /// Blocking probability of this grade.
    pub fn probability(&self) -> f64 {
        match self {
            GradeOfService::P02 => 0.02,
            GradeOfService::P05 => 0.05,
        }
    }

    /// The grade's (traffic, channels) thresholds in ascending order.
    pub fn table(&self) -> &'static [(f64, u32)] {
        match self {
            GradeOfService::P02 => &GOS_02,
            GradeOfService::P05 => &GOS_05,
        }
    }

    /// Minimum channels carrying `traffic` Erlangs at this grade.
    ///
    /// Smallest tabulated threshold at or above the offered load wins.
    /// Loads beyond the table fall back to the rough analytic estimate
    /// ceil(traffic) + 1, which is not table-derived.
    pub fn channels_for(&self, traffic: f64) -> u32 {
        for &(threshold, channels) in self.table() {
            if traffic <= threshold {
                return channels;
            }
        }
        traffic.ceil() as u32 + 1
    }
}
