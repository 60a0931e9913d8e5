//! Data types produced by the aggregation pipeline.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::Route;

/// Minimum flight time per carrier, in minutes.
///
/// Keys iterate alphabetically, which fixes the report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarrierDurations {
    minimums: BTreeMap<String, i64>,
}

impl CarrierDurations {
    /// Records one observed duration, keeping the smaller of old and new.
    pub fn record(&mut self, carrier: &str, minutes: i64) {
        match self.minimums.get_mut(carrier) {
            Some(current) => *current = (*current).min(minutes),
            None => {
                self.minimums.insert(carrier.to_string(), minutes);
            }
        }
    }

    /// Combines two partial folds. Order of merging does not matter.
    pub fn merge(mut self, other: CarrierDurations) -> Self {
        for (carrier, minutes) in other.minimums {
            self.record(&carrier, minutes);
        }
        self
    }

    pub fn get(&self, carrier: &str) -> Option<i64> {
        self.minimums.get(carrier).copied()
    }

    pub fn len(&self) -> usize {
        self.minimums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.minimums.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Mean/median summary of ticket prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    pub mean: f64,
    pub median: f64,
    pub difference: f64,
}

/// One carrier line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierMinimum {
    pub carrier: String,
    pub minutes: i64,
}

/// Complete result of one run. `prices` is `None` when no ticket matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub origin: String,
    pub destination: String,
    pub carriers: Vec<CarrierMinimum>,
    pub prices: Option<PriceSummary>,
}

impl Report {
    pub fn new(route: &Route, durations: &CarrierDurations, prices: Option<PriceSummary>) -> Self {
        Report {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            carriers: durations
                .iter()
                .map(|(carrier, minutes)| CarrierMinimum {
                    carrier: carrier.to_string(),
                    minutes,
                })
                .collect(),
            prices,
        }
    }
}
