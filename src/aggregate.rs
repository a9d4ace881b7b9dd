//! Per-order aggregation and the higher-order synergy ratio.
//!
//! `f_k` is the total irreducible information carried by subsets of exactly k
//! fragments. The running ratio
//!
//! ```text
//! R_{≥3}(k) = (Σ_{3 ≤ j ≤ k} f_j) / I(bulk : all fragments)
//! ```
//!
//! measures how much of the total information only becomes visible through
//! interactions of three or more fragments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::table::SubsetTable;

/// Subsets of this order and above count as higher-order.
pub const SYNERGY_MIN_ORDER: usize = 3;

/// Sum of f-values per subset size.
pub type OrderAggregate = BTreeMap<usize, f64>;

/// One point of the running synergy ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynergyPoint {
    pub order: usize,
    pub ratio: f64,
}

/// Running ratios, ordered by ascending order.
pub type SynergyRatioSeries = Vec<SynergyPoint>;

/// Sums table values grouped by subset size.
///
/// Only sizes that occur in the table appear as keys.
pub fn aggregate_by_order(f_values: &SubsetTable) -> OrderAggregate {
    let mut fk = OrderAggregate::new();
    for entry in f_values.iter() {
        *fk.entry(entry.subset.len()).or_insert(0.0) += entry.value;
    }
    fk
}

/// Largest table value per subset size.
///
/// Used for curves of information against fragment size, where one
/// representative value per size is wanted.
pub fn max_by_order(table: &SubsetTable) -> OrderAggregate {
    let mut out = OrderAggregate::new();
    for entry in table.iter() {
        out.entry(entry.subset.len())
            .and_modify(|v: &mut f64| *v = v.max(entry.value))
            .or_insert(entry.value);
    }
    out
}

/// Running higher-order synergy ratio.
///
/// Visits orders in ascending order. Each order emits the cumulative sum of
/// `f_j` for `3 ≤ j ≤ k`, divided by `total_information`. Orders 1 and 2 are
/// emitted but never accrue. A zero `total_information` yields exactly 0.0
/// for every point.
pub fn synergy_ratio(fk: &OrderAggregate, total_information: f64) -> SynergyRatioSeries {
    let mut cumulative = 0.0;
    fk.iter()
        .map(|(&order, &value)| {
            if order >= SYNERGY_MIN_ORDER {
                cumulative += value;
            }
            let ratio = if total_information == 0.0 {
                0.0
            } else {
                cumulative / total_information
            };
            SynergyPoint { order, ratio }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn fk(pairs: &[(usize, f64)]) -> OrderAggregate {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_aggregate_by_order() {
        let table = SubsetTable::from_fn(&[1, 2, 3], |s| s.len() as f64);
        let agg = aggregate_by_order(&table);
        // 3 singletons, 3 pairs, 1 triple.
        assert_eq!(agg, fk(&[(1, 3.0), (2, 6.0), (3, 3.0)]));
    }

    #[test]
    fn test_aggregate_empty() {
        let table = SubsetTable::from_fn(&[], |_| 1.0);
        assert!(aggregate_by_order(&table).is_empty());
        assert!(max_by_order(&table).is_empty());
    }

    #[test]
    fn test_max_by_order() {
        let table = SubsetTable::from_fn(&[1, 2, 3], |s| s.members()[0] as f64 - 5.0);
        let max = max_by_order(&table);
        assert_eq!(max, fk(&[(1, -2.0), (2, -3.0), (3, -4.0)]));
    }

    #[test]
    fn test_ratio_low_orders_do_not_accrue() {
        let series = synergy_ratio(&fk(&[(1, 1.0), (2, 1.0), (3, 0.5), (4, 0.5)]), 2.0);
        assert_eq!(
            series,
            vec![
                SynergyPoint { order: 1, ratio: 0.0 },
                SynergyPoint { order: 2, ratio: 0.0 },
                SynergyPoint { order: 3, ratio: 0.25 },
                SynergyPoint { order: 4, ratio: 0.5 },
            ]
        );
    }

    #[test]
    fn test_ratio_zero_total() {
        let series = synergy_ratio(&fk(&[(1, 3.0), (3, -7.0), (5, 2.0)]), 0.0);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|p| p.ratio == 0.0));
    }

    #[test]
    fn test_ratio_skipped_orders() {
        // Orders that never occur are not emitted.
        let series = synergy_ratio(&fk(&[(1, 1.0), (4, 1.0)]), 4.0);
        let orders: Vec<_> = series.iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 4]);
        assert_eq!(series[1].ratio, 0.25);
    }

    #[test]
    fn test_ratio_empty() {
        assert!(synergy_ratio(&OrderAggregate::new(), 0.0).is_empty());
    }
}
