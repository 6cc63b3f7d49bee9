//! FILENAME: core/engine/src/aggregate.rs
//! PURPOSE: Grouped sums and lookups over an `OrderTable`.
//! CONTEXT: Three pure queries feed the sales report:
//! - `total_by_region`: sum of Total per Region, ascending by Region
//! - `filter_by_item`: orders for one item, in original order
//! - `top_rep`: the Rep with the highest summed Total
//!
//! Grouping keys are compared by exact string equality and kept in a
//! `BTreeMap`, so every grouped result comes out in ascending key order.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::error::EngineError;
use crate::order::{OrderRow, OrderTable};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// One row of the region summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTotal {
    pub region: String,
    pub total: f64,
}

/// Total sales per region, one row per distinct region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub rows: Vec<RegionTotal>,
}

impl RegionSummary {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, region: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.region == region)
            .map(|r| r.total)
    }
}

// ============================================================================
// GROUPING
// ============================================================================

/// Sums `total` per key. Accumulation within a group follows row order.
/// Rows with a blank key belong to no group.
fn sum_by<'a, F>(table: &'a OrderTable, key: F) -> BTreeMap<&'a str, f64>
where
    F: Fn(&'a OrderRow) -> &'a str,
{
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for row in table {
        let group = key(row);
        if group.is_empty() {
            continue;
        }
        *groups.entry(group).or_insert(0.0) += row.total;
    }
    groups
}

// ============================================================================
// QUERIES
// ============================================================================

/// Total sales grouped by region, ascending by region.
pub fn total_by_region(table: &OrderTable) -> RegionSummary {
    let rows = sum_by(table, |row| row.region.as_str())
        .into_iter()
        .map(|(region, total)| RegionTotal {
            region: region.to_string(),
            total,
        })
        .collect();

    RegionSummary { rows }
}

/// Orders whose item equals `item` exactly, in their original order.
pub fn filter_by_item(table: &OrderTable, item: &str) -> OrderTable {
    table.iter().filter(|row| row.item == item).cloned().collect()
}

/// Total sales per rep, ascending by rep.
pub fn totals_by_rep(table: &OrderTable) -> Vec<(String, f64)> {
    sum_by(table, |row| row.rep.as_str())
        .into_iter()
        .map(|(rep, total)| (rep.to_string(), total))
        .collect()
}

/// The rep with the highest total sales.
///
/// Orders with a blank rep are never candidates, so a table holding only
/// such orders fails like an empty one.
///
/// Ties go to the rep that sorts first: groups are visited in ascending key
/// order and only a strictly greater sum replaces the current best.
pub fn top_rep(table: &OrderTable) -> Result<String, EngineError> {
    let mut best: Option<(&str, f64)> = None;

    for (rep, total) in sum_by(table, |row| row.rep.as_str()) {
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((rep, total)),
        }
    }

    best.map(|(rep, _)| rep.to_string())
        .ok_or(EngineError::EmptyTable)
}
