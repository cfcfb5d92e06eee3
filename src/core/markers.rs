//! Per-column marker lookup.
//!
//! Markers are grouped once per render pass so each materialized cell finds
//! its markers without scanning the whole list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::layout::ColumnLayout;
use super::scale::ScaleConfig;
use crate::state::Marker;

/// How markers are assigned to ruler columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerBucketing {
    /// `floor(timestamp)` must equal the column's item value exactly.
    /// Columns with fractional item values never hold markers.
    #[default]
    Exact,
    /// The marker goes to the column whose time step contains its timestamp.
    MinorTick,
}

/// Bucket key of a marker under [`MarkerBucketing::Exact`].
pub fn bucket_of(marker: &Marker) -> i64 {
    marker.timestamp.floor() as i64
}

const TICK_EPSILON: f64 = 1e-9;

/// Column of `timestamp` under [`MarkerBucketing::MinorTick`].
///
/// Column c covers `(item(c - 1), item(c)]`, so a timestamp on a tick belongs
/// to the column that tick closes. Division noise within a few ulps of a tick
/// snaps to that tick instead of spilling into the next column.
fn minor_tick_column(timestamp: f64, config: &ScaleConfig) -> i64 {
    let per_scale = config.scale_split_count.max(1) as f64;
    let units = timestamp / config.scale * per_scale;
    let tick = units.round();
    if (units - tick).abs() <= TICK_EPSILON * tick.abs().max(1.0) {
        tick as i64
    } else {
        units.ceil() as i64
    }
}

#[derive(Debug)]
pub struct MarkerIndex<'a> {
    bucketing: MarkerBucketing,
    buckets: HashMap<i64, Vec<&'a Marker>>,
}

impl<'a> MarkerIndex<'a> {
    pub fn new(markers: &'a [Marker], layout: &ColumnLayout, bucketing: MarkerBucketing) -> Self {
        let config = layout.config();
        let mut buckets: HashMap<i64, Vec<&'a Marker>> = HashMap::new();
        for marker in markers.iter().filter(|m| m.timestamp.is_finite()) {
            let key = match bucketing {
                MarkerBucketing::Exact => bucket_of(marker),
                MarkerBucketing::MinorTick => minor_tick_column(marker.timestamp, config),
            };
            buckets.entry(key).or_default().push(marker);
        }
        Self { bucketing, buckets }
    }

    /// Markers belonging to `column`, in source order.
    pub fn markers_in_cell(&self, column: usize, layout: &ColumnLayout) -> &[&'a Marker] {
        let key = match self.bucketing {
            MarkerBucketing::Exact => {
                let item = layout.item_value(column);
                if !item.is_finite() || item.fract() != 0.0 {
                    return &[];
                }
                item as i64
            }
            MarkerBucketing::MinorTick => column as i64,
        };
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}
