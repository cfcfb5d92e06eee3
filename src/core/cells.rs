//! Cell materialization for one render pass.

use super::layout::ColumnLayout;
use super::markers::MarkerIndex;
use super::registry::BoundRegistry;
use super::virtualizer::ColumnRange;
use crate::constants::{MARKER_DOT_DIAMETER, MARKER_DOT_TOP};
use crate::state::Marker;

/// One materialized ruler column.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDescriptor<'a> {
    pub index: usize,
    /// Left edge in content pixels (before scrolling).
    pub left: f64,
    pub width: f64,
    /// Time value of the tick at the cell's right edge.
    pub item: f64,
    pub is_major_tick: bool,
    pub markers_in_cell: Vec<&'a Marker>,
}

/// Placement of marker dots inside a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDotGeometry {
    pub diameter: f64,
    /// Top edge relative to the cell's top.
    pub top: f64,
}

impl Default for MarkerDotGeometry {
    fn default() -> Self {
        Self {
            diameter: MARKER_DOT_DIAMETER,
            top: MARKER_DOT_TOP,
        }
    }
}

impl MarkerDotGeometry {
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Dot center in cell coordinates. The dot's left edge sits at the cell's midpoint.
    pub fn center_in_cell(&self, cell_width: f64) -> (f64, f64) {
        (cell_width / 2.0 + self.radius(), self.top + self.radius())
    }
}

/// Build descriptors for every column in `range`.
pub fn build_cells<'a>(
    layout: &ColumnLayout,
    range: ColumnRange,
    index: &MarkerIndex<'a>,
) -> Vec<CellDescriptor<'a>> {
    range
        .iter()
        .map(|column| CellDescriptor {
            index: column,
            left: layout.left_of(column),
            width: layout.width_of(column),
            item: layout.item_value(column),
            is_major_tick: layout.is_major_tick(column),
            markers_in_cell: index.markers_in_cell(column, layout).to_vec(),
        })
        .collect()
}

/// Register the on-screen bound of every marker in `cells`.
///
/// `origin` is the screen position of the viewport's top-left corner.
/// Returns the number of bounds registered.
pub fn register_cell_bounds(
    cells: &[CellDescriptor<'_>],
    dot: &MarkerDotGeometry,
    origin: (f64, f64),
    scroll_left: f64,
    registry: &mut BoundRegistry,
) -> usize {
    let mut registered = 0;
    for cell in cells {
        let (dx, dy) = dot.center_in_cell(cell.width);
        let center_x = origin.0 + cell.left - scroll_left + dx;
        let center_y = origin.1 + dy;
        for marker in &cell.markers_in_cell {
            registry.register(&marker.id, center_x, center_y, dot.radius());
            registered += 1;
        }
    }
    registered
}

/// Default label for a major tick: the raw value, without a trailing `.0`.
pub fn format_scale_value(item: f64) -> String {
    if item.fract() == 0.0 && item.abs() < 1e15 {
        format!("{}", item as i64)
    } else {
        let text = format!("{item:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
