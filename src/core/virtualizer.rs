//! Visible column range for a scrolled ruler viewport.
//!
//! The ruler is a single-row grid. Column geometry (gutter and unit width) is
//! cached and only recomputed when the scale width, gutter or split count
//! changes; a scroll-only update just shifts the range over the cached
//! geometry.

use tracing::debug;

use super::layout::ColumnLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

/// Viewport geometry reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_left: f64,
}

/// Inclusive column index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    pub start: usize,
    pub stop: usize,
}

impl ColumnRange {
    pub fn contains(&self, column: usize) -> bool {
        (self.start..=self.stop).contains(&column)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.start..=self.stop
    }
}

/// Columns to materialize for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualWindow {
    /// Columns intersecting the viewport.
    pub visible: ColumnRange,
    /// Visible columns plus overscan.
    pub rendered: ColumnRange,
    pub direction: ScrollDirection,
    /// Always 1; the ruler is one-dimensional.
    pub row_count: usize,
    pub row_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CachedGeometry {
    scale_width: f64,
    start_left: f64,
    scale_split_count: u32,
    gutter_width: f64,
    column_width: f64,
}

impl CachedGeometry {
    fn measure(layout: &ColumnLayout) -> Self {
        let config = layout.config();
        Self {
            scale_width: config.scale_width,
            start_left: config.start_left,
            scale_split_count: config.scale_split_count,
            gutter_width: config.start_left,
            column_width: config.column_width(),
        }
    }

    fn matches(&self, layout: &ColumnLayout) -> bool {
        let config = layout.config();
        self.scale_width == config.scale_width
            && self.start_left == config.start_left
            && self.scale_split_count == config.scale_split_count
    }

    /// Index of the column containing `offset`, clamped to the grid.
    fn column_at(&self, offset: f64, total_columns: usize) -> usize {
        let last = total_columns - 1;
        if offset < self.gutter_width {
            return 0;
        }
        let index = ((offset - self.gutter_width) / self.column_width).floor();
        (index as usize).saturating_add(1).min(last)
    }
}

#[derive(Debug)]
pub struct Virtualizer {
    overscan: usize,
    geometry: Option<CachedGeometry>,
    last_scroll_left: Option<f64>,
    direction: ScrollDirection,
    relayouts: u64,
}

impl Virtualizer {
    pub fn new(overscan: usize) -> Self {
        Self {
            overscan,
            geometry: None,
            last_scroll_left: None,
            direction: ScrollDirection::Forward,
            relayouts: 0,
        }
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// How many times cached column geometry was rebuilt.
    pub fn relayout_count(&self) -> u64 {
        self.relayouts
    }

    /// Whether `layout` invalidates the cached column geometry.
    pub fn needs_relayout(&self, layout: &ColumnLayout) -> bool {
        !self.geometry.is_some_and(|geometry| geometry.matches(layout))
    }

    /// Compute the column window for `viewport`. Returns `None` for an empty grid.
    pub fn window(&mut self, layout: &ColumnLayout, viewport: Viewport) -> Option<VirtualWindow> {
        let geometry = match self.geometry {
            Some(geometry) if geometry.matches(layout) => geometry,
            _ => {
                let geometry = CachedGeometry::measure(layout);
                self.relayouts += 1;
                debug!(
                    scale_width = geometry.scale_width,
                    start_left = geometry.start_left,
                    column_width = geometry.column_width,
                    "ruler column geometry recomputed"
                );
                self.geometry = Some(geometry);
                geometry
            }
        };

        let scroll_left = viewport.scroll_left.max(0.0);
        if let Some(previous) = self.last_scroll_left {
            if scroll_left > previous {
                self.direction = ScrollDirection::Forward;
            } else if scroll_left < previous {
                self.direction = ScrollDirection::Backward;
            }
        }
        self.last_scroll_left = Some(scroll_left);

        let total = layout.total_columns();
        if total == 0 {
            return None;
        }

        let start = geometry.column_at(scroll_left, total);
        let stop = geometry.column_at(scroll_left + viewport.width.max(0.0), total);
        let visible = ColumnRange { start, stop };
        let rendered = match self.direction {
            ScrollDirection::Forward => ColumnRange {
                start,
                stop: (stop + self.overscan).min(total - 1),
            },
            ScrollDirection::Backward => ColumnRange {
                start: start.saturating_sub(self.overscan),
                stop,
            },
        };

        Some(VirtualWindow {
            visible,
            rendered,
            direction: self.direction,
            row_count: 1,
            row_height: viewport.height,
        })
    }
}

/// Clamp a requested scroll offset to the scrollable content.
pub fn clamp_scroll_left(requested: f64, content_width: f64, viewport_width: f64) -> f64 {
    let max_scroll = (content_width - viewport_width).max(0.0);
    if requested.is_finite() {
        requested.clamp(0.0, max_scroll)
    } else {
        0.0
    }
}
