//! Column geometry of the ruler.
//!
//! Column 0 is the gutter, `start_left` pixels wide. Every other column is
//! either one major unit (`scale_width`) or one minor subdivision of it.

use super::scale::ScaleConfig;
use crate::constants::{ADD_SCALE_COUNT, MIN_SCALE_COUNT};

/// Width of `column_index` out of `total_columns`.
///
/// `subdivided` is ignored when the config has no split count, so a zero
/// split count never divides by zero. Columns past the end have no width.
pub fn width_of(column_index: usize, total_columns: usize, config: &ScaleConfig, subdivided: bool) -> f64 {
    if column_index >= total_columns {
        return 0.0;
    }
    match column_index {
        0 => config.start_left,
        _ if subdivided && config.is_subdivided() => {
            config.scale_width / config.scale_split_count as f64
        }
        _ => config.scale_width,
    }
}

/// Number of major columns needed to show content ending at `end_time`.
pub fn required_scale_count(end_time: f64, config: &ScaleConfig, max_scale_count: Option<u32>) -> u32 {
    let needed = if end_time.is_finite() && end_time > 0.0 {
        // `as` saturates, so huge end times pin at u32::MAX before the max clamp.
        ((end_time / config.scale).ceil() as u32).saturating_add(ADD_SCALE_COUNT)
    } else {
        0
    };
    let count = needed.max(MIN_SCALE_COUNT);
    match max_scale_count {
        Some(max) => count.min(max),
        None => count,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    config: ScaleConfig,
    scale_count: u32,
}

impl ColumnLayout {
    pub fn new(config: ScaleConfig, scale_count: u32) -> Self {
        Self { config, scale_count }
    }

    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    pub fn scale_count(&self) -> u32 {
        self.scale_count
    }

    pub fn subdivided(&self) -> bool {
        self.config.is_subdivided()
    }

    /// Total logical columns, gutter included when subdivided.
    pub fn total_columns(&self) -> usize {
        let count = self.scale_count as usize;
        if self.subdivided() {
            count * self.config.scale_split_count as usize + 1
        } else {
            count
        }
    }

    pub fn width_of(&self, column: usize) -> f64 {
        width_of(column, self.total_columns(), &self.config, self.subdivided())
    }

    /// Left pixel edge of `column`.
    pub fn left_of(&self, column: usize) -> f64 {
        match column {
            0 => 0.0,
            c => self.config.start_left + (c - 1) as f64 * self.config.column_width(),
        }
    }

    /// Pixel width of all columns together.
    pub fn content_width(&self) -> f64 {
        match self.total_columns() {
            0 => 0.0,
            total => self.left_of(total),
        }
    }

    /// Time value represented by `column`, read at its right edge.
    pub fn item_value(&self, column: usize) -> f64 {
        if self.subdivided() {
            column as f64 / self.config.scale_split_count as f64 * self.config.scale
        } else {
            column as f64 * self.config.scale
        }
    }

    /// Whether `column` carries a full scale label.
    pub fn is_major_tick(&self, column: usize) -> bool {
        !self.subdivided() || column % self.config.scale_split_count as usize == 0
    }
}
