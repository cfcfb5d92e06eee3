use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SCALE, DEFAULT_SCALE_SPLIT_COUNT, DEFAULT_SCALE_WIDTH, DEFAULT_START_LEFT};
use crate::error::ScaleConfigError;

/// Mapping between the time axis and ruler pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Time units spanned by one major column.
    pub scale: f64,
    /// Pixel width of one major column.
    pub scale_width: f64,
    /// Minor subdivisions per major column; 0 disables subdivision.
    pub scale_split_count: u32,
    /// Pixel width of the gutter before time 0.
    pub start_left: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            scale_width: DEFAULT_SCALE_WIDTH,
            scale_split_count: DEFAULT_SCALE_SPLIT_COUNT,
            start_left: DEFAULT_START_LEFT,
        }
    }
}

impl ScaleConfig {
    /// Build a validated config.
    pub fn new(
        scale: f64,
        scale_width: f64,
        scale_split_count: u32,
        start_left: f64,
    ) -> Result<Self, ScaleConfigError> {
        let config = Self {
            scale,
            scale_width,
            scale_split_count,
            start_left,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScaleConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ScaleConfigError::InvalidScale(self.scale));
        }
        if !self.scale_width.is_finite() || self.scale_width <= 0.0 {
            return Err(ScaleConfigError::InvalidScaleWidth(self.scale_width));
        }
        if !self.start_left.is_finite() || self.start_left < 0.0 {
            return Err(ScaleConfigError::InvalidStartLeft(self.start_left));
        }
        Ok(())
    }

    /// Whether major columns are split into minor ticks.
    pub fn is_subdivided(&self) -> bool {
        self.scale_split_count > 0
    }

    /// Pixel width of one non-gutter column.
    pub fn column_width(&self) -> f64 {
        if self.is_subdivided() {
            self.scale_width / self.scale_split_count as f64
        } else {
            self.scale_width
        }
    }

    /// Time spanned by one non-gutter column.
    pub fn column_step(&self) -> f64 {
        if self.is_subdivided() {
            self.scale / self.scale_split_count as f64
        } else {
            self.scale
        }
    }
}

/// Convert a ruler pixel offset into a time value.
pub fn pixel_to_time(pixel_offset: f64, config: &ScaleConfig) -> f64 {
    debug_assert!(config.validate().is_ok(), "invalid scale config: {config:?}");
    (pixel_offset - config.start_left) / config.scale_width * config.scale
}

/// Convert a time value into a ruler pixel offset.
pub fn time_to_pixel(time: f64, config: &ScaleConfig) -> f64 {
    debug_assert!(config.validate().is_ok(), "invalid scale config: {config:?}");
    time / config.scale * config.scale_width + config.start_left
}

/// Position of the cursor line inside the scrolled viewport.
pub fn cursor_offset(time: f64, config: &ScaleConfig, scroll_left: f64) -> f64 {
    time_to_pixel(time, config) - scroll_left
}
