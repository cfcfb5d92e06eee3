//! Ruler kernel
//!
//! - `scale`: pixel ⇄ time mapping
//! - `layout`: column widths, offsets and tick values
//! - `virtualizer`: visible column window for a scrolled viewport
//! - `markers` / `registry`: per-column markers and rendered marker bounds
//! - `hit_test`: circular marker hit-testing
//! - `interaction`: click resolution
//! - `kernel`: render pass and click entry points

pub mod cells;
pub mod hit_test;
pub mod interaction;
pub mod kernel;
pub mod layout;
pub mod markers;
pub mod registry;
pub mod scale;
pub mod virtualizer;

pub use cells::{format_scale_value, CellDescriptor, MarkerDotGeometry};
pub use hit_test::hit_test;
pub use interaction::{
    ClickContext, ClickEvent, ClickOutcome, InteractionController, InteractionState, TimeAreaHost,
};
pub use kernel::{RenderInput, RenderPass, RulerKernel};
pub use layout::{required_scale_count, ColumnLayout};
pub use markers::{MarkerBucketing, MarkerIndex};
pub use registry::{BoundRegistry, RegisteredBound};
pub use scale::{cursor_offset, pixel_to_time, time_to_pixel, ScaleConfig};
pub use virtualizer::{clamp_scroll_left, ColumnRange, ScrollDirection, Viewport, VirtualWindow, Virtualizer};
