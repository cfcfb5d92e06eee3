//! Timeline Ruler
//!
//! Coordinate and interaction kernel behind the timeline editor's time ruler:
//! pixel ⇄ time mapping, virtualized column rendering and marker hit-testing,
//! plus the Dioxus component that hosts it.

pub mod constants;
pub mod core;
pub mod error;
pub mod state;
pub mod timeline;

pub use crate::core::{ClickOutcome, RulerKernel, ScaleConfig};
pub use crate::error::{ScaleConfigError, SettingsError};
pub use crate::state::{Marker, RulerSettings};
