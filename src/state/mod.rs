//! Host-owned ruler data
//!
//! - Marker: comment markers anchored to time instants
//! - RulerSettings: scale configuration and ruler behavior, persisted as JSON

mod marker;
mod settings;

pub use marker::Marker;
pub use settings::{RulerSettings, SETTINGS_PATH_ENV};
