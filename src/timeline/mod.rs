//! Timeline ruler components
//!
//! - TimeArea: the scrollable time ruler with markers
//! - MarkerDot: a single comment marker

mod marker_dot;
mod time_area;

pub use marker_dot::MarkerDot;
pub use time_area::{ScrollParams, TimeArea};
