//! On-screen bounds of the markers rendered in the latest pass.
//!
//! The registry is rebuilt from scratch every render pass: cleared first,
//! then one bound per materialized marker. Markers that were not rendered
//! have no bound and cannot be hit.

use std::collections::HashMap;

/// Circular hit area of one rendered marker.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredBound {
    pub marker_id: String,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

#[derive(Debug, Default)]
pub struct BoundRegistry {
    bounds: Vec<RegisteredBound>,
    /// Marker id to its slot in `bounds`.
    slots: HashMap<String, usize>,
    generation: u64,
}

impl BoundRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wipe every bound. Starts a new generation.
    pub fn clear(&mut self) {
        self.bounds.clear();
        self.slots.clear();
        self.generation += 1;
    }

    /// Insert or update the bound for `marker_id`.
    ///
    /// An update keeps the bound's original registration slot.
    pub fn register(&mut self, marker_id: &str, center_x: f64, center_y: f64, radius: f64) {
        if let Some(&slot) = self.slots.get(marker_id) {
            let bound = &mut self.bounds[slot];
            bound.center_x = center_x;
            bound.center_y = center_y;
            bound.radius = radius;
            return;
        }
        self.slots.insert(marker_id.to_string(), self.bounds.len());
        self.bounds.push(RegisteredBound {
            marker_id: marker_id.to_string(),
            center_x,
            center_y,
            radius,
        });
    }

    pub fn get(&self, marker_id: &str) -> Option<&RegisteredBound> {
        self.slots.get(marker_id).map(|&slot| &self.bounds[slot])
    }

    /// Bounds in registration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RegisteredBound> {
        self.bounds.iter()
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Number of clears so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
