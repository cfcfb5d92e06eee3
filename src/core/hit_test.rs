use super::registry::BoundRegistry;

/// Whether `(x, y)` lies inside or on the circle.
pub fn is_point_in_circle(x: f64, y: f64, center_x: f64, center_y: f64, radius: f64) -> bool {
    let dx = x - center_x;
    let dy = y - center_y;
    dx * dx + dy * dy <= radius * radius
}

/// Find the marker whose bound contains the pointer.
///
/// Overlapping bounds resolve to the last registered one.
pub fn hit_test(pointer_x: f64, pointer_y: f64, registry: &BoundRegistry) -> Option<&str> {
    registry
        .iter()
        .rev()
        .find(|b| is_point_in_circle(pointer_x, pointer_y, b.center_x, b.center_y, b.radius))
        .map(|b| b.marker_id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> BoundRegistry {
        let mut registry = BoundRegistry::new();
        registry.register("m1", 100.0, 50.0, 5.0);
        registry
    }

    #[test]
    fn test_hit_inside() {
        assert_eq!(hit_test(101.0, 52.0, &registry()), Some("m1"));
        assert_eq!(hit_test(100.0, 50.0, &registry()), Some("m1"));
    }

    #[test]
    fn test_hit_on_boundary() {
        assert_eq!(hit_test(105.0, 50.0, &registry()), Some("m1"));
        assert_eq!(hit_test(100.0, 45.0, &registry()), Some("m1"));
        // 3-4-5 triangle lands exactly on the edge.
        assert_eq!(hit_test(103.0, 54.0, &registry()), Some("m1"));
    }

    #[test]
    fn test_miss_outside() {
        assert_eq!(hit_test(105.1, 50.0, &registry()), None);
        assert_eq!(hit_test(104.0, 54.0, &registry()), None);
        assert_eq!(hit_test(0.0, 0.0, &BoundRegistry::new()), None);
    }

    #[test]
    fn test_last_registered_wins_on_overlap() {
        let mut registry = BoundRegistry::new();
        registry.register("b1", 100.0, 50.0, 5.0);
        registry.register("b2", 103.0, 50.0, 5.0);
        // Closer to b1's center, still resolves to b2.
        assert_eq!(hit_test(99.0, 50.0 + 1.0, &registry), Some("b2"));
        // Only b1 covers this point.
        assert_eq!(hit_test(96.0, 50.0, &registry), Some("b1"));
    }

    #[test]
    fn test_cleared_registry_never_hits() {
        let mut registry = registry();
        registry.clear();
        assert_eq!(hit_test(100.0, 50.0, &registry), None);
    }
}
