//! Click resolution for the ruler.
//!
//! # Flow
//!
//! 1. Hit-test the pointer against the marker bounds of the latest render pass.
//! 2. On a hit, report the marker to the host and stop.
//! 3. Otherwise, unless cursor placement is suppressed, clamp the pointer to the
//!    addressable range, convert it to time and offer it to the host's
//!    interceptor before moving the cursor.

use tracing::{debug, info};

use super::hit_test::hit_test;
use super::registry::BoundRegistry;
use super::scale::{pixel_to_time, ScaleConfig};

/// Pointer click in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClickEvent {
    pub pointer_x: f64,
    pub pointer_y: f64,
    /// Screen x of the ruler viewport's left edge.
    pub viewport_origin_x: f64,
}

/// Host state a click is resolved against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickContext {
    pub config: ScaleConfig,
    pub scroll_left: f64,
    /// `None` leaves the time range unbounded.
    pub max_scale_count: Option<u32>,
    pub hide_cursor: bool,
}

/// What a click ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Marker { marker_id: String },
    Cursor { time: f64 },
    Ignored,
}

/// Callbacks the ruler invokes on its host.
pub trait TimeAreaHost {
    /// A marker was clicked.
    fn handle_comment_click(&mut self, marker_id: &str);

    /// Offered a cursor placement before it happens. Returning `false` cancels it.
    fn on_click_time_area(&mut self, time: f64, event: &ClickEvent) -> bool {
        let _ = (time, event);
        true
    }

    /// Move the cursor to `time`.
    fn set_cursor(&mut self, time: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Resolving,
}

#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Resolve one click. Always returns to [`InteractionState::Idle`].
    pub fn click<H: TimeAreaHost + ?Sized>(
        &mut self,
        event: &ClickEvent,
        context: &ClickContext,
        registry: &BoundRegistry,
        host: &mut H,
    ) -> ClickOutcome {
        debug_assert_eq!(self.state, InteractionState::Idle);
        self.state = InteractionState::Resolving;
        let outcome = resolve_click(event, context, registry, host);
        self.state = InteractionState::Idle;
        debug!(?outcome, x = event.pointer_x, y = event.pointer_y, "ruler click resolved");
        outcome
    }
}

fn resolve_click<H: TimeAreaHost + ?Sized>(
    event: &ClickEvent,
    context: &ClickContext,
    registry: &BoundRegistry,
    host: &mut H,
) -> ClickOutcome {
    if let Some(marker_id) = hit_test(event.pointer_x, event.pointer_y, registry) {
        info!(marker_id, "marker clicked");
        host.handle_comment_click(marker_id);
        return ClickOutcome::Marker {
            marker_id: marker_id.to_string(),
        };
    }

    if context.hide_cursor {
        return ClickOutcome::Ignored;
    }

    let config = &context.config;
    let position = event.pointer_x - event.viewport_origin_x;
    let left = (position + context.scroll_left).max(config.start_left);
    if let Some(max_scale_count) = context.max_scale_count {
        let limit = max_scale_count as f64 * config.scale_width + config.start_left - context.scroll_left;
        if left > limit {
            return ClickOutcome::Ignored;
        }
    }

    let time = pixel_to_time(left, config);
    if !host.on_click_time_area(time, event) {
        debug!(time, "cursor placement cancelled by host");
        return ClickOutcome::Ignored;
    }
    host.set_cursor(time);
    ClickOutcome::Cursor { time }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        marker_clicks: Vec<String>,
        cursor_times: Vec<f64>,
        intercepted: Vec<f64>,
        cancel: bool,
    }

    impl TimeAreaHost for RecordingHost {
        fn handle_comment_click(&mut self, marker_id: &str) {
            self.marker_clicks.push(marker_id.to_string());
        }

        fn on_click_time_area(&mut self, time: f64, _event: &ClickEvent) -> bool {
            self.intercepted.push(time);
            !self.cancel
        }

        fn set_cursor(&mut self, time: f64) {
            self.cursor_times.push(time);
        }
    }

    struct PlainHost(Vec<f64>);

    impl TimeAreaHost for PlainHost {
        fn handle_comment_click(&mut self, _marker_id: &str) {}

        fn set_cursor(&mut self, time: f64) {
            self.0.push(time);
        }
    }

    fn context() -> ClickContext {
        ClickContext {
            config: ScaleConfig::new(1.0, 160.0, 10, 20.0).unwrap(),
            scroll_left: 0.0,
            max_scale_count: Some(20),
            hide_cursor: false,
        }
    }

    fn click_at(x: f64, y: f64) -> ClickEvent {
        ClickEvent {
            pointer_x: x,
            pointer_y: y,
            viewport_origin_x: 0.0,
        }
    }

    #[test]
    fn test_click_at_start_left_is_time_zero() {
        let mut controller = InteractionController::new();
        let mut host = RecordingHost::default();
        let outcome = controller.click(&click_at(20.0, 10.0), &context(), &BoundRegistry::new(), &mut host);
        assert_eq!(outcome, ClickOutcome::Cursor { time: 0.0 });
        assert_eq!(host.cursor_times, vec![0.0]);
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn test_click_before_start_left_is_clamped() {
        let mut host = RecordingHost::default();
        let outcome = InteractionController::new().click(
            &click_at(3.0, 10.0),
            &context(),
            &BoundRegistry::new(),
            &mut host,
        );
        assert_eq!(outcome, ClickOutcome::Cursor { time: 0.0 });
    }

    #[test]
    fn test_click_accounts_for_scroll_and_origin() {
        let mut host = RecordingHost::default();
        let context = ClickContext {
            scroll_left: 160.0,
            ..context()
        };
        let event = ClickEvent {
            pointer_x: 120.0,
            pointer_y: 10.0,
            viewport_origin_x: 100.0,
        };
        let outcome = InteractionController::new().click(&event, &context, &BoundRegistry::new(), &mut host);
        assert_eq!(outcome, ClickOutcome::Cursor { time: 1.0 });
    }

    #[test]
    fn test_marker_hit_skips_cursor() {
        let mut registry = BoundRegistry::new();
        registry.register("m1", 200.0, 10.0, 5.0);
        let mut host = RecordingHost::default();
        let outcome = InteractionController::new().click(&click_at(203.0, 12.0), &context(), &registry, &mut host);
        assert_eq!(
            outcome,
            ClickOutcome::Marker {
                marker_id: "m1".to_string()
            }
        );
        assert_eq!(host.marker_clicks, vec!["m1".to_string()]);
        assert!(host.cursor_times.is_empty());
        assert!(host.intercepted.is_empty());
    }

    #[test]
    fn test_marker_hit_wins_even_when_cursor_hidden() {
        let mut registry = BoundRegistry::new();
        registry.register("m1", 200.0, 10.0, 5.0);
        let context = ClickContext {
            hide_cursor: true,
            ..context()
        };
        let mut host = RecordingHost::default();
        let outcome = InteractionController::new().click(&click_at(200.0, 10.0), &context, &registry, &mut host);
        assert!(matches!(outcome, ClickOutcome::Marker { .. }));
    }

    #[test]
    fn test_hidden_cursor_ignores_click() {
        let context = ClickContext {
            hide_cursor: true,
            ..context()
        };
        let mut host = RecordingHost::default();
        let outcome = InteractionController::new().click(&click_at(200.0, 10.0), &context, &BoundRegistry::new(), &mut host);
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(host.cursor_times.is_empty());
        assert!(host.intercepted.is_empty());
    }

    #[test]
    fn test_click_past_max_scale_count_is_ignored() {
        let context = ClickContext {
            max_scale_count: Some(2),
            ..context()
        };
        let mut host = RecordingHost::default();
        // Limit is 2 * 160 + 20 = 340.
        let outcome = InteractionController::new().click(&click_at(341.0, 10.0), &context, &BoundRegistry::new(), &mut host);
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(host.cursor_times.is_empty());

        let outcome = InteractionController::new().click(&click_at(340.0, 10.0), &context, &BoundRegistry::new(), &mut host);
        assert_eq!(outcome, ClickOutcome::Cursor { time: 2.0 });
    }

    #[test]
    fn test_limit_shrinks_with_scroll() {
        let context = ClickContext {
            max_scale_count: Some(2),
            scroll_left: 100.0,
            ..context()
        };
        let mut host = RecordingHost::default();
        // left = 150 + 100 = 250 > 340 - 100.
        let outcome = InteractionController::new().click(&click_at(150.0, 10.0), &context, &BoundRegistry::new(), &mut host);
        assert_eq!(outcome, ClickOutcome::Ignored);
    }

    #[test]
    fn test_unbounded_scale_count_accepts_far_clicks() {
        let context = ClickContext {
            max_scale_count: None,
            ..context()
        };
        let mut host = PlainHost(Vec::new());
        let outcome = InteractionController::new().click(&click_at(16_020.0, 10.0), &context, &BoundRegistry::new(), &mut host);
        assert_eq!(outcome, ClickOutcome::Cursor { time: 100.0 });
        assert_eq!(host.0, vec![100.0]);
    }

    #[test]
    fn test_interceptor_false_cancels_cursor() {
        let mut host = RecordingHost {
            cancel: true,
            ..Default::default()
        };
        let outcome = InteractionController::new().click(&click_at(180.0, 10.0), &context(), &BoundRegistry::new(), &mut host);
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(host.intercepted, vec![1.0]);
        assert!(host.cursor_times.is_empty());
    }
}
