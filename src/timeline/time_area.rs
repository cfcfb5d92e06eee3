use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use serde::Deserialize;
use tracing::warn;

use super::marker_dot::MarkerDot;
use crate::constants::{
    ACCENT_MARKER, BG_SURFACE, BORDER_DEFAULT, BORDER_STRONG, BORDER_SUBTLE, MARKER_LANE_HEIGHT,
    RULER_HEIGHT, TEXT_DIM, TIME_AREA_HOST_ID, TIME_AREA_VIEWPORT_SCRIPT, WHEEL_SCROLL_FACTOR,
};
use crate::core::{
    clamp_scroll_left, format_scale_value, ClickContext, ClickEvent, ColumnLayout, MarkerDotGeometry,
    RenderInput, RulerKernel, TimeAreaHost, Viewport,
};
use crate::state::{Marker, RulerSettings};

/// Scroll notification forwarded to sibling widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollParams {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct ViewportSize {
    width: f64,
    height: f64,
}

/// Routes kernel callbacks to the component's event handlers.
struct CallbackHost<S, M, I> {
    set_cursor: S,
    handle_comment_click: M,
    on_click_time_area: Option<I>,
}

impl<S, M, I> TimeAreaHost for CallbackHost<S, M, I>
where
    S: FnMut(f64),
    M: FnMut(String),
    I: FnMut(f64, &ClickEvent) -> bool,
{
    fn handle_comment_click(&mut self, marker_id: &str) {
        (self.handle_comment_click)(marker_id.to_string());
    }

    fn on_click_time_area(&mut self, time: f64, event: &ClickEvent) -> bool {
        match self.on_click_time_area.as_mut() {
            Some(intercept) => intercept(time, event),
            None => true,
        }
    }

    fn set_cursor(&mut self, time: f64) {
        (self.set_cursor)(time);
    }
}

/// Label of a major tick: the host's renderer if it has one.
fn scale_label<F: FnOnce(f64) -> String>(item: f64, render: Option<F>) -> String {
    match render {
        Some(render) => render(item),
        None => format_scale_value(item),
    }
}

/// Scroll a wheel delta asks for, or `None` when the offset would not move.
///
/// Horizontal delta wins; plain vertical wheels scroll the ruler sideways.
fn wheel_scroll(
    scroll_left: f64,
    delta_x: f64,
    delta_y: f64,
    content_width: f64,
    client_width: f64,
) -> Option<ScrollParams> {
    let dx = if delta_x != 0.0 { delta_x } else { delta_y };
    let next = clamp_scroll_left(scroll_left + dx * WHEEL_SCROLL_FACTOR, content_width, client_width);
    (next != scroll_left).then_some(ScrollParams {
        scroll_left: next,
        client_width,
        scroll_width: content_width,
    })
}

struct DotView {
    id: String,
    color: String,
}

struct CellView {
    index: usize,
    left: f64,
    width: f64,
    label: Option<String>,
    dots: Vec<DotView>,
}

/// Time ruler with virtualized tick columns and clickable comment markers.
///
/// Only columns inside the viewport (plus overscan) are rendered. Every render
/// rebuilds the marker bounds the click handler hit-tests against.
#[component]
pub fn TimeArea(
    settings: RulerSettings,
    scroll_left: f64,
    comments: Vec<Marker>,
    on_scroll: EventHandler<ScrollParams>,
    set_cursor: EventHandler<f64>,
    handle_comment_click: EventHandler<String>,
    on_click_time_area: Option<Callback<(f64, ClickEvent), bool>>,
    get_scale_render: Option<Callback<f64, String>>,
) -> Element {
    let kernel = use_hook(|| Rc::new(RefCell::new(RulerKernel::new(settings.overscan_columns))));
    let mut viewport_size = use_signal(|| None::<ViewportSize>);

    use_future(move || async move {
        loop {
            let mut eval = document::eval(TIME_AREA_VIEWPORT_SCRIPT);
            while let Ok(size) = eval.recv::<ViewportSize>().await {
                if viewport_size() != Some(size) {
                    viewport_size.set(Some(size));
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let host_style = format!(
        "position: relative; width: 100%; height: {}px; overflow: hidden; background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT}; user-select: none;",
        MARKER_LANE_HEIGHT + RULER_HEIGHT
    );

    let config = match settings.scale_config() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "time area has an invalid scale config");
            return rsx! {
                div { id: TIME_AREA_HOST_ID, style: "{host_style}" }
            };
        }
    };

    let size = viewport_size().unwrap_or(ViewportSize {
        width: 0.0,
        height: MARKER_LANE_HEIGHT + RULER_HEIGHT,
    });
    let viewport = Viewport {
        width: size.width,
        height: (size.height - MARKER_LANE_HEIGHT).max(0.0),
        scroll_left,
    };
    let layout = ColumnLayout::new(config, settings.scale_count);
    let content_width = layout.content_width();
    let dot = MarkerDotGeometry::default();

    let cells: Vec<CellView> = {
        let mut kernel = kernel.borrow_mut();
        kernel.set_overscan(settings.overscan_columns);
        let pass = kernel.render_pass(RenderInput {
            layout,
            viewport,
            markers: &comments,
            bucketing: settings.marker_bucketing,
            origin: (0.0, 0.0),
        });
        pass.cells
            .iter()
            .map(|cell| CellView {
                index: cell.index,
                left: cell.left - scroll_left,
                width: cell.width,
                label: cell
                    .is_major_tick
                    .then(|| scale_label(cell.item, get_scale_render.map(|render| move |item: f64| render.call(item)))),
                dots: cell
                    .markers_in_cell
                    .iter()
                    .map(|marker| DotView {
                        id: marker.id.clone(),
                        color: marker.color.clone().unwrap_or_else(|| ACCENT_MARKER.to_string()),
                    })
                    .collect(),
            })
            .collect()
    };

    let click_kernel = kernel.clone();
    let context = ClickContext {
        config,
        scroll_left,
        max_scale_count: settings.max_scale_count,
        hide_cursor: settings.hide_cursor,
    };
    let cursor_style = if settings.hide_cursor { "default" } else { "pointer" };

    rsx! {
        div {
            id: TIME_AREA_HOST_ID,
            style: "{host_style}",

            // Tick cells; marker dots reach up into the lane above them
            div {
                style: "position: absolute; left: 0; top: {MARKER_LANE_HEIGHT}px; width: 100%; height: {RULER_HEIGHT}px; pointer-events: none;",
                for cell in cells {
                    div {
                        key: "{cell.index}",
                        style: "position: absolute; left: {cell.left}px; top: 0; width: {cell.width}px; height: 100%;",
                        if let Some(label) = cell.label {
                            div {
                                style: "position: absolute; right: 0; bottom: 0; width: 1px; height: 10px; background-color: {BORDER_STRONG};",
                            }
                            div {
                                style: "position: absolute; right: 4px; top: 3px; font-size: 9px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace; white-space: nowrap;",
                                "{label}"
                            }
                        } else {
                            div {
                                style: "position: absolute; right: 0; bottom: 0; width: 1px; height: 4px; background-color: {BORDER_SUBTLE};",
                            }
                        }
                        for marker in cell.dots {
                            MarkerDot {
                                key: "{marker.id}",
                                marker_id: marker.id.clone(),
                                color: marker.color,
                                left: cell.width / 2.0,
                                top: dot.top,
                                diameter: dot.diameter,
                            }
                        }
                    }
                }
            }

            // Interaction layer over the whole area, marker lane included
            div {
                style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; z-index: 10; cursor: {cursor_style};",
                onclick: move |e: MouseEvent| {
                    let point = e.element_coordinates();
                    let event = ClickEvent {
                        pointer_x: point.x,
                        pointer_y: point.y - MARKER_LANE_HEIGHT,
                        viewport_origin_x: 0.0,
                    };
                    let mut host = CallbackHost {
                        set_cursor: move |time: f64| set_cursor.call(time),
                        handle_comment_click: move |marker_id: String| handle_comment_click.call(marker_id),
                        on_click_time_area: on_click_time_area
                            .map(|intercept| move |time: f64, event: &ClickEvent| intercept.call((time, *event))),
                    };
                    click_kernel.borrow_mut().click(&event, &context, &mut host);
                },
                onwheel: move |e: WheelEvent| {
                    let delta = e.delta().strip_units();
                    if let Some(params) = wheel_scroll(scroll_left, delta.x, delta.y, content_width, viewport.width) {
                        e.prevent_default();
                        on_scroll.call(params);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClickOutcome, MarkerBucketing, ScaleConfig};

    #[test]
    fn test_scale_label_defaults_to_plain_value() {
        assert_eq!(scale_label(3.0, None::<fn(f64) -> String>), format_scale_value(3.0));
        assert_eq!(scale_label(0.5, None::<fn(f64) -> String>), "0.5");
    }

    #[test]
    fn test_scale_label_uses_host_renderer() {
        let label = scale_label(75.0, Some(|item: f64| format!("{item}s")));
        assert_eq!(label, "75s");
    }

    #[test]
    fn test_wheel_scroll_reports_clamped_offset() {
        let params = wheel_scroll(100.0, 0.0, 50.0, 1_000.0, 400.0).unwrap();
        assert_eq!(
            params,
            ScrollParams {
                scroll_left: 150.0,
                client_width: 400.0,
                scroll_width: 1_000.0,
            }
        );

        // Horizontal delta takes precedence and the offset stops at the end.
        let params = wheel_scroll(500.0, 300.0, -50.0, 1_000.0, 400.0).unwrap();
        assert_eq!(params.scroll_left, 600.0);
    }

    #[test]
    fn test_wheel_scroll_at_edge_is_ignored() {
        assert_eq!(wheel_scroll(0.0, 0.0, -40.0, 1_000.0, 400.0), None);
        assert_eq!(wheel_scroll(600.0, 25.0, 0.0, 1_000.0, 400.0), None);
        assert_eq!(wheel_scroll(0.0, 0.0, 40.0, 300.0, 400.0), None);
    }

    fn render(kernel: &mut RulerKernel, markers: &[Marker]) {
        kernel.render_pass(RenderInput {
            layout: ColumnLayout::new(ScaleConfig::default(), 20),
            viewport: Viewport {
                width: 800.0,
                height: RULER_HEIGHT,
                scroll_left: 0.0,
            },
            markers,
            bucketing: MarkerBucketing::Exact,
            origin: (0.0, 0.0),
        });
    }

    fn context() -> ClickContext {
        ClickContext {
            config: ScaleConfig::default(),
            scroll_left: 0.0,
            max_scale_count: Some(20),
            hide_cursor: false,
        }
    }

    #[test]
    fn test_host_without_interceptor_moves_cursor() {
        let mut kernel = RulerKernel::new(0);
        render(&mut kernel, &[]);

        let mut cursor: Option<f64> = None;
        let mut clicked: Vec<String> = Vec::new();
        let mut host = CallbackHost {
            set_cursor: |time: f64| cursor = Some(time),
            handle_comment_click: |marker_id: String| clicked.push(marker_id),
            on_click_time_area: None::<fn(f64, &ClickEvent) -> bool>,
        };
        let event = ClickEvent {
            pointer_x: 180.0,
            pointer_y: 10.0,
            viewport_origin_x: 0.0,
        };
        let outcome = kernel.click(&event, &context(), &mut host);
        drop(host);

        assert_eq!(outcome, ClickOutcome::Cursor { time: 1.0 });
        assert_eq!(cursor, Some(1.0));
        assert!(clicked.is_empty());
    }

    #[test]
    fn test_host_routes_marker_clicks_and_interceptor() {
        let markers = vec![Marker::with_id("m1", 3.0)];
        let mut kernel = RulerKernel::new(0);
        render(&mut kernel, &markers);
        let bound = kernel.registry().get("m1").unwrap().clone();

        let mut cursor: Option<f64> = None;
        let mut clicked: Vec<String> = Vec::new();
        let mut offered = Vec::new();
        let mut host = CallbackHost {
            set_cursor: |time: f64| cursor = Some(time),
            handle_comment_click: |marker_id: String| clicked.push(marker_id),
            on_click_time_area: Some(|time: f64, _event: &ClickEvent| {
                offered.push(time);
                false
            }),
        };

        let on_marker = ClickEvent {
            pointer_x: bound.center_x,
            pointer_y: bound.center_y,
            viewport_origin_x: 0.0,
        };
        kernel.click(&on_marker, &context(), &mut host);

        let on_ruler = ClickEvent {
            pointer_x: 180.0,
            pointer_y: 10.0,
            viewport_origin_x: 0.0,
        };
        let outcome = kernel.click(&on_ruler, &context(), &mut host);
        drop(host);

        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(clicked, vec!["m1".to_string()]);
        assert_eq!(offered, vec![1.0]);
        assert_eq!(cursor, None);
    }
}
