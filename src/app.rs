use dioxus::prelude::*;
use tracing::{debug, info};

use timeline_ruler::constants::{
    ACCENT_CURSOR, BG_BASE, BG_ELEVATED, BORDER_DEFAULT, MARKER_LANE_HEIGHT, RULER_HEIGHT,
    START_CURSOR_TIME, TEXT_MUTED, TEXT_PRIMARY,
};
use timeline_ruler::core::{cursor_offset, required_scale_count, ClickEvent};
use timeline_ruler::state::{Marker, RulerSettings};
use timeline_ruler::timeline::{ScrollParams, TimeArea};

fn demo_markers() -> Vec<Marker> {
    vec![
        Marker::with_id("intro", 1.0).labeled("Intro cut"),
        Marker::with_id("beat", 3.0).labeled("Beat drop"),
        Marker::with_id("outro", 12.0).labeled("Outro"),
    ]
}

/// Format seconds as MM:SS for major tick labels.
fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Demo host for the time ruler: owns cursor, scroll and marker state.
#[component]
pub fn App() -> Element {
    let settings = use_hook(RulerSettings::from_env);
    let mut cursor_time = use_signal(|| START_CURSOR_TIME);
    let mut scroll_left = use_signal(|| 0.0);
    let mut markers = use_signal(demo_markers);
    let mut selected_marker = use_signal(|| None::<String>);

    let config = settings.scale_config().unwrap_or_default();
    let furthest = markers
        .read()
        .iter()
        .map(|m| m.timestamp)
        .fold(cursor_time(), f64::max);
    let scale_count = required_scale_count(furthest, &config, settings.max_scale_count)
        .max(settings.scale_count);
    let ruler_settings = RulerSettings {
        scale_count,
        ..settings.clone()
    };
    let cursor_x = cursor_offset(cursor_time(), &config, scroll_left());
    let selected_label = selected_marker()
        .and_then(|id| markers.read().iter().find(|m| m.id == id).cloned())
        .map(|m| m.label.unwrap_or(m.id))
        .unwrap_or_else(|| "none".to_string());
    let time_label = format!("{:.2}", cursor_time());
    let marker_rows: Vec<(String, String)> = markers
        .read()
        .iter()
        .map(|m| {
            let row = format!("{:.2}  {}", m.timestamp, m.label.as_deref().unwrap_or(""));
            (m.id.clone(), row)
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; width: 100vw; height: 100vh; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; font-family: sans-serif;",

            // Header
            div {
                style: "display: flex; align-items: center; gap: 16px; height: 32px; padding: 0 14px; background-color: {BG_ELEVATED}; border-bottom: 1px solid {BORDER_DEFAULT}; font-size: 12px;",
                span { style: "color: {TEXT_MUTED};", "Cursor" }
                span { style: "font-family: 'SF Mono', Consolas, monospace;", "{time_label}" }
                span { style: "color: {TEXT_MUTED};", "Selected" }
                span { "{selected_label}" }
                button {
                    style: "margin-left: auto; font-size: 11px;",
                    onclick: move |_| {
                        let n = markers.read().len() + 1;
                        let marker = Marker::new(cursor_time().floor()).labeled(format!("Comment {n}"));
                        info!(marker_id = %marker.id, timestamp = marker.timestamp, "marker added");
                        markers.write().push(marker);
                    },
                    "Add marker at cursor"
                }
            }

            // Ruler + cursor line
            div {
                style: "position: relative; width: 100%;",
                TimeArea {
                    settings: ruler_settings,
                    scroll_left: scroll_left(),
                    comments: markers(),
                    on_scroll: move |params: ScrollParams| scroll_left.set(params.scroll_left),
                    set_cursor: move |time: f64| cursor_time.set(time),
                    handle_comment_click: move |marker_id: String| {
                        selected_marker.set(Some(marker_id));
                    },
                    on_click_time_area: move |(time, _event): (f64, ClickEvent)| {
                        // First click after selecting a marker only clears the selection.
                        if selected_marker().is_some() {
                            selected_marker.set(None);
                            return false;
                        }
                        debug!(time, "ruler clicked");
                        true
                    },
                    get_scale_render: move |item: f64| format_timecode(item),
                }
                if cursor_x >= 0.0 {
                    div {
                        style: "position: absolute; left: {cursor_x}px; top: {MARKER_LANE_HEIGHT}px; width: 1px; height: {RULER_HEIGHT}px; background-color: {ACCENT_CURSOR}; pointer-events: none; z-index: 20;",
                    }
                }
            }

            // Marker list
            div {
                style: "padding: 8px 14px; font-size: 12px; color: {TEXT_MUTED};",
                for (id, row) in marker_rows {
                    div { key: "{id}", "{row}" }
                }
            }
        }
    }
}
