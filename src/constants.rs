//! Shared ruler defaults, UI colors and host scripts.
//! Defaults mirror the values the timeline editor ships with.

/// Cursor time at startup.
pub const START_CURSOR_TIME: f64 = 0.0;
/// Time units covered by one major column.
pub const DEFAULT_SCALE: f64 = 1.0;
/// Minor subdivisions per major column.
pub const DEFAULT_SCALE_SPLIT_COUNT: u32 = 10;
/// Pixel width of one major column.
pub const DEFAULT_SCALE_WIDTH: f64 = 160.0;
/// Width of the gutter column before the time axis starts.
pub const DEFAULT_START_LEFT: f64 = 20.0;
/// Smallest number of major columns the ruler renders.
pub const MIN_SCALE_COUNT: u32 = 20;
/// Major columns appended past the furthest content when the ruler grows.
pub const ADD_SCALE_COUNT: u32 = 5;
/// Extra columns materialized past the viewport in the scroll direction.
pub const DEFAULT_OVERSCAN_COLUMNS: usize = 10;

/// Diameter of a marker dot, which is also its hit circle.
pub const MARKER_DOT_DIAMETER: f64 = 10.0;
/// Top edge of a marker dot relative to its cell.
pub const MARKER_DOT_TOP: f64 = -23.0;
/// Height reserved above the ruler cells for marker dots.
pub const MARKER_LANE_HEIGHT: f64 = 24.0;
/// Height of the tick cell row.
pub const RULER_HEIGHT: f64 = 32.0;
/// Pixels scrolled per unit of wheel delta.
pub const WHEEL_SCROLL_FACTOR: f64 = 1.0;

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_MARKER: &str = "#6a58a5";
pub const ACCENT_CURSOR: &str = "#ef4444";

/// Element id of the ruler viewport measured by [`TIME_AREA_VIEWPORT_SCRIPT`].
pub const TIME_AREA_HOST_ID: &str = "time-area-host";

pub const TIME_AREA_VIEWPORT_SCRIPT: &str = r#"
const hostId = "time-area-host";
let last = null;

function sendSize() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const next = { width: host.clientWidth || 0, height: host.clientHeight || 0 };
    if (last &&
        Math.abs(last.width - next.width) < 0.5 &&
        Math.abs(last.height - next.height) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendSize());
    observer.observe(host);
    window.addEventListener("resize", sendSize, { passive: true });
    sendSize();
}

attach();
await new Promise(() => {});
"#;
