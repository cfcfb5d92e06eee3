use dioxus::prelude::*;

/// Comment marker dot drawn inside a ruler cell.
/// Purely visual: clicks are resolved by the time area against registered bounds.
#[component]
pub fn MarkerDot(marker_id: String, color: String, left: f64, top: f64, diameter: f64) -> Element {
    rsx! {
        div {
            "data-comment-id": "{marker_id}",
            style: "
                position: absolute;
                top: {top}px;
                left: {left}px;
                width: {diameter}px;
                height: {diameter}px;
                background-color: {color};
                border-radius: 50%;
                pointer-events: none;
                z-index: 5;
            ",
        }
    }
}
