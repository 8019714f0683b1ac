use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Colour of a [`ProgressBar`] fill.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProgressTone {
    #[default]
    Primary,
    Success,
    Warning,
    Destructive,
}

impl ProgressTone {
    fn class(&self) -> &'static str {
        match self {
            ProgressTone::Primary => "primary",
            ProgressTone::Success => "success",
            ProgressTone::Warning => "warning",
            ProgressTone::Destructive => "destructive",
        }
    }
}

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Clamp a percentage into the 0–100 range a progress bar can show.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// A complete bar: track plus a fill sized to `value` percent.
#[component]
pub fn ProgressBar(
    value: f64,
    #[props(default)] tone: ProgressTone,
    #[props(default)] class: String,
) -> Element {
    let pct = clamp_percent(value);

    rsx! {
        div {
            class: "progress-bar {class}",
            "data-tone": tone.class(),
            Progress {
                value: Some(pct),
                ProgressIndicator { style: "width: {pct}%;" }
            }
        }
    }
}
