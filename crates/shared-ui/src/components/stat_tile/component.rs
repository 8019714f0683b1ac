use dioxus::prelude::*;

/// Accent colour of a stat tile's icon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Primary,
    Success,
    Warning,
    Destructive,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Primary => "primary",
            StatTone::Success => "success",
            StatTone::Warning => "warning",
            StatTone::Destructive => "destructive",
        }
    }
}

/// Compact card with an icon, a caption and one large figure.
#[component]
pub fn StatTile(
    icon: Element,
    label: String,
    value: String,
    #[props(default)] tone: StatTone,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "card stat-tile",
            div { class: "stat-tile-icon", "data-tone": tone.class(), {icon} }
            div { class: "stat-tile-body",
                p { class: "stat-tile-label", "{label}" }
                p { class: "stat-tile-value", "{value}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_value_and_tone() {
        let html = dioxus_ssr::render_element(rsx! {
            StatTile {
                icon: rsx! { span { "*" } },
                label: "Total Students",
                value: "2,847",
                tone: StatTone::Success,
            }
        });
        assert!(html.contains("Total Students"), "{html}");
        assert!(html.contains("2,847"), "{html}");
        assert!(html.contains(r#"data-tone="success""#), "{html}");
    }
}
