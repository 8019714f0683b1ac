use dioxus::prelude::*;

/// Top bar of a dashboard: brand icon and titles on the left, actions on
/// the right.
#[component]
pub fn PageHeader(icon: Element, actions: Element, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-header-inner",
                div { class: "page-brand",
                    div { class: "page-brand-icon", {icon} }
                    div { {children} }
                }
                div { class: "page-actions", {actions} }
            }
        }
    }
}

/// Dashboard title rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Secondary line under the title.
#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "page-subtitle", {children} }
    }
}
