use dioxus::prelude::*;
use dioxus_primitives::label as prim;

#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}

/// A labelled form row: the label on top, the control below.
///
/// `html_for` must match the `id` of the control passed as children.
#[component]
pub fn Field(label: String, html_for: String, children: Element) -> Element {
    rsx! {
        div { class: "field",
            Label { html_for: html_for, "{label}" }
            {children}
        }
    }
}
