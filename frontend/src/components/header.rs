use common::TemplateSet;
use leptos::{component, logging, prelude::*, view, IntoView};

/// Name of the template the header renders.
pub const HEADER_TEMPLATE: &str = "Header";

/// Storefront header, rendered from the template set provided by the root.
#[component]
pub fn Header() -> impl IntoView {
    let templates = expect_context::<TemplateSet>();

    let markup = match templates.get(HEADER_TEMPLATE) {
        Some(markup) => markup.to_owned(),
        None => {
            logging::warn!("template {HEADER_TEMPLATE:?} is missing, header will be empty");
            String::new()
        }
    };

    view! { <header inner_html=markup></header> }
}
