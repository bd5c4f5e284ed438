pub mod api;

pub mod boot;

mod components;
use components::Header;

use common::{Env, TemplateSet};
use leptos::{component, logging, prelude::*, view, IntoView};

/// Name of the template the root component renders.
pub const APP_TEMPLATE: &str = "App";

/// Root of the storefront. Stateless: declares its own template and a single
/// child capability, the [`Header`].
///
/// `templates` and `env` are provided as context for the rest of the tree.
#[component]
pub fn App(templates: TemplateSet, env: Env) -> impl IntoView {
    provide_context(env);
    provide_context(templates.clone());

    let markup = match templates.get(APP_TEMPLATE) {
        Some(markup) => markup.to_owned(),
        None => {
            logging::warn!("template {APP_TEMPLATE:?} is missing, page will be empty");
            String::new()
        }
    };

    view! {
        <Header />
        <main inner_html=markup></main>
    }
}

/// Shown instead of the application when the template fetch fails.
#[component]
pub fn BootError(error: String) -> impl IntoView {
    view! {
        <div class="o-boot-error">
            <p>"Failed to load application templates."</p>
            <p>{error}</p>
        </div>
    }
}
