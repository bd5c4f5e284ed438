//! Fetch-then-mount bootstrap.
//!
//! One asynchronous suspension point: the template fetch. The application is
//! mounted at most once per page load, and never before templates arrived.

use common::{Env, TemplateSet};
use leptos::{mount::mount_to_body, view};

use crate::api::{Api, RpcError};
use crate::{App, BootError};

/// Everything the mount call receives once templates arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootPayload {
    pub templates: TemplateSet,
    pub env: Env,
}

/// Performs the single template fetch and hands the payload to `mount`.
///
/// `mount` is invoked exactly once on success and never on failure.
pub async fn run<A: Api>(api: A, mount: impl FnOnce(BootPayload)) -> Result<(), RpcError> {
    let templates = api.load_templates().await?;
    let env = Env::default();
    mount(BootPayload { templates, env });
    Ok(())
}

/// Bootstrap entry: fetch templates, then mount the application into the
/// document body.
///
/// A failed fetch leaves the application unmounted; the error is logged and
/// shown in place of it.
pub async fn setup<A: Api>(api: A) {
    if let Err(error) = run(api, |payload| {
        mount_to_body(move || view! { <App templates=payload.templates env=payload.env /> });
    })
    .await
    {
        leptos::logging::error!("failed to load templates: {error}");
        let message = error.to_string();
        mount_to_body(move || view! { <BootError error=message /> });
    }
}
