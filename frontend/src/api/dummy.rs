use common::TemplateSet;

use super::{Api, RpcError};

/// Serves canned templates without a server. Useful for offline development
/// and for driving the bootstrap in tests.
#[derive(Debug, Clone)]
pub struct DummyApi {
    templates: TemplateSet,
    fail: bool,
}

impl Default for DummyApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyApi {
    pub fn new() -> Self {
        let mut templates = TemplateSet::new();
        templates
            .insert(
                crate::APP_TEMPLATE,
                r#"<div class="o-storefront"><p>Welcome to the storefront!</p></div>"#,
            )
            .unwrap();
        templates
            .insert(
                crate::components::HEADER_TEMPLATE,
                r#"<nav class="o-header"><span>Storefront</span></nav>"#,
            )
            .unwrap();
        Self {
            templates,
            fail: false,
        }
    }

    /// An api whose only request fails, as if the server were unreachable.
    pub fn failing() -> Self {
        Self {
            templates: TemplateSet::new(),
            fail: true,
        }
    }
}

impl Api for DummyApi {
    async fn load_templates(&self) -> Result<TemplateSet, RpcError> {
        if self.fail {
            return Err(RpcError::Transport("simulated network failure".into()));
        }
        Ok(self.templates.clone())
    }
}
