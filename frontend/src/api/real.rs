use common::{RpcResponse, TemplateSet, LOADQWEB_PATH};
use gloo_net::http::Request;

use super::{Api, RpcError};

/// Talks to the backend over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealApi;

impl RealApi {
    pub fn new() -> Self {
        Self
    }
}

impl Api for RealApi {
    async fn load_templates(&self) -> Result<TemplateSet, RpcError> {
        let response = Request::post(LOADQWEB_PATH)
            .json(&serde_json::json!({}))
            .map_err(|err| RpcError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| RpcError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(RpcError::Status(response.status()));
        }

        let envelope: RpcResponse<TemplateSet> = response
            .json()
            .await
            .map_err(|err| RpcError::Decode(err.to_string()))?;

        envelope.into_result().map_err(RpcError::Server)
    }
}
